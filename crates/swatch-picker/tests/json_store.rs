use std::fs;

use swatch_picker::store::{JsonFileStore, PaletteId, PaletteStore, StoreError, StoreEvent};

#[test]
fn missing_file_opens_empty_and_is_created_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palettes.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    assert!(store.palettes().is_empty());
    assert!(!path.exists());

    store.add_palette("Sunset").unwrap();
    assert!(path.exists());
}

#[test]
fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palettes.json");

    let (palette, swatch) = {
        let mut store = JsonFileStore::open(&path).unwrap();
        let p = store.add_palette("Sunset").unwrap();
        let s = store.add_color(p.id, "rgba(255, 94, 77, 1)").unwrap();
        (p, s)
    };

    let mut reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.palettes(), vec![palette.clone()]);
    assert_eq!(reopened.swatches(palette.id).unwrap(), vec![swatch.clone()]);

    // Fresh ids continue above the loaded ones.
    let next = reopened.add_palette("Night").unwrap();
    assert!(next.id.0 > swatch.id.0);
}

#[test]
fn file_uses_camel_case_palette_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palettes.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    let p = store.add_palette("A").unwrap();
    store.add_color(p.id, "#000").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"paletteId\": 1"), "{text}");
}

#[test]
fn hand_written_document_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palettes.json");
    fs::write(
        &path,
        r##"{
            "palettes": [{ "id": 3, "name": "Brand" }],
            "swatches": [
                { "id": 4, "value": "linear-gradient(90deg, #f00, #00f)", "paletteId": 3 },
                { "id": 5, "value": "#fff", "paletteId": 99 }
            ]
        }"##,
    )
    .unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    let swatches = store.swatches(PaletteId(3)).unwrap();
    assert_eq!(swatches.len(), 1);
    assert_eq!(swatches[0].value, "linear-gradient(90deg, #f00, #00f)");
}

#[test]
fn empty_file_is_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palettes.json");
    fs::write(&path, "  \n").unwrap();
    assert!(JsonFileStore::open(&path).unwrap().palettes().is_empty());
}

#[test]
fn corrupt_file_reports_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palettes.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Json(_))));
}

#[test]
fn subscribers_see_file_store_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("p.json")).unwrap();
    let rx = store.subscribe();
    let p = store.add_palette("A").unwrap().id;
    store.delete_palette(p).unwrap();
    let events: Vec<StoreEvent> = rx.try_iter().collect();
    assert_eq!(events, vec![StoreEvent::PaletteAdded(p), StoreEvent::PaletteDeleted(p)]);
}

#[test]
fn failed_write_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palettes.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    let rx = store.subscribe();

    // A directory in the file's place makes the final rename fail.
    fs::create_dir(&path).unwrap();
    assert!(matches!(store.add_palette("Ghost"), Err(StoreError::Io(_))));
    assert!(store.palettes().is_empty());
    assert!(rx.try_recv().is_err());

    fs::remove_dir(&path).unwrap();
    let palette = store.add_palette("Real").unwrap();
    assert_eq!(palette.id, PaletteId(1));
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![StoreEvent::PaletteAdded(palette.id)]);
}

#[test]
fn rejected_mutation_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palettes.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    let p = store.add_palette("Kept").unwrap().id;
    let before = fs::read_to_string(&path).unwrap();

    // Validation failures never reach the file.
    assert!(store.add_color(PaletteId(99), "#fff").is_err());
    assert!(store.delete_palette(PaletteId(99)).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert!(store.swatches(p).unwrap().is_empty());
}
