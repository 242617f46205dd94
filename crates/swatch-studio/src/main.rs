use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use swatch_color::{Paint, normalize, parse_color, same_swatch};
use swatch_picker::clipboard::SystemClipboard;
use swatch_picker::logging::{LoggingConfig, init_logging};
use swatch_picker::store::{JsonFileStore, PaletteId, PaletteStore, SwatchId};
use swatch_picker::GradientEditor;

mod report;

#[derive(Parser, Debug)]
#[command(name = "swatch-studio", version)]
#[command(about = "Inspect, normalize and collect CSS colors and gradients")]
struct Cli {
    /// JSON file holding saved palettes.
    #[arg(long, global = true, env = "SWATCH_PALETTE_FILE", default_value = "palettes.json")]
    palette_file: PathBuf,

    /// Log filter in env_logger syntax, e.g. "debug" or "swatch_color=trace".
    #[arg(long, global = true, env = "SWATCH_LOG")]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical form of a color or gradient.
    Normalize { css: String },
    /// Show the kind, angle and stops of a color or gradient.
    Inspect { css: String },
    /// Print a solid color as rgba, hex and hsla.
    Convert { color: String },
    /// Color of a gradient at an offset in percent.
    Sample {
        css: String,
        #[arg(allow_negative_numbers = true)]
        offset: f32,
    },
    /// Normalize and copy to the system clipboard.
    Copy { css: String },
    #[command(subcommand)]
    Palette(PaletteCommand),
}

#[derive(Subcommand, Debug)]
enum PaletteCommand {
    /// List palettes and their swatches.
    List,
    Add { name: String },
    Remove { id: u64 },
    /// Save a color or gradient (normalized) into a palette.
    AddColor { palette: u64, css: String },
    RemoveColor { id: u64 },
    /// List saved swatches equal to the given color or gradient.
    Match { css: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cli.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Command::Normalize { css } => writeln!(out, "{}", normalize(&css))?,
        Command::Inspect { css } => write!(out, "{}", report::inspect(&Paint::from_css(&css)))?,
        Command::Convert { color } => {
            let c = parse_color(&color).with_context(|| format!("cannot read color {color:?}"))?;
            write!(out, "{}", report::color_lines(c))?;
        }
        Command::Sample { css, offset } => {
            let c = match Paint::from_css(&css) {
                Paint::Solid(c) => c,
                Paint::Gradient(g) => g.color_at(offset),
            };
            write!(out, "{}", report::color_lines(c))?;
        }
        Command::Copy { css } => {
            let editor = GradientEditor::from_css(&css);
            editor.copy_css(&mut SystemClipboard);
            writeln!(out, "{}", editor.css())?;
        }
        Command::Palette(cmd) => {
            log::debug!("using palette file {}", cli.palette_file.display());
            let mut store = JsonFileStore::open(&cli.palette_file).with_context(|| {
                format!("failed to open palette file {}", cli.palette_file.display())
            })?;
            run_palette(cmd, &mut store, out)?;
        }
    }
    Ok(())
}

fn run_palette(cmd: PaletteCommand, store: &mut dyn PaletteStore, out: &mut dyn Write) -> Result<()> {
    match cmd {
        PaletteCommand::List => {
            for palette in store.palettes() {
                writeln!(out, "{}", report::palette_line(&palette))?;
                for swatch in store.swatches(palette.id)? {
                    writeln!(out, "    {}", report::swatch_line(&swatch))?;
                }
            }
        }
        PaletteCommand::Add { name } => {
            let palette = store.add_palette(&name).context("failed to add palette")?;
            writeln!(out, "{}", report::palette_line(&palette))?;
        }
        PaletteCommand::Remove { id } => {
            store.delete_palette(PaletteId(id)).context("failed to remove palette")?;
        }
        PaletteCommand::AddColor { palette, css } => {
            let swatch = GradientEditor::from_css(&css)
                .save_to(store, PaletteId(palette))
                .context("failed to save swatch")?;
            writeln!(out, "{}", report::swatch_line(&swatch))?;
        }
        PaletteCommand::RemoveColor { id } => {
            store.delete_color(SwatchId(id)).context("failed to remove swatch")?;
        }
        PaletteCommand::Match { css } => {
            let mut found = false;
            for palette in store.palettes() {
                for swatch in store.swatches(palette.id)? {
                    if same_swatch(&css, &swatch.value) {
                        writeln!(out, "{}  {}", palette.name, report::swatch_line(&swatch))?;
                        found = true;
                    }
                }
            }
            if !found {
                bail!("no saved swatch matches {css:?}");
            }
        }
    }
    Ok(())
}
