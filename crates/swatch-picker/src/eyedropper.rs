//! Screen color sampling.
//!
//! Not every host can sample the screen, so the editor holds an
//! `Option<Box<dyn EyeDropper>>` and treats `None` as "capability absent":
//! picking is then a no-op.

/// A platform capability that samples one pixel color from anywhere on screen.
pub trait EyeDropper {
    /// Lets the user pick a pixel. Returns its color as a hex string
    /// (`#RRGGBB`), or `None` when the user cancelled.
    fn open(&mut self) -> Option<String>;
}

impl<F> EyeDropper for F
where
    F: FnMut() -> Option<String>,
{
    fn open(&mut self) -> Option<String> {
        self()
    }
}
