//! The display seam between the engine and whatever shows its output.
//!
//! The engine never knows what it renders to. An adapter hands it a
//! [`Surface`] and the engine pushes the current display string into it after
//! every refreshing mutation.

/// Somewhere the display string is shown.
pub trait Surface {
    /// Show `text`, replacing whatever was shown before.
    fn render(&mut self, text: &str);
}

/// A surface that shows nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn render(&mut self, _text: &str) {}
}

/// Behaves like a text element: holds exactly the last rendered frame.
impl Surface for String {
    fn render(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Records every frame in order.
impl Surface for Vec<String> {
    fn render(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn render(&mut self, text: &str) {
        (**self).render(text);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn render(&mut self, text: &str) {
        (**self).render(text);
    }
}
