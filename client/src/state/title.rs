//! Document title shared by the pages.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

pub const DEFAULT_TITLE: &str = "My Title";

/// Title rendered into `<title>` by `App`.
///
/// Provided via context as `RwSignal<TitleState>`; pages set it on mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleState {
    pub title: String,
}

impl Default for TitleState {
    fn default() -> Self {
        Self { title: DEFAULT_TITLE.to_owned() }
    }
}

impl TitleState {
    pub fn set_title(&mut self, new_title: impl Into<String>) {
        self.title = new_title.into();
    }
}
