use super::{FieldHandle, SELECTION_END};

/// In-memory stand-in for the `<input>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockField {
    pub value: String,
    pub focused: bool,
    /// Selected character range.
    pub selection: Option<(usize, usize)>,
    pub clipboard: Option<String>,
}

impl MockField {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), ..Default::default() }
    }

    pub fn focused(value: impl Into<String>) -> Self {
        Self { focused: true, ..Self::new(value) }
    }
}

impl FieldHandle for MockField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        self.selection = None;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn select_all(&mut self) {
        // Like `setSelectionRange`, the end is clamped to the value length.
        self.selection = Some((0, SELECTION_END.min(self.value.chars().count())));
    }

    fn copy_selection(&mut self) {
        if let Some((start, end)) = self.selection {
            self.clipboard = Some(self.value.chars().skip(start).take(end - start).collect());
        }
    }
}
