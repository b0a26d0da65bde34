use crate::core::field::FieldId;
use indexmap::IndexMap;

/// Hidden entries record that a field is currently invalid without showing
/// anything; Inline entries are rendered next to the field. Live checks mark
/// hidden, a rejected advance or submit reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorVisibility {
    Hidden,
    Inline,
}

#[derive(Debug, Clone)]
pub struct ValidationEntry {
    pub error: String,
    pub visibility: ErrorVisibility,
}

#[derive(Debug, Default, Clone)]
pub struct ValidationState {
    entries: IndexMap<FieldId, ValidationEntry>,
    step_errors: Vec<String>,
}

impl ValidationState {
    pub fn set_error(
        &mut self,
        id: impl Into<FieldId>,
        error: impl Into<String>,
        visibility: ErrorVisibility,
    ) {
        self.entries.insert(
            id.into(),
            ValidationEntry {
                error: error.into(),
                visibility,
            },
        );
    }

    pub fn clear_error(&mut self, id: &str) {
        self.entries.shift_remove(id);
    }

    pub fn set_step_errors(&mut self, errors: Vec<String>) {
        self.step_errors = errors;
    }

    pub fn clear_step_errors(&mut self) {
        self.step_errors.clear();
    }

    pub fn step_errors(&self) -> &[String] {
        self.step_errors.as_slice()
    }

    pub fn visible_error(&self, id: &str) -> Option<&str> {
        self.entries.get(id).and_then(|entry| {
            matches!(entry.visibility, ErrorVisibility::Inline).then_some(entry.error.as_str())
        })
    }

    pub fn is_hidden_invalid(&self, id: &str) -> bool {
        self.entries
            .get(id)
            .is_some_and(|entry| matches!(entry.visibility, ErrorVisibility::Hidden))
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(id, entry)| {
            matches!(entry.visibility, ErrorVisibility::Inline)
                .then_some((id.as_str(), entry.error.as_str()))
        })
    }

    pub fn has_visible_errors(&self) -> bool {
        !self.step_errors.is_empty() || self.visible_entries().next().is_some()
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.step_errors.clear();
    }
}
