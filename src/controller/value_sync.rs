use super::WizardController;
use crate::core::event::WizardEvent;
use crate::core::field::FieldId;
use crate::core::value::{FileRef, Value};
use crate::state::attachments::DocumentKey;

impl WizardController {
    /// Merge one key into the Draft and mark it touched. Never validates;
    /// a stale inline error for the field no longer describes what the user
    /// sees, so it is dropped.
    pub fn update_field(&mut self, id: impl Into<FieldId>, value: impl Into<Value>) {
        let id = id.into();
        let value = value.into();
        self.data.draft.set(id.clone(), value.clone());
        self.runtime.validation.clear_error(id.as_str());
        tracing::debug!(field = %id, "field updated");
        self.push_event(WizardEvent::FieldChanged { id, value });
    }

    /// Register a document slot with no file yet, so the presentation layer
    /// can render the full checklist.
    pub fn declare_document(&mut self, key: impl Into<DocumentKey>) {
        self.data.attachments.declare(key);
    }

    /// Set or replace the upload for a document key. Never affects Draft
    /// validation.
    pub fn attach_file(&mut self, key: impl Into<DocumentKey>, file: FileRef) {
        let key = key.into();
        self.data.attachments.attach(key.clone(), file);
        self.push_event(WizardEvent::AttachmentChanged { key });
    }

    pub fn clear_file(&mut self, key: &str) {
        self.data.attachments.clear(key);
        self.push_event(WizardEvent::AttachmentChanged {
            key: key.to_string(),
        });
    }
}
