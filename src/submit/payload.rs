use crate::core::field::FieldId;
use crate::core::value::Value;
use crate::state::attachments::AttachmentRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The external submission collaborator: an HTTP create endpoint, a payment
/// bridge, a test stub. The wizard hands it the assembled payload and treats
/// whatever happens next (redirects, follow-up calls) as its business.
pub trait Submitter {
    fn submit(&self, payload: &SubmitPayload) -> Result<SubmitReceipt, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct SubmitPayload {
    pub values: IndexMap<FieldId, Value>,
    pub attachments: Vec<AttachmentRecord>,
}

impl SubmitPayload {
    /// Flat record an HTTP create endpoint receives, one key per field in
    /// declaration order, attachments under a reserved key.
    pub fn to_json(&self) -> serde_json::Value {
        let mut record = serde_json::Map::new();
        for (id, value) in &self.values {
            record.insert(id.to_string(), value.to_json());
        }
        if !self.attachments.is_empty() {
            let attachments = self
                .attachments
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "document": a.key,
                        "file_name": a.file_name,
                        "size_bytes": a.size_bytes,
                    })
                })
                .collect();
            record.insert("attachments".to_string(), serde_json::Value::Array(attachments));
        }
        serde_json::Value::Object(record)
    }
}

/// Optional created-record identifier returned by the collaborator, used by
/// hosts to key follow-up actions (payment redirect, detail view).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub reference: Option<String>,
}

impl SubmitReceipt {
    pub fn with_reference(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend refused the record; the message is shown to the user
    /// verbatim.
    #[error("{message}")]
    Rejected { message: String },
    /// The call never produced a backend answer.
    #[error("{message}")]
    Transport { message: String },
}

impl SubmitError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message } | Self::Transport { message } => message.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitInvocation {
    pub run_id: u64,
    pub payload: SubmitPayload,
}

#[derive(Debug, Clone)]
pub struct SubmitCompletion {
    pub run_id: u64,
    pub result: Result<SubmitReceipt, SubmitError>,
}

#[cfg(test)]
mod tests {
    use super::{SubmitError, SubmitPayload};
    use crate::core::field::FieldId;
    use crate::core::value::Value;
    use crate::state::attachments::AttachmentRecord;
    use indexmap::IndexMap;

    #[test]
    fn payload_json_is_a_flat_record_with_attachments() {
        let mut values = IndexMap::new();
        values.insert(FieldId::from("name"), Value::from("Acme SA"));
        values.insert(FieldId::from("capital"), Value::Number(10_000_000));
        let payload = SubmitPayload {
            values,
            attachments: vec![AttachmentRecord {
                key: "statutes".to_string(),
                file_name: "statutes.pdf".to_string(),
                size_bytes: Some(2048),
            }],
        };

        assert_eq!(
            payload.to_json(),
            serde_json::json!({
                "name": "Acme SA",
                "capital": 10_000_000,
                "attachments": [
                    {"document": "statutes", "file_name": "statutes.pdf", "size_bytes": 2048}
                ],
            })
        );
    }

    #[test]
    fn rejection_message_survives_verbatim() {
        let err = SubmitError::rejected("Ce nom d'entreprise est déjà utilisé");
        assert_eq!(err.to_string(), "Ce nom d'entreprise est déjà utilisé");
    }
}
