use crate::core::value::FileRef;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type DocumentKey = String;

/// Auxiliary upload slot, outside the validated field schema. An entry can
/// exist unprovided (a declared-but-missing document) so the presentation
/// layer can render the full checklist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachment {
    pub file: Option<FileRef>,
    pub provided: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub key: DocumentKey,
    pub file_name: String,
    pub size_bytes: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct AttachmentSet {
    entries: IndexMap<DocumentKey, Attachment>,
}

impl AttachmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document slot without a file. No-op for a key that
    /// already holds one.
    pub fn declare(&mut self, key: impl Into<DocumentKey>) {
        self.entries.entry(key.into()).or_default();
    }

    pub fn attach(&mut self, key: impl Into<DocumentKey>, file: FileRef) {
        self.entries.insert(
            key.into(),
            Attachment {
                file: Some(file),
                provided: true,
            },
        );
    }

    pub fn clear(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.file = None;
            entry.provided = false;
        }
    }

    pub fn get(&self, key: &str) -> Option<&Attachment> {
        self.entries.get(key)
    }

    pub fn is_provided(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.provided)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attachment)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Provided entries only, in attach order, as reported in the payload.
    pub fn records(&self) -> Vec<AttachmentRecord> {
        self.entries
            .iter()
            .filter_map(|(key, entry)| {
                let file = entry.file.as_ref()?;
                entry.provided.then(|| AttachmentRecord {
                    key: key.clone(),
                    file_name: file.name.clone(),
                    size_bytes: file.size_bytes,
                })
            })
            .collect()
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::AttachmentSet;
    use crate::core::value::FileRef;

    #[test]
    fn declared_slot_is_listed_but_not_provided() {
        let mut set = AttachmentSet::new();
        set.declare("statutes");
        assert_eq!(set.len(), 1);
        assert!(!set.is_provided("statutes"));
        assert!(set.records().is_empty());
    }

    #[test]
    fn attach_replace_clear_round_trip() {
        let mut set = AttachmentSet::new();
        set.attach("id_card", FileRef::new("id-front.png").with_size_bytes(100));
        set.attach("id_card", FileRef::new("id-back.png"));
        assert!(set.is_provided("id_card"));

        let records = set.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_name, "id-back.png");

        set.clear("id_card");
        assert!(!set.is_provided("id_card"));
        assert!(set.records().is_empty());
        // The slot itself survives for the checklist.
        assert_eq!(set.len(), 1);
    }
}
