use crate::core::field::FieldId;
use crate::core::step::Step;
use crate::core::value::Value;
use indexmap::IndexMap;
use std::collections::HashSet;

/// The in-progress record accumulated across wizard steps. Keys keep
/// insertion order so the submitted payload is deterministic. The touched
/// set records which fields hold user-entered data rather than seeded
/// defaults.
#[derive(Default)]
pub struct Draft {
    values: IndexMap<FieldId, Value>,
    touched: HashSet<FieldId>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every declared field with its schema default, in declaration
    /// order. Existing values and touched marks are discarded.
    pub fn seed_defaults(&mut self, steps: &[Step]) {
        self.values.clear();
        self.touched.clear();
        for step in steps {
            for spec in step.fields() {
                self.values
                    .entry(spec.id().clone())
                    .or_insert_with(|| spec.default().clone());
            }
        }
    }

    /// Overlay a known partial record (a user profile, a saved quote) without
    /// marking the fields as touched.
    pub fn prefill(&mut self, values: impl IntoIterator<Item = (FieldId, Value)>) {
        for (id, value) in values {
            self.values.insert(id, value);
        }
    }

    pub fn set(&mut self, id: impl Into<FieldId>, value: Value) {
        let id = id.into();
        self.touched.insert(id.clone());
        self.values.insert(id, value);
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn is_touched(&self, id: &str) -> bool {
        self.touched.contains(id)
    }

    pub fn is_empty_at(&self, id: &str) -> bool {
        self.get(id).is_none_or(Value::is_empty)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &Value)> {
        self.values.iter()
    }

    pub fn values(&self) -> &IndexMap<FieldId, Value> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::Draft;
    use crate::core::field::FieldId;
    use crate::core::rule::FieldSpec;
    use crate::core::step::Step;
    use crate::core::value::Value;

    fn schema() -> Vec<Step> {
        vec![
            Step::builder("identity", "Identity")
                .field(FieldSpec::new("name", "Name"))
                .field(FieldSpec::new("country", "Country").with_default("CI"))
                .build(),
            Step::builder("contact", "Contact")
                .field(FieldSpec::new("email", "Email"))
                .build(),
        ]
    }

    #[test]
    fn seeding_applies_defaults_in_declaration_order() {
        let mut draft = Draft::new();
        draft.seed_defaults(&schema());

        let ids: Vec<_> = draft.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["name", "country", "email"]);
        assert_eq!(draft.get("country"), Some(&Value::Text("CI".to_string())));
        assert!(!draft.is_touched("country"));
    }

    #[test]
    fn set_marks_touched_and_reseeding_clears_it() {
        let mut draft = Draft::new();
        draft.seed_defaults(&schema());
        draft.set("name", Value::from("Acme SARL"));
        assert!(draft.is_touched("name"));

        draft.seed_defaults(&schema());
        assert!(!draft.is_touched("name"));
        assert_eq!(draft.get("name"), Some(&Value::None));
    }

    #[test]
    fn prefill_overlays_without_touching() {
        let mut draft = Draft::new();
        draft.seed_defaults(&schema());
        draft.prefill([(FieldId::from("email"), Value::from("a@b.com"))]);
        assert_eq!(draft.get("email"), Some(&Value::Text("a@b.com".to_string())));
        assert!(!draft.is_touched("email"));
    }
}
