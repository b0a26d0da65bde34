use crate::core::field::FieldId;
use crate::core::rule::FieldSpec;
use crate::core::step_builder::StepBuilder;
use crate::core::validation::StepValidator;

/// One screen of the wizard. Owns the subset of Draft fields it declares and
/// the validators gating forward navigation past it. Fixed at construction,
/// never mutated at runtime.
pub struct Step {
    id: String,
    title: String,
    hint: Option<String>,
    fields: Vec<FieldSpec>,
    validators: Vec<StepValidator>,
}

impl Step {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fields: Vec<FieldSpec>,
        validators: Vec<StepValidator>,
        hint: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            hint,
            fields,
            validators,
        }
    }

    pub fn builder(id: impl Into<String>, title: impl Into<String>) -> StepBuilder {
        StepBuilder::new(id, title)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field_ids(&self) -> impl Iterator<Item = &FieldId> {
        self.fields.iter().map(FieldSpec::id)
    }

    pub fn declares(&self, id: &str) -> bool {
        self.fields.iter().any(|spec| spec.id().as_str() == id)
    }

    pub fn validators(&self) -> &[StepValidator] {
        &self.validators
    }
}
