use crate::core::rule::FieldSpec;
use crate::core::step::Step;
use crate::core::validation::{StepValidator, ValidationContext, ValidationIssue, matches_field};

pub struct StepBuilder {
    id: String,
    title: String,
    hint: Option<String>,
    fields: Vec<FieldSpec>,
    validators: Vec<StepValidator>,
}

impl StepBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            hint: None,
            fields: Vec::new(),
            validators: Vec::new(),
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn validator(mut self, validator: StepValidator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn confirm(
        self,
        first: impl Into<String>,
        second: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let validator = matches_field(first.into(), second.into(), message);
        self.validator(validator)
    }

    pub fn validate(
        self,
        f: impl Fn(&ValidationContext) -> Option<ValidationIssue> + Send + Sync + 'static,
    ) -> Self {
        self.validator(Box::new(move |ctx| f(ctx).into_iter().collect()))
    }

    pub fn build(self) -> Step {
        Step::new(self.id, self.title, self.fields, self.validators, self.hint)
    }
}

#[cfg(test)]
mod tests {
    use super::StepBuilder;
    use crate::core::field::FieldId;
    use crate::core::rule::FieldSpec;
    use crate::core::validation::{ValidationIssue, validate_step};
    use crate::core::value::Value;
    use indexmap::IndexMap;

    #[test]
    fn builder_keeps_field_declaration_order() {
        let step = StepBuilder::new("company", "Company details")
            .hint("Legal identity of the enterprise")
            .field(FieldSpec::new("name", "Company name"))
            .field(FieldSpec::new("siret", "SIRET"))
            .build();

        let ids: Vec<_> = step.field_ids().map(FieldId::as_str).collect();
        assert_eq!(ids, vec!["name", "siret"]);
        assert_eq!(step.hint(), Some("Legal identity of the enterprise"));
        assert!(step.declares("siret"));
        assert!(!step.declares("email"));
    }

    #[test]
    fn validate_closure_reports_single_issue() {
        let step = StepBuilder::new("offer", "Offer")
            .field(FieldSpec::new("capital", "Capital"))
            .validate(|ctx| {
                (ctx.number("capital").unwrap_or(0) < 10_000)
                    .then(|| ValidationIssue::step("Capital below the plan threshold"))
            })
            .build();

        let mut values = IndexMap::new();
        values.insert(FieldId::from("capital"), Value::Number(500));
        let issues = validate_step(&step, &values);
        assert_eq!(issues, vec![ValidationIssue::step("Capital below the plan threshold")]);
    }
}
