use super::WizardController;
use crate::core::field::FieldId;
use crate::core::rule::FieldSpec;
use crate::core::validation::{self, IssueTarget, ValidationIssue};
use crate::core::value::Value;
use crate::state::validation::ErrorVisibility;

impl WizardController {
    /// Live check of a single field, for blur/change hooks in the
    /// presentation layer. Failures stay hidden until an advance or submit
    /// attempt reveals them.
    pub fn validate_field(&mut self, id: &str) -> bool {
        let result = {
            let Some(spec) = self.find_field(id) else {
                return true;
            };
            let value = self.data.draft.get(id).unwrap_or(&Value::None);
            spec.check(value)
        };
        match result {
            Ok(()) => {
                self.runtime.validation.clear_error(id);
                true
            }
            Err(error) => {
                self.runtime
                    .validation
                    .set_error(id.to_string(), error, ErrorVisibility::Hidden);
                false
            }
        }
    }

    pub(super) fn validate_current_step_revealed(&mut self) -> Vec<ValidationIssue> {
        let issues =
            validation::validate_step(self.flow.current_step(), self.data.draft.values());
        let declared: Vec<FieldId> = self.flow.current_step().field_ids().cloned().collect();
        self.apply_issues(&declared, &issues);
        issues
    }

    pub(super) fn validate_schema_revealed(&mut self) -> Vec<ValidationIssue> {
        let issues = validation::validate_schema(self.flow.steps(), self.data.draft.values());
        let declared: Vec<FieldId> = self
            .flow
            .steps()
            .iter()
            .flat_map(|step| step.field_ids().cloned().collect::<Vec<_>>())
            .collect();
        self.apply_issues(&declared, &issues);
        issues
    }

    /// Reveal failures inline and clear entries for checked fields that now
    /// pass, leaving fields outside the checked scope alone.
    fn apply_issues(&mut self, checked: &[FieldId], issues: &[ValidationIssue]) {
        for id in checked {
            self.runtime.validation.clear_error(id.as_str());
        }

        let mut step_errors = Vec::new();
        for issue in issues {
            match &issue.target {
                IssueTarget::Field(id) => {
                    self.runtime.validation.set_error(
                        id.clone(),
                        issue.message.clone(),
                        ErrorVisibility::Inline,
                    );
                }
                IssueTarget::Step => step_errors.push(issue.message.clone()),
            }
        }
        self.runtime.validation.set_step_errors(step_errors);
    }

    fn find_field(&self, id: &str) -> Option<&FieldSpec> {
        self.flow
            .steps()
            .iter()
            .flat_map(|step| step.fields().iter())
            .find(|spec| spec.id().as_str() == id)
    }
}
