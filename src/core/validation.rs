use crate::core::field::FieldId;
use crate::core::step::Step;
use crate::core::value::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum IssueTarget {
    Field(FieldId),
    Step,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub target: IssueTarget,
    pub message: String,
}

impl ValidationIssue {
    pub fn field(id: impl Into<FieldId>, message: impl Into<String>) -> Self {
        Self {
            target: IssueTarget::Field(id.into()),
            message: message.into(),
        }
    }

    pub fn step(message: impl Into<String>) -> Self {
        Self {
            target: IssueTarget::Step,
            message: message.into(),
        }
    }
}

/// Snapshot of the Draft a step validator runs against. Carries the whole
/// record, not just the current step's slice, so a validator owning the
/// second half of a cross-step pair (password on one step, confirmation on
/// the next) can see both.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    step_id: String,
    values: HashMap<FieldId, Value>,
}

impl ValidationContext {
    pub fn new(step_id: impl Into<String>, values: HashMap<FieldId, Value>) -> Self {
        Self {
            step_id: step_id.into(),
            values,
        }
    }

    pub fn step_id(&self) -> &str {
        &self.step_id
    }

    pub fn value(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.value(id).and_then(Value::as_text)
    }

    pub fn bool_value(&self, id: &str) -> Option<bool> {
        self.value(id).and_then(Value::as_bool)
    }

    pub fn number(&self, id: &str) -> Option<i64> {
        self.value(id).and_then(Value::as_number)
    }

    pub fn is_empty(&self, id: &str) -> bool {
        self.value(id).is_none_or(Value::is_empty)
    }

    pub fn values(&self) -> &HashMap<FieldId, Value> {
        &self.values
    }
}

pub type StepValidator = Box<dyn Fn(&ValidationContext) -> Vec<ValidationIssue> + Send + Sync>;

/// Cross-field equality, surfaced at the field entered second.
pub fn matches_field(
    first: impl Into<FieldId>,
    second: impl Into<FieldId>,
    message: impl Into<String>,
) -> StepValidator {
    let first = first.into();
    let second = second.into();
    let message = message.into();
    Box::new(move |ctx: &ValidationContext| {
        if ctx.is_empty(second.as_str()) {
            return Vec::new();
        }
        if ctx.value(first.as_str()) == ctx.value(second.as_str()) {
            return Vec::new();
        }
        vec![ValidationIssue::field(second.clone(), message.clone())]
    })
}

/// Validate one step against the current Draft values: field rules in
/// declaration order first, then the step's cross-field validators. Fields
/// outside this step are never checked here.
pub fn validate_step(step: &Step, values: &IndexMap<FieldId, Value>) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = step
        .fields()
        .iter()
        .filter_map(|spec| {
            let value = values.get(spec.id()).unwrap_or(&Value::None);
            spec.check(value)
                .err()
                .map(|err| ValidationIssue::field(spec.id().clone(), err))
        })
        .collect();

    if !step.validators().is_empty() {
        let ctx = ValidationContext::new(step.id(), snapshot(values));
        for validator in step.validators() {
            issues.extend(validator(&ctx));
        }
    }

    issues
}

/// Validate every field declared by any step. Used to gate the final
/// submission, covering steps retreated past and never revisited.
pub fn validate_schema(steps: &[Step], values: &IndexMap<FieldId, Value>) -> Vec<ValidationIssue> {
    steps
        .iter()
        .flat_map(|step| validate_step(step, values))
        .collect()
}

fn snapshot(values: &IndexMap<FieldId, Value>) -> HashMap<FieldId, Value> {
    values
        .iter()
        .map(|(id, value)| (id.clone(), value.clone()))
        .collect()
}
