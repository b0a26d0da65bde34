use crate::core::field::FieldId;
use crate::core::value::Value;
use regex::Regex;

pub type RuleError = String;
pub type Rule = Box<dyn Fn(&Value) -> Result<(), RuleError> + Send + Sync>;

/// Run a field's rules in declaration order, returning the first error.
pub fn run_rules(rules: &[Rule], value: &Value) -> Result<(), RuleError> {
    for rule in rules {
        rule(value)?;
    }
    Ok(())
}

/// One field of the wizard schema: the id a Draft entry keys on, the label
/// the presentation layer renders, the value the Draft is seeded with, and
/// the ordered rule list `request_advance` checks.
pub struct FieldSpec {
    id: FieldId,
    label: String,
    default: Value,
    rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            default: Value::None,
            rules: Vec::new(),
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.rule(required(message))
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn default(&self) -> &Value {
        &self.default
    }

    pub fn check(&self, value: &Value) -> Result<(), RuleError> {
        run_rules(&self.rules, value)
    }
}

pub fn required(message: impl Into<String>) -> Rule {
    let message = message.into();
    Box::new(move |value: &Value| {
        if value.is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> Rule {
    let message = message.into();
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if text.chars().count() < min_len => Err(message.clone()),
        _ => Ok(()),
    })
}

pub fn max_length(max_len: usize, message: impl Into<String>) -> Rule {
    let message = message.into();
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if text.chars().count() > max_len => Err(message.clone()),
        _ => Ok(()),
    })
}

pub fn pattern(pattern: &str, message: impl Into<String>) -> Rule {
    let re = Regex::new(pattern).expect("Invalid rule pattern");
    let message = message.into();
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if !text.is_empty() && !re.is_match(text) => Err(message.clone()),
        _ => Ok(()),
    })
}

pub fn email(message: impl Into<String>) -> Rule {
    pattern(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$", message)
}

pub fn integer_range(min: i64, max: i64, message: impl Into<String>) -> Rule {
    let message = message.into();
    Box::new(move |value: &Value| {
        if value.is_empty() {
            return Ok(());
        }
        match value.as_number() {
            Some(n) if (min..=max).contains(&n) => Ok(()),
            _ => Err(message.clone()),
        }
    })
}

pub fn one_of(options: Vec<String>, message: impl Into<String>) -> Rule {
    let message = message.into();
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if !text.is_empty() && !options.iter().any(|o| o == text) => {
            Err(message.clone())
        }
        _ => Ok(()),
    })
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Rule
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Box::new(move |value: &Value| if f(value) { Ok(()) } else { Err(message.clone()) })
}

#[cfg(test)]
mod tests {
    use super::{FieldSpec, email, integer_range, min_length, one_of, required, run_rules};
    use crate::core::value::Value;

    #[test]
    fn required_rejects_blank_text() {
        let rule = required("Name is required");
        assert_eq!(rule(&Value::Text("  ".to_string())), Err("Name is required".to_string()));
        assert_eq!(rule(&Value::Text("Acme".to_string())), Ok(()));
    }

    #[test]
    fn first_failing_rule_wins() {
        let rules = vec![
            required("missing"),
            min_length(5, "too short"),
        ];
        assert_eq!(run_rules(&rules, &Value::None), Err("missing".to_string()));
        assert_eq!(
            run_rules(&rules, &Value::Text("abc".to_string())),
            Err("too short".to_string())
        );
        assert_eq!(run_rules(&rules, &Value::Text("abcdef".to_string())), Ok(()));
    }

    #[test]
    fn email_accepts_plausible_addresses_only() {
        let rule = email("Invalid email");
        assert_eq!(rule(&Value::Text("a@b.com".to_string())), Ok(()));
        assert_eq!(rule(&Value::Text("not-an-email".to_string())), Err("Invalid email".to_string()));
        // Empty is the required() rule's concern, not the format rule's.
        assert_eq!(rule(&Value::Text(String::new())), Ok(()));
    }

    #[test]
    fn integer_range_checks_parsed_text() {
        let rule = integer_range(1, 65535, "Out of range");
        assert_eq!(rule(&Value::Text("8080".to_string())), Ok(()));
        assert_eq!(rule(&Value::Number(0)), Err("Out of range".to_string()));
        assert_eq!(rule(&Value::Text("x".to_string())), Err("Out of range".to_string()));
        assert_eq!(rule(&Value::None), Ok(()));
    }

    #[test]
    fn one_of_rejects_unknown_option() {
        let rule = one_of(vec!["sa".to_string(), "sarl".to_string()], "Unknown type");
        assert_eq!(rule(&Value::Text("sa".to_string())), Ok(()));
        assert_eq!(rule(&Value::Text("llc".to_string())), Err("Unknown type".to_string()));
    }

    #[test]
    fn field_spec_runs_rules_in_order() {
        let spec = FieldSpec::new("capital", "Share capital")
            .required("Capital is required")
            .rule(integer_range(1_000_000, i64::MAX, "Minimum capital not met"));
        assert_eq!(spec.check(&Value::None), Err("Capital is required".to_string()));
        assert_eq!(
            spec.check(&Value::Number(500)),
            Err("Minimum capital not met".to_string())
        );
        assert_eq!(spec.check(&Value::Number(10_000_000)), Ok(()));
    }
}
