use crate::core::validation::ValidationIssue;
use crate::submit::payload::{SubmitInvocation, SubmitReceipt};

/// What `begin_submit` decided. Only `Started` carries work for the host to
/// run; everything else is a terminal answer for this attempt.
#[derive(Debug)]
pub enum SubmitStart {
    Started(SubmitInvocation),
    Invalid { issues: Vec<ValidationIssue> },
    Busy,
    NotAtEnd,
}

/// Final answer of a submission attempt, as data. Validation failures and
/// collaborator failures arrive through the same shape; nothing is thrown.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted { receipt: SubmitReceipt },
    Failed { message: String },
    Invalid { issues: Vec<ValidationIssue> },
    Busy,
    NotAtEnd,
}
