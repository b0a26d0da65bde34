use crate::core::field::FieldId;
use crate::core::value::Value;
use crate::state::attachments::DocumentKey;

/// Controller-to-presentation notifications. The controller queues these and
/// the host drains them with `take_pending_events`; nothing is pushed.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    FieldChanged {
        id: FieldId,
        value: Value,
    },
    StepEntered {
        index: usize,
        step_id: String,
    },
    AdvanceRejected {
        index: usize,
    },
    AttachmentChanged {
        key: DocumentKey,
    },
    SubmitStarted {
        run_id: u64,
    },
    SubmitSucceeded {
        reference: Option<String>,
    },
    SubmitFailed {
        message: String,
    },
    SessionReset,
}
