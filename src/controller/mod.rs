use crate::core::event::WizardEvent;
use crate::core::field::FieldId;
use crate::core::step::Step;
use crate::core::validation::ValidationIssue;
use crate::core::value::Value;
use crate::state::attachments::AttachmentSet;
use crate::state::draft::Draft;
use crate::state::flow::{Flow, StepStatus};
use crate::state::validation::ValidationState;
use crate::submit::SubmitRunState;

/// Answer of `request_advance`.
#[derive(Debug, PartialEq)]
pub enum Advance {
    Moved { index: usize },
    AtEnd,
    Rejected { issues: Vec<ValidationIssue> },
    Busy,
}

#[derive(Default)]
struct DataState {
    draft: Draft,
    attachments: AttachmentSet,
}

#[derive(Default)]
struct RuntimeState {
    validation: ValidationState,
    submit_run: SubmitRunState,
    pending_events: Vec<WizardEvent>,
}

/// Drives a linear sequence of steps over one accumulating Draft: step-local
/// validation gates forward movement, backward movement is unconditional,
/// and the session ends in a single full-schema-validated submission.
pub struct WizardController {
    flow: Flow,
    data: DataState,
    runtime: RuntimeState,
}

impl WizardController {
    pub fn new(steps: Vec<Step>) -> Self {
        let flow = Flow::new(steps);
        let mut data = DataState::default();
        data.draft.seed_defaults(flow.steps());
        Self {
            flow,
            data,
            runtime: RuntimeState::default(),
        }
    }

    /// Initialize with a known partial record (an authenticated user's
    /// profile, a saved quote). Keys outside the declared schema are
    /// dropped.
    pub fn with_prefill(
        steps: Vec<Step>,
        prefill: impl IntoIterator<Item = (FieldId, Value)>,
    ) -> Self {
        let mut controller = Self::new(steps);
        let declared: Vec<(FieldId, Value)> = prefill
            .into_iter()
            .filter(|(id, _)| {
                controller
                    .flow
                    .steps()
                    .iter()
                    .any(|step| step.declares(id.as_str()))
            })
            .collect();
        controller.data.draft.prefill(declared);
        controller
    }

    pub fn current_index(&self) -> usize {
        self.flow.current_index()
    }

    pub fn step_count(&self) -> usize {
        self.flow.len()
    }

    pub fn steps(&self) -> &[Step] {
        self.flow.steps()
    }

    pub fn status_at(&self, index: usize) -> StepStatus {
        self.flow.status_at(index)
    }

    pub fn current_step_id(&self) -> &str {
        if self.flow.is_empty() {
            return "";
        }
        self.flow.current_step().id()
    }

    pub fn current_title(&self) -> &str {
        if self.flow.is_empty() {
            return "";
        }
        self.flow.current_step().title()
    }

    pub fn current_hint(&self) -> Option<&str> {
        if self.flow.is_empty() {
            return None;
        }
        self.flow.current_step().hint()
    }

    pub fn is_at_end(&self) -> bool {
        self.flow.is_at_end()
    }

    pub fn draft(&self) -> &Draft {
        &self.data.draft
    }

    pub fn value(&self, id: &str) -> Option<&Value> {
        self.data.draft.get(id)
    }

    pub fn attachments(&self) -> &AttachmentSet {
        &self.data.attachments
    }

    pub fn visible_error(&self, id: &str) -> Option<&str> {
        self.runtime.validation.visible_error(id)
    }

    pub fn is_hidden_invalid(&self, id: &str) -> bool {
        self.runtime.validation.is_hidden_invalid(id)
    }

    pub fn step_errors(&self) -> &[String] {
        self.runtime.validation.step_errors()
    }

    pub fn is_submitting(&self) -> bool {
        self.runtime.submit_run.is_running()
    }

    pub fn take_pending_events(&mut self) -> Vec<WizardEvent> {
        self.runtime.pending_events.drain(..).collect()
    }

    /// Discard the session: Draft back to defaults, attachments gone, cursor
    /// on the first step. A submission still in flight becomes stale.
    pub fn reset(&mut self) {
        self.reset_session();
    }

    pub(crate) fn reset_session(&mut self) {
        self.data.draft.seed_defaults(self.flow.steps());
        self.data.attachments.clear_all();
        self.flow.reset();
        self.runtime.validation.clear_all();
        self.runtime.submit_run.abandon();
        tracing::debug!("wizard session reset");
        self.push_event(WizardEvent::SessionReset);
    }

    pub(crate) fn push_event(&mut self, event: WizardEvent) {
        self.runtime.pending_events.push(event);
    }
}

mod navigation;
mod submission;
mod validation_runtime;
mod value_sync;
