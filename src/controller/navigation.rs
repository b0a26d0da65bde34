use super::{Advance, WizardController};
use crate::core::event::WizardEvent;

impl WizardController {
    /// Validate only the current step's declared fields; move forward one
    /// step when they all pass. The index saturates at the last step.
    pub fn request_advance(&mut self) -> Advance {
        if self.flow.is_empty() {
            return Advance::AtEnd;
        }
        if self.runtime.submit_run.is_running() {
            tracing::debug!("advance rejected, submission in flight");
            return Advance::Busy;
        }

        let issues = self.validate_current_step_revealed();
        if !issues.is_empty() {
            let index = self.flow.current_index();
            tracing::debug!(
                step = self.flow.current_step().id(),
                issues = issues.len(),
                "advance rejected"
            );
            self.push_event(WizardEvent::AdvanceRejected { index });
            return Advance::Rejected { issues };
        }

        if !self.flow.advance() {
            return Advance::AtEnd;
        }

        self.runtime.validation.clear_step_errors();
        let index = self.flow.current_index();
        let step_id = self.flow.current_step().id().to_string();
        tracing::debug!(step = %step_id, index, "entered step");
        self.push_event(WizardEvent::StepEntered { index, step_id });
        Advance::Moved { index }
    }

    /// Move backward one step, floored at the first. Never validates; the
    /// Draft is untouched.
    pub fn request_back(&mut self) -> bool {
        if !self.flow.retreat() {
            return false;
        }
        self.runtime.validation.clear_step_errors();
        let index = self.flow.current_index();
        let step_id = self.flow.current_step().id().to_string();
        tracing::debug!(step = %step_id, index, "entered step");
        self.push_event(WizardEvent::StepEntered { index, step_id });
        true
    }
}
