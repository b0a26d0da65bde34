use super::WizardController;
use crate::core::event::WizardEvent;
use crate::submit::{
    SubmitCompletion, SubmitInvocation, SubmitOutcome, SubmitPayload, SubmitStart, Submitter,
};

impl WizardController {
    /// Gate and prepare the final submission: only on the last step, only
    /// with no submission already in flight, and only after the full schema
    /// validates. On `Started` the host runs the invocation (inline or via
    /// `SubmitExecutor`) and feeds the completion back.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.runtime.submit_run.is_running() {
            tracing::debug!("submit rejected, already in flight");
            return SubmitStart::Busy;
        }
        if self.flow.is_empty() || !self.flow.is_at_end() {
            return SubmitStart::NotAtEnd;
        }

        let issues = self.validate_schema_revealed();
        if !issues.is_empty() {
            tracing::debug!(issues = issues.len(), "submit rejected by validation");
            return SubmitStart::Invalid { issues };
        }

        let run_id = self.runtime.submit_run.begin();
        let payload = self.assemble_payload();
        tracing::info!(
            run_id,
            fields = payload.values.len(),
            attachments = payload.attachments.len(),
            "submission started"
        );
        self.push_event(WizardEvent::SubmitStarted { run_id });
        SubmitStart::Started(SubmitInvocation { run_id, payload })
    }

    /// Apply the collaborator's answer. Success resets the session; failure
    /// leaves Draft, index, and attachments untouched with the message
    /// surfaced verbatim. A completion whose run id is not the in-flight
    /// one is dropped and `None` returned.
    pub fn complete_submit(&mut self, completion: SubmitCompletion) -> Option<SubmitOutcome> {
        if !self.runtime.submit_run.finish(completion.run_id) {
            tracing::warn!(run_id = completion.run_id, "stale submission completion ignored");
            return None;
        }

        match completion.result {
            Ok(receipt) => {
                tracing::info!(
                    run_id = completion.run_id,
                    reference = receipt.reference.as_deref().unwrap_or(""),
                    "submission accepted"
                );
                self.push_event(WizardEvent::SubmitSucceeded {
                    reference: receipt.reference.clone(),
                });
                self.reset_session();
                Some(SubmitOutcome::Accepted { receipt })
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(run_id = completion.run_id, %message, "submission failed");
                self.push_event(WizardEvent::SubmitFailed {
                    message: message.clone(),
                });
                Some(SubmitOutcome::Failed { message })
            }
        }
    }

    /// Single-threaded convenience: gate, call the collaborator inline,
    /// apply its answer.
    pub fn submit_with(&mut self, submitter: &dyn Submitter) -> SubmitOutcome {
        match self.begin_submit() {
            SubmitStart::Started(invocation) => {
                let result = submitter.submit(&invocation.payload);
                self.complete_submit(SubmitCompletion {
                    run_id: invocation.run_id,
                    result,
                })
                // The run we just started cannot be stale.
                .unwrap_or(SubmitOutcome::Busy)
            }
            SubmitStart::Invalid { issues } => SubmitOutcome::Invalid { issues },
            SubmitStart::Busy => SubmitOutcome::Busy,
            SubmitStart::NotAtEnd => SubmitOutcome::NotAtEnd,
        }
    }

    pub(super) fn assemble_payload(&self) -> SubmitPayload {
        SubmitPayload {
            values: self.data.draft.values().clone(),
            attachments: self.data.attachments.records(),
        }
    }
}
