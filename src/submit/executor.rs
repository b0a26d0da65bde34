use crate::submit::payload::{SubmitCompletion, SubmitInvocation, Submitter};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Runs submissions off the UI thread. The host spawns the invocation
/// returned by `begin_submit`, keeps pumping its event loop, and feeds
/// drained completions back into `complete_submit`.
pub struct SubmitExecutor {
    completion_tx: Sender<SubmitCompletion>,
    completion_rx: Receiver<SubmitCompletion>,
}

impl SubmitExecutor {
    pub fn new() -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SubmitCompletion>();
        Self {
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, submitter: Arc<dyn Submitter + Send + Sync>, invocation: SubmitInvocation) {
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let result = submitter.submit(&invocation.payload);
            let _ = completion_tx.send(SubmitCompletion {
                run_id: invocation.run_id,
                result,
            });
        });
    }

    pub fn drain_ready(&self) -> Vec<SubmitCompletion> {
        let mut out = Vec::<SubmitCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

impl Default for SubmitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitExecutor;
    use crate::submit::payload::{
        SubmitError, SubmitInvocation, SubmitPayload, SubmitReceipt, Submitter,
    };
    use indexmap::IndexMap;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct StubBackend;

    impl Submitter for StubBackend {
        fn submit(&self, _payload: &SubmitPayload) -> Result<SubmitReceipt, SubmitError> {
            Ok(SubmitReceipt::with_reference("rec_42"))
        }
    }

    #[test]
    fn spawned_submission_completes_through_the_channel() {
        let executor = SubmitExecutor::new();
        executor.spawn(
            Arc::new(StubBackend),
            SubmitInvocation {
                run_id: 1,
                payload: SubmitPayload {
                    values: IndexMap::new(),
                    attachments: Vec::new(),
                },
            },
        );

        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let completions = executor.drain_ready();
            if !completions.is_empty() {
                assert_eq!(completions[0].run_id, 1);
                assert_eq!(
                    completions[0].result,
                    Ok(SubmitReceipt::with_reference("rec_42"))
                );
                break;
            }
            assert!(Instant::now() < deadline, "completion never arrived");
            std::thread::sleep(Duration::from_millis(5));
        }
    }
}
