/// At-most-one-in-flight accounting for the session's submission. Run ids
/// are monotonic; a completion only counts if it matches the in-flight run,
/// so a completion racing a session reset is dropped as stale.
#[derive(Debug, Clone, Default)]
pub struct SubmitRunState {
    in_flight: Option<u64>,
    sequence: u64,
    last_finished_run_id: Option<u64>,
}

impl SubmitRunState {
    pub fn is_running(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_run_id(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn last_finished_run_id(&self) -> Option<u64> {
        self.last_finished_run_id
    }

    pub fn begin(&mut self) -> u64 {
        self.sequence = self.sequence.saturating_add(1);
        self.in_flight = Some(self.sequence);
        self.sequence
    }

    pub fn finish(&mut self, run_id: u64) -> bool {
        if self.in_flight != Some(run_id) {
            return false;
        }
        self.in_flight = None;
        self.last_finished_run_id = Some(run_id);
        true
    }

    /// Forget the in-flight run without recording a finish. Its completion,
    /// if it ever arrives, will be stale.
    pub fn abandon(&mut self) {
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitRunState;

    #[test]
    fn second_begin_only_after_finish() {
        let mut run = SubmitRunState::default();
        let first = run.begin();
        assert!(run.is_running());
        assert!(run.finish(first));
        assert!(!run.is_running());
        let second = run.begin();
        assert!(second > first);
    }

    #[test]
    fn stale_run_id_does_not_finish() {
        let mut run = SubmitRunState::default();
        let id = run.begin();
        assert!(!run.finish(id + 1));
        assert!(run.is_running());
        run.abandon();
        assert!(!run.finish(id));
        assert_eq!(run.last_finished_run_id(), None);
    }
}
