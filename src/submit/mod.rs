pub mod executor;
pub mod outcome;
pub mod payload;
pub mod run_state;

pub use executor::SubmitExecutor;
pub use outcome::{SubmitOutcome, SubmitStart};
pub use payload::{
    SubmitCompletion, SubmitError, SubmitInvocation, SubmitPayload, SubmitReceipt, Submitter,
};
pub use run_state::SubmitRunState;
