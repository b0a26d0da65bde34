pub mod controller;
pub mod core;
pub mod state;
pub mod submit;

pub use crate::controller::{Advance, WizardController};

pub use crate::core::event;
pub use crate::core::field;
pub use crate::core::rule;
pub use crate::core::step;
pub use crate::core::step_builder;
pub use crate::core::validation;
pub use crate::core::value;

pub use crate::state::attachments;
pub use crate::state::draft;
pub use crate::state::flow;

pub use crate::submit::executor;
pub use crate::submit::outcome;
pub use crate::submit::payload;
