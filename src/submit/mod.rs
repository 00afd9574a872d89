//! Submission actions and the dispatcher that runs them off the UI thread.
//!
//! A dispatched submission settles exactly once, then a fixed restore delay
//! later reports that the submit control may be re-enabled.

pub(crate) mod action;
mod dispatch;
mod error;

pub use action::{SimulatedSubmission, SubmissionAction};
pub use dispatch::{Dispatcher, SubmissionEvent};
pub use error::SubmissionError;
