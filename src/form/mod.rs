//! Reusable form controller, reveal rules and the site's form catalog.

pub mod catalog;
mod controller;
mod rules;

pub use catalog::{contact_form, service_form};
pub use controller::{FormController, FormMessages, Phase, Status, SubmitOutcome, Tone};
pub use rules::RevealRule;
