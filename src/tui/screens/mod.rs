//! TUI screen implementations.

pub mod enquiry;
pub mod help;
pub mod home;

pub use enquiry::{EnquiryState, draw_enquiry};
pub use help::{HelpState, draw_help};
pub use home::{HomeState, draw_home};
