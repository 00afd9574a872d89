//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;

pub use form::{border_color, draw_form, visible_window};
pub use status_bar::{StatusBarContext, draw_status_bar};
