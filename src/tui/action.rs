//! Actions returned by screen event handlers.

use crate::model::FormSnapshot;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to navigate between screens and to dispatch
/// submissions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Hand a validated snapshot to its form's submission action.
    Submit(FormSnapshot),
    /// Quit the application.
    Quit,
}
