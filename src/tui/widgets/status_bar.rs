//! Status bar widget: the submit control and the form's status message.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::form::{FormController, Status, Tone};

/// Data passed to the status bar widget; decoupled from [`FormController`] for rendering tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Current label of the submit control.
    pub submit_label: String,
    /// Whether the submit control accepts a submission.
    pub submit_enabled: bool,
    /// Last status message, if any.
    pub status: Option<Status>,
}

impl StatusBarContext {
    /// Captures what the status bar shows for `controller`.
    pub fn from_controller(controller: &FormController) -> Self {
        Self {
            submit_label: controller.submit_label().to_string(),
            submit_enabled: controller.is_submit_enabled(),
            status: controller.status().cloned(),
        }
    }
}

/// Renders the submit control on the first line and the status message on the second.
///
/// The control is drawn as `[ label ]`, highlighted when enabled and dimmed
/// while a submission is in flight. Success messages are green, errors red.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let [button_area, status_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let button_style = if ctx.submit_enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ]", ctx.submit_label),
        button_style,
    )));
    frame.render_widget(button, button_area);

    if let Some(status) = &ctx.status {
        let color = match status.tone {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
        };
        let line = Paragraph::new(Span::styled(
            status.text.clone(),
            Style::default().fg(color),
        ));
        frame.render_widget(line, status_area);
    }
}
