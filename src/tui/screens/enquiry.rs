//! Enquiry screens: the contact and service-request forms.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{FormController, SubmitOutcome, contact_form, service_form};
use crate::model::FormKind;
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::draw_form;
use crate::tui::widgets::status_bar::{StatusBarContext, draw_status_bar};

/// State for one enquiry form screen.
#[derive(Debug, Clone)]
pub struct EnquiryState {
    controller: FormController,
}

impl EnquiryState {
    /// Wraps an existing controller.
    pub fn new(controller: FormController) -> Self {
        Self { controller }
    }

    /// Creates the contact form screen.
    pub fn contact() -> Self {
        Self::new(contact_form())
    }

    /// Creates the service-request form screen.
    pub fn service() -> Self {
        Self::new(service_form())
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FormController {
        &mut self.controller
    }

    /// Screen title for the wrapped form.
    pub fn title(&self) -> &'static str {
        match self.controller.kind() {
            FormKind::Contact => "Contact Us",
            FormKind::Service => "Request a Service",
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.controller.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.controller.focus_prev();
                Action::None
            }
            KeyCode::Right => {
                self.controller.cycle_option(true);
                Action::None
            }
            KeyCode::Left => {
                self.controller.cycle_option(false);
                Action::None
            }
            // Ctrl and Alt chords are shortcuts, never text.
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::None
            }
            KeyCode::Char(ch) => {
                self.controller.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.controller.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::Navigate(Screen::Home),
            KeyCode::Enter => match self.controller.submit() {
                SubmitOutcome::Started(snapshot) => Action::Submit(snapshot),
                SubmitOutcome::Rejected | SubmitOutcome::Busy => Action::None,
            },
            _ => Action::None,
        }
    }
}

/// Renders an enquiry form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_enquiry(state: &EnquiryState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", state.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, status_area, footer_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    let controller = state.controller();
    draw_form(controller.fields(), controller.focus(), frame, form_area);
    draw_status_bar(
        &StatusBarContext::from_controller(controller),
        frame,
        status_area,
    );

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  ←/→: choose option  Enter: submit  Esc: back  F1: help",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
