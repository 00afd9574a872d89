//! Help screen: keys for the screen it was opened from, then the global keys.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

/// Rows taken by the border and the footer hint.
const CHROME_ROWS: u16 = 3;

/// Width of the key column.
const KEY_COLUMN: usize = 20;

/// A titled group of `(keys, description)` pairs.
struct KeyGroup {
    heading: &'static str,
    keys: &'static [(&'static str, &'static str)],
}

impl KeyGroup {
    /// Blank spacer, heading, then one line per binding.
    fn height(&self) -> u16 {
        self.keys.len() as u16 + 2
    }
}

static HOME: KeyGroup = KeyGroup {
    heading: "Home",
    keys: &[
        ("m", "open / close menu"),
        ("↑/↓ in menu", "choose section"),
        ("Enter in menu", "jump to section"),
        ("↑/↓ / PgUp/PgDn", "scroll page"),
        ("Home / End", "top / bottom"),
        ("c", "contact form"),
        ("s", "service request form"),
        ("q / Esc", "quit"),
    ],
};

static CONTACT: KeyGroup = KeyGroup {
    heading: "Contact",
    keys: FORM_KEYS,
};

static SERVICE: KeyGroup = KeyGroup {
    heading: "Service Request",
    keys: FORM_KEYS,
};

const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("←/→", "choose option"),
    ("Enter", "submit"),
    ("Esc", "back to home"),
];

static HELP: KeyGroup = KeyGroup {
    heading: "Help",
    keys: &[
        ("↑/↓ / PgUp/PgDn", "scroll"),
        ("q / Esc", "back"),
    ],
};

static GLOBAL: KeyGroup = KeyGroup {
    heading: "Anywhere",
    keys: &[("F1", "this help"), ("Ctrl+C", "quit")],
};

fn groups(origin: Screen) -> [&'static KeyGroup; 2] {
    let screen = match origin {
        Screen::Home => &HOME,
        Screen::Contact => &CONTACT,
        Screen::ServiceRequest => &SERVICE,
        Screen::Help => &HELP,
    };
    [screen, &GLOBAL]
}

/// Returns the help content height for a terminal of `total_rows`.
pub fn content_height(total_rows: u16) -> u16 {
    total_rows.saturating_sub(CHROME_ROWS)
}

/// Renders the key reference for `origin` as styled lines.
pub fn help_lines(origin: Screen) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Yellow);
    let desc = Style::default().fg(Color::DarkGray);

    groups(origin)
        .into_iter()
        .flat_map(|group| {
            let bindings = group.keys.iter().map(move |(k, d)| {
                Line::from(vec![
                    Span::styled(format!("  {k:<KEY_COLUMN$}"), key),
                    Span::styled(*d, desc),
                ])
            });
            [Line::from(""), Line::from(Span::styled(group.heading, heading))]
                .into_iter()
                .chain(bindings)
        })
        .collect()
}

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    origin: Screen,
    scroll: u16,
    viewport: u16,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Starts at the top, opened from [`Screen::Home`].
    pub fn new() -> Self {
        Self {
            origin: Screen::Home,
            scroll: 0,
            viewport: 0,
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the screen that opened help.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Sets the screen to return to and whose keys are listed.
    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Records the content rows available and pulls the scroll back into range.
    pub fn set_viewport(&mut self, rows: u16) {
        self.viewport = rows;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Number of content lines for the current origin.
    pub fn line_count(&self) -> u16 {
        groups(self.origin).iter().map(|g| g.height()).sum()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let page = i32::from(self.viewport.max(1));
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            KeyCode::Char('q') | KeyCode::Esc => return Action::Navigate(self.origin),
            _ => {}
        }
        Action::None
    }

    fn max_scroll(&self) -> u16 {
        self.line_count().saturating_sub(self.viewport)
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(target).unwrap_or(0);
    }
}

fn screen_name(screen: Screen) -> &'static str {
    groups(screen)[0].heading
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Help: {} ", screen_name(state.origin())))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content = Paragraph::new(help_lines(state.origin())).scroll((state.scroll(), 0));
    frame.render_widget(content, content_area);

    let footer = Paragraph::new("↑/↓ PgUp/PgDn: scroll  q/Esc: back")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
