//! Home screen: the brochure page with navigation menu and reveal-on-scroll sections.

use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

/// Studio name shown in the header and footer.
pub const BRAND: &str = "Brightside Studio";

/// Rows taken by the border, header and footer around the page content.
const CHROME_ROWS: u16 = 4;

/// Bottom rows of the viewport that do not count towards revealing a section.
const REVEAL_MARGIN: u16 = 2;

/// One titled block of the brochure page.
#[derive(Debug)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static [&'static str],
}

impl Section {
    /// Title line, body lines and one blank separator.
    fn height(&self) -> u16 {
        self.body.len() as u16 + 2
    }
}

pub static SECTIONS: &[Section] = &[
    Section {
        title: "Welcome",
        body: &[
            "We design and build websites and apps for small businesses.",
            "Press c to get in touch or s to request a service.",
        ],
    },
    Section {
        title: "Services",
        body: &[
            "Web Development: fast, accessible marketing sites and shops.",
            "Application Development: web and mobile apps from prototype to launch.",
            "UI/UX Design: research, wireframes and design systems.",
            "Consulting: architecture reviews and technical due diligence.",
            "Maintenance & Support: updates, monitoring and fixes.",
        ],
    },
    Section {
        title: "Process",
        body: &[
            "1. Discovery call to understand your goals.",
            "2. Proposal with scope, timeline and budget.",
            "3. Build in short iterations with weekly demos.",
            "4. Launch, then hand over or keep us on for support.",
        ],
    },
    Section {
        title: "About",
        body: &[
            "A small, senior team that has shipped for startups and charities.",
            "We answer every message within one business day.",
        ],
    },
    Section {
        title: "Contact",
        body: &[
            "c: send us a message",
            "s: request a service with budget and deadline",
        ],
    },
];

/// Returns the page content height for a terminal of `total_rows`.
pub fn content_height(total_rows: u16) -> u16 {
    total_rows.saturating_sub(CHROME_ROWS)
}

/// Footer text for the given year.
pub fn footer_text(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}

/// First line of each section within the page.
fn section_offsets() -> Vec<u16> {
    SECTIONS
        .iter()
        .scan(0_u16, |offset, section| {
            let start = *offset;
            *offset += section.height();
            Some(start)
        })
        .collect()
}

fn page_height() -> u16 {
    SECTIONS.iter().map(Section::height).sum()
}

/// State for the home screen.
#[derive(Debug, Clone)]
pub struct HomeState {
    scroll: u16,
    viewport: u16,
    menu_open: bool,
    menu_selected: usize,
    revealed: Vec<bool>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeState {
    /// Creates the page scrolled to the top with the menu collapsed.
    pub fn new() -> Self {
        Self {
            scroll: 0,
            viewport: 0,
            menu_open: false,
            menu_selected: 0,
            revealed: vec![false; SECTIONS.len()],
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns `true` while the navigation menu is open.
    pub fn is_menu_expanded(&self) -> bool {
        self.menu_open
    }

    pub fn menu_selected(&self) -> usize {
        self.menu_selected
    }

    /// Returns `true` once the section at `index` has scrolled into view.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Records the content height available for the page and reveals what is now in view.
    pub fn set_viewport(&mut self, rows: u16) {
        self.viewport = rows;
        self.scroll = self.scroll.min(self.max_scroll());
        self.reveal_visible();
    }

    /// Opens or closes the navigation menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scrolls so that the section at `index` starts at the top, as far as the page allows.
    pub fn jump_to(&mut self, index: usize) {
        if let Some(&offset) = section_offsets().get(index) {
            self.scroll = offset.min(self.max_scroll());
            self.reveal_visible();
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.menu_open {
            return self.handle_menu_key(key);
        }
        match key.code {
            KeyCode::Char('m') => {
                self.toggle_menu();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-i32::from(self.viewport.max(1))),
            KeyCode::PageDown => self.scroll_by(i32::from(self.viewport.max(1))),
            KeyCode::Home => self.scroll_by(-i32::from(u16::MAX)),
            KeyCode::End => self.scroll_by(i32::from(u16::MAX)),
            KeyCode::Char('c') => Action::Navigate(Screen::Contact),
            KeyCode::Char('s') => Action::Navigate(Screen::ServiceRequest),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_selected = (self.menu_selected + SECTIONS.len() - 1) % SECTIONS.len();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_selected = (self.menu_selected + 1) % SECTIONS.len();
            }
            KeyCode::Enter => {
                self.menu_open = false;
                self.jump_to(self.menu_selected);
            }
            // Any other key acts like a click outside the menu.
            _ => self.menu_open = false,
        }
        Action::None
    }

    fn max_scroll(&self) -> u16 {
        page_height().saturating_sub(self.viewport)
    }

    fn scroll_by(&mut self, delta: i32) -> Action {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(target).unwrap_or(0);
        self.reveal_visible();
        Action::None
    }

    fn reveal_visible(&mut self) {
        let top = self.scroll;
        let bottom = self
            .scroll
            .saturating_add(self.viewport.saturating_sub(REVEAL_MARGIN));
        for (i, (start, section)) in section_offsets().into_iter().zip(SECTIONS).enumerate() {
            if start < bottom && start + section.height() > top {
                self.revealed[i] = true;
            }
        }
    }
}

fn page_lines(state: &HomeState) -> Vec<Line<'static>> {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hidden_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::new();
    for (i, section) in SECTIONS.iter().enumerate() {
        let revealed = state.is_revealed(i);
        let (title, body) = if revealed {
            (title_style, Style::default())
        } else {
            (hidden_style, hidden_style)
        };
        lines.push(Line::from(Span::styled(section.title, title)));
        for text in section.body {
            lines.push(Line::from(Span::styled(format!("  {text}"), body)));
        }
        lines.push(Line::from(""));
    }
    lines
}

/// Renders the home screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_home(state: &HomeState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {BRAND} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let menu_hint = if state.is_menu_expanded() {
        "[m] Menu ▴"
    } else {
        "[m] Menu ▾"
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(menu_hint, Style::default().fg(Color::Yellow)),
        Span::styled(
            "   c: contact  s: service request  F1: help  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, header_area);

    let page = Paragraph::new(page_lines(state)).scroll((state.scroll(), 0));
    frame.render_widget(page, content_area);

    let footer = Paragraph::new(footer_text(chrono::Local::now().year()))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if state.is_menu_expanded() {
        draw_menu(state, frame, content_area);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_menu(state: &HomeState, frame: &mut Frame, content_area: Rect) {
    let width = 20.min(content_area.width);
    let height = (SECTIONS.len() as u16 + 2).min(content_area.height);
    let area = Rect {
        x: content_area.x,
        y: content_area.y,
        width,
        height,
    };

    let items: Vec<ListItem> = SECTIONS.iter().map(|s| ListItem::new(s.title)).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default().with_selected(Some(state.menu_selected()));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn home_with_viewport(rows: u16) -> HomeState {
        let mut state = HomeState::new();
        state.set_viewport(rows);
        state
    }

    mod menu {
        use super::*;

        #[test]
        fn starts_collapsed() {
            assert!(!HomeState::new().is_menu_expanded());
        }

        #[test]
        fn m_toggles_expanded() {
            let mut state = home_with_viewport(10);
            state.handle_key(press(KeyCode::Char('m')));
            assert!(state.is_menu_expanded());
            state.handle_key(press(KeyCode::Char('m')));
            assert!(!state.is_menu_expanded());
        }

        #[test]
        fn esc_closes_without_quitting() {
            let mut state = home_with_viewport(10);
            state.toggle_menu();
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::None);
            assert!(!state.is_menu_expanded());
        }

        #[test]
        fn selection_wraps() {
            let mut state = home_with_viewport(10);
            state.toggle_menu();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.menu_selected(), SECTIONS.len() - 1);
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.menu_selected(), 0);
        }

        #[test]
        fn enter_jumps_and_closes() {
            let mut state = home_with_viewport(5);
            state.toggle_menu();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Enter));
            assert!(!state.is_menu_expanded());
            assert_eq!(state.scroll(), section_offsets()[1]);
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn jump_puts_section_at_top() {
            let mut state = home_with_viewport(5);
            state.jump_to(2);
            assert_eq!(state.scroll(), section_offsets()[2]);
        }

        #[test]
        fn jump_clamps_at_page_end() {
            let mut state = home_with_viewport(20);
            state.jump_to(SECTIONS.len() - 1);
            assert_eq!(state.scroll(), page_height() - 20);
        }

        #[test]
        fn jump_out_of_range_is_noop() {
            let mut state = home_with_viewport(5);
            state.jump_to(99);
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn up_at_top_saturates() {
            let mut state = home_with_viewport(5);
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn end_then_down_stays_at_bottom() {
            let mut state = home_with_viewport(5);
            state.handle_key(press(KeyCode::End));
            let bottom = state.scroll();
            assert_eq!(bottom, page_height() - 5);
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), bottom);
        }

        #[test]
        fn growing_viewport_clamps_scroll() {
            let mut state = home_with_viewport(5);
            state.handle_key(press(KeyCode::End));
            state.set_viewport(page_height());
            assert_eq!(state.scroll(), 0);
        }
    }

    mod reveal {
        use super::*;

        #[test]
        fn nothing_revealed_before_layout() {
            let state = HomeState::new();
            assert!((0..SECTIONS.len()).all(|i| !state.is_revealed(i)));
        }

        #[test]
        fn first_section_revealed_on_layout() {
            let state = home_with_viewport(6);
            assert!(state.is_revealed(0));
            assert!(!state.is_revealed(SECTIONS.len() - 1));
        }

        #[test]
        fn section_in_bottom_margin_stays_hidden() {
            // Section 1 starts at row 4; with 6 rows only rows 0..4 count.
            let state = home_with_viewport(6);
            assert_eq!(section_offsets()[1], 4);
            assert!(!state.is_revealed(1));
        }

        #[test]
        fn reveal_is_one_time() {
            let mut state = home_with_viewport(5);
            state.handle_key(press(KeyCode::End));
            assert!(state.is_revealed(SECTIONS.len() - 1));
            state.handle_key(press(KeyCode::Home));
            assert_eq!(state.scroll(), 0);
            assert!(state.is_revealed(SECTIONS.len() - 1));
        }

        #[test]
        fn jumping_reveals_target() {
            let mut state = home_with_viewport(5);
            state.jump_to(3);
            assert!(state.is_revealed(3));
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn c_opens_contact() {
            let mut state = HomeState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('c'))),
                Action::Navigate(Screen::Contact)
            );
        }

        #[test]
        fn s_opens_service_request() {
            let mut state = HomeState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('s'))),
                Action::Navigate(Screen::ServiceRequest)
            );
        }

        #[test]
        fn q_quits() {
            let mut state = HomeState::new();
            assert_eq!(state.handle_key(press(KeyCode::Char('q'))), Action::Quit);
        }
    }

    #[test]
    fn footer_carries_year() {
        assert_eq!(
            footer_text(2026),
            "© 2026 Brightside Studio. All rights reserved."
        );
    }

    #[test]
    fn content_height_subtracts_chrome() {
        assert_eq!(content_height(24), 20);
        assert_eq!(content_height(2), 0);
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_home(state: &HomeState) -> String {
            let backend = TestBackend::new(80, 20);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_home(state, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_brand_and_first_section() {
            let state = home_with_viewport(16);
            let output = render_home(&state);
            assert!(output.contains("Brightside Studio"));
            assert!(output.contains("Welcome"));
            assert!(output.contains("All rights reserved"));
        }

        #[test]
        fn renders_open_menu() {
            let mut state = home_with_viewport(16);
            state.toggle_menu();
            let output = render_home(&state);
            assert!(output.contains("Menu"));
            assert!(output.contains("Process"));
        }
    }
}
