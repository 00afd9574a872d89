//! Form widget: renders fields with their validation indicators.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, Indicator};

/// Rows taken by one field: top border, value, bottom border.
const ROW_HEIGHT: u16 = 3;

/// Border colour for a field.
///
/// The validation indicator wins over focus so a green or red field keeps
/// its colour while focused.
pub fn border_color(field: &Field, focused: bool) -> Color {
    match field.indicator {
        Indicator::Invalid => Color::Red,
        Indicator::Valid => Color::Green,
        Indicator::Neutral if focused => Color::Yellow,
        Indicator::Neutral => Color::DarkGray,
    }
}

/// Indices of the visible fields that fit in `rows` field slots, scrolled to keep `focus` on screen.
pub fn visible_window(fields: &[Field], focus: usize, rows: usize) -> Vec<usize> {
    let visible: Vec<usize> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.visible)
        .map(|(i, _)| i)
        .collect();
    if rows == 0 {
        return Vec::new();
    }
    let position = visible.iter().position(|&i| i == focus).unwrap_or(0);
    let start = (position + 1).saturating_sub(rows);
    visible.into_iter().skip(start).take(rows).collect()
}

/// Renders the visible fields of a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(fields: &[Field], focus: usize, frame: &mut Frame, area: Rect) {
    let rows = usize::from(area.height / ROW_HEIGHT);
    let window = visible_window(fields, focus, rows);
    let constraints: Vec<Constraint> = window
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();
    let areas = Layout::vertical(constraints).split(area);

    for (slot, &index) in window.iter().enumerate() {
        let field = &fields[index];
        let is_focused = index == focus;

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };
        let title_style = if is_focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let block = Block::default()
            .title(Span::styled(label, title_style))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(field, is_focused)));

        let mut spans = vec![Span::raw(field.display_value())];
        if is_focused && !field.is_select() {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, areas[slot]);

        // Error message overlaps the bottom border of the field.
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: areas[slot].x + 2,
                y: areas[slot].y + ROW_HEIGHT.saturating_sub(1),
                width: areas[slot].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
