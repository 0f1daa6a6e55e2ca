use authdemo::{FieldError, Theme};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Height of one input: bordered box plus an error line.
pub const INPUT_HEIGHT: u16 = 4;

const MASK: char = '•';

/// Accent color for titles and the focused input.
pub fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Default => Color::Magenta,
        Theme::HighContrast => Color::Yellow,
    }
}

/// Creates a block with conditional focus styling (accent border when focused)
pub fn focused_block(title: &str, is_focused: bool, accent: Color) -> Block<'_> {
    let block = Block::bordered().title(title);
    if is_focused {
        block.border_style(Style::new().fg(accent))
    } else {
        block
    }
}

/// Centers a `width` x `height` box inside `area`, shrinking to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Replaces every character with a bullet.
pub fn mask(value: &str) -> String {
    value.chars().map(|_| MASK).collect()
}

/// Renders a labelled input with its error (if any) on the line below.
///
/// `area` should be `INPUT_HEIGHT` rows tall.
#[allow(clippy::too_many_arguments)]
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    secret: bool,
    is_focused: bool,
    error: Option<FieldError>,
    accent: Color,
) {
    let [input_area, error_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let shown = if secret { mask(value) } else { value.to_string() };
    let cursor = if is_focused { "▏" } else { "" };
    let mut block = focused_block(label, is_focused, accent);
    if error.is_some() {
        block = block.border_style(Style::new().red());
    }
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(shown), Span::raw(cursor)])).block(block),
        input_area,
    );

    if let Some(err) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(err.to_string(), Style::new().red())),
            error_area,
        );
    }
}

/// A one-line pseudo button, highlighted in the accent color.
pub fn render_button(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    frame.render_widget(
        Paragraph::new(Line::from(format!("[ {} ]", text)).centered())
            .style(Style::new().bold().fg(Color::White).bg(color)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_counts_characters() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("abc"), "•••");
        assert_eq!(mask("é1"), "••");
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(60, 20, area);
        assert_eq!(r, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_rect_shrinks() {
        let area = Rect::new(0, 0, 30, 10);
        let r = centered_rect(60, 20, area);
        assert_eq!(r.width, 30);
        assert_eq!(r.height, 10);
    }
}
