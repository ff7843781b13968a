//! Key entry popup

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use super::key_field::KeyField;
use super::layout::{centered_rect_fixed, create_popup_block};
use crate::view::KeyView;

const MIN_DIALOG_WIDTH: u16 = 30;

pub struct KeyDialog<'a> {
    title: &'a str,
    prompt: &'a str,
    view: &'a KeyView,
    error: Option<&'a str>,
}

impl<'a> KeyDialog<'a> {
    pub fn new(title: &'a str, prompt: &'a str, view: &'a KeyView) -> Self {
        Self { title, prompt, view, error: None }
    }

    pub fn error(mut self, err: &'a str) -> Self {
        self.error = Some(err);
        self
    }
}

impl Widget for KeyDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (field_width, field_height) = KeyField::required_size(self.view.config());
        let width = field_width.saturating_add(4).max(MIN_DIALOG_WIDTH);
        let height = field_height.saturating_add(6);
        let popup_area = centered_rect_fixed(width, height, area);
        Clear.render(popup_area, buf);

        let block = create_popup_block(self.title, Color::Magenta);
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);
        if inner.is_empty() {
            return;
        }

        let width = usize::from(inner.width);
        buf.set_stringn(inner.x, inner.y, self.prompt, width, Style::default().fg(Color::White));

        let field_x = inner.x + inner.width.saturating_sub(field_width) / 2;
        let field_y = inner.y.saturating_add(2);
        let field_area = Rect::new(field_x, field_y, field_width.min(inner.width), field_height)
            .intersection(inner);
        KeyField::new(self.view).error_color(Color::Red).render(field_area, buf);

        let footer_y = field_y.saturating_add(field_height).saturating_add(1);
        if footer_y >= inner.bottom() {
            return;
        }
        if let Some(err) = self.error.filter(|_| self.view.has_error()) {
            buf.set_stringn(inner.x, footer_y, err, width, Style::default().fg(Color::Red));
        } else {
            render_key_hint(buf, inner.x, footer_y, inner.width);
        }
    }
}

fn render_key_hint(buf: &mut Buffer, x: u16, y: u16, width: u16) {
    let hint = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" Done  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" Cancel"),
    ]);
    buf.set_line(x, y, &hint, width);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_prompt_and_hint() {
        let view = KeyView::new(4).unwrap();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        KeyDialog::new("PIN", "Enter your PIN", &view).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Enter your PIN"));
        assert!(text.contains("[Enter] Done"));
        assert!(text.contains("───"));
    }

    #[test]
    fn test_short_terminal_drops_rows() {
        let view = KeyView::new(4).unwrap();
        for height in 0..8 {
            let area = Rect::new(0, 0, 60, height);
            let mut buf = Buffer::empty(area);
            KeyDialog::new("PIN", "Enter your PIN", &view).render(area, &mut buf);
            assert!(!screen_text(&buf).contains("[Enter]"), "height {}", height);
        }

        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        KeyDialog::new("PIN", "Enter your PIN", &view).render(area, &mut buf);
        assert!(screen_text(&buf).contains("Enter your PIN"));
    }

    #[test]
    fn test_narrow_terminal_clips_prompt() {
        let view = KeyView::new(4).unwrap();
        let area = Rect::new(0, 0, 8, 10);
        let mut buf = Buffer::empty(area);
        KeyDialog::new("PIN", "Enter your PIN", &view).render(area, &mut buf);
        assert!(!screen_text(&buf).contains("Enter your PIN"));
    }

    #[test]
    fn test_long_view_does_not_overflow() {
        let view = KeyView::new(20_000).unwrap();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        KeyDialog::new("PIN", "Enter your PIN", &view).render(area, &mut buf);
        assert!(screen_text(&buf).contains("Enter your PIN"));
    }

    #[test]
    fn test_error_shown_only_with_error_status() {
        let view = KeyView::new(4).unwrap();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        KeyDialog::new("PIN", "Enter your PIN", &view)
            .error("PIN cannot start with 0")
            .render(area, &mut buf);

        assert!(!screen_text(&buf).contains("cannot start"));
    }
}
