//! Key field widget
//!
//! Draws a key view as a row of slots. Filled slots show the character or
//! its placeholder glyph; empty slots show an underline.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::view::{Cell, KeyView, KeyViewConfig};

const UNDERLINE: &str = "─";

pub struct KeyField<'a> {
    view: &'a KeyView,
    error_color: Option<Color>,
}

impl<'a> KeyField<'a> {
    pub fn new(view: &'a KeyView) -> Self {
        Self { view, error_color: None }
    }

    /// Colour used for every slot while the view reports an error.
    pub fn error_color(mut self, color: Color) -> Self {
        self.error_color = Some(color);
        self
    }

    /// Columns and rows needed to draw `config` without clipping.
    pub fn required_size(config: &KeyViewConfig) -> (u16, u16) {
        let slots = u16::try_from(config.max_length).unwrap_or(u16::MAX);
        let width = slots
            .saturating_mul(config.cell_width)
            .saturating_add(slots.saturating_sub(1).saturating_mul(config.spacing));
        let height = config.underline_padding.saturating_add(2);
        (width, height)
    }

    fn colors(&self) -> (Color, Color) {
        let config = self.view.config();
        match self.error_color {
            Some(color) if self.view.has_error() => (color, color),
            _ => (config.text_color, config.underline_color),
        }
    }
}

impl Widget for KeyField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let config = self.view.config();
        let (text_color, underline_color) = self.colors();
        let text_style = Style::default().fg(text_color).add_modifier(Modifier::BOLD);
        let underline_style = Style::default().fg(underline_color);
        let underline_y = area.y.saturating_add(1).saturating_add(config.underline_padding);
        let step = usize::from(config.cell_width) + usize::from(config.spacing);

        for (i, cell) in self.view.cells().into_iter().enumerate() {
            let offset = i.saturating_mul(step);
            let Ok(x) = u16::try_from(usize::from(area.x).saturating_add(offset)) else { break };
            if usize::from(x) + usize::from(config.cell_width) > usize::from(area.right()) {
                break;
            }
            match cell {
                Cell::Filled(c) | Cell::Hidden(c) => {
                    render_slot_char(buf, x, area.y, config.cell_width, c, text_style);
                }
                Cell::Empty if underline_y < area.bottom() => {
                    render_underline(buf, x, underline_y, config.cell_width, underline_style);
                }
                Cell::Empty => {}
            }
        }
    }
}

fn render_slot_char(buf: &mut Buffer, x: u16, y: u16, width: u16, c: char, style: Style) {
    let cx = x.saturating_add(width.saturating_sub(1) / 2);
    if let Some(cell) = buf.cell_mut((cx, y)) {
        cell.set_char(c).set_style(style);
    }
}

fn render_underline(buf: &mut Buffer, x: u16, y: u16, width: u16, style: Style) {
    for px in x..x.saturating_add(width) {
        if let Some(cell) = buf.cell_mut((px, y)) {
            cell.set_symbol(UNDERLINE).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hide::HideStrategy;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(view: &KeyView) -> Buffer {
        let (w, h) = KeyField::required_size(view.config());
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        KeyField::new(view).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_required_size() {
        let config = KeyViewConfig::default()
            .with_max_length(4)
            .with_cell_width(3)
            .with_spacing(1)
            .with_underline_padding(1);
        assert_eq!(KeyField::required_size(&config), (15, 3));
    }

    #[test]
    fn test_empty_view_draws_underlines() {
        let view = KeyView::new(2).unwrap();
        let buf = render(&view);
        assert_eq!(row(&buf, 0), "       ");
        assert_eq!(row(&buf, 1), "─── ───");
    }

    #[test]
    fn test_filled_slots_are_centered() {
        let config = KeyViewConfig::default()
            .with_max_length(3)
            .with_hide_strategy(HideStrategy::HideAllButLast);
        let mut view = KeyView::from_config(config).unwrap();
        view.set_text("12");

        let buf = render(&view);
        assert_eq!(row(&buf, 0), " •   2     ");
        assert_eq!(row(&buf, 1), "        ───");
    }

    #[test]
    fn test_error_color() {
        struct AlwaysBad;
        impl crate::view::ErrorListener for AlwaysBad {
            fn has_error(&self, _: &str) -> bool {
                true
            }
            fn on_error_status_changed(&mut self, _: bool, _: &str) {}
        }

        let mut view = KeyView::new(2).unwrap();
        view.set_error_listener(AlwaysBad);
        view.handle_char('1');

        let area = Rect::new(0, 0, 7, 2);
        let mut buf = Buffer::empty(area);
        KeyField::new(&view).error_color(Color::Red).render(area, &mut buf);
        assert_eq!(buf[(1, 0)].fg, Color::Red);
        assert_eq!(buf[(4, 1)].fg, Color::Red);
    }

    #[test]
    fn test_required_size_saturates_for_long_views() {
        let view = KeyView::new(20_000).unwrap();
        assert_eq!(KeyField::required_size(view.config()), (u16::MAX, 2));

        let view = KeyView::new(65_536).unwrap();
        assert_eq!(KeyField::required_size(view.config()).0, u16::MAX);

        let config = KeyViewConfig::default().with_underline_padding(u16::MAX);
        assert_eq!(KeyField::required_size(&config).1, u16::MAX);
    }

    #[test]
    fn test_long_view_renders_visible_slots_only() {
        let mut view = KeyView::new(70_000).unwrap();
        view.set_text("42");
        let area = Rect::new(0, 0, 11, 2);
        let mut buf = Buffer::empty(area);
        KeyField::new(&view).render(area, &mut buf);
        assert_eq!(row(&buf, 0), " 4   2     ");
        assert_eq!(row(&buf, 1), "        ───");
    }

    #[test]
    fn test_one_row_area_skips_underlines() {
        let view = KeyView::new(2).unwrap();
        let area = Rect::new(0, 0, 7, 1);
        let mut buf = Buffer::empty(area);
        KeyField::new(&view).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "       ");
    }

    #[test]
    fn test_narrow_area_clips_slots() {
        let view = KeyView::new(4).unwrap();
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        KeyField::new(&view).render(area, &mut buf);
        assert_eq!(row(&buf, 1), "───  ");
    }
}
