pub mod layout;
pub mod style;
pub mod widgets;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Paragraph, Widget},
};

use crate::app::Model;
use layout::{block_height, block_width, info_block, text_width, title_block};
use style::footer_style;
use widgets::{
    hero::widget::hero_line,
    menu::widget::MenuWidget,
    viewport::ViewportWidget,
};

/// Shown until the first terminal size arrives.
pub const PLACEHOLDER: &str = "\n  Initializing...";

impl Widget for &Model {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.ready {
            Paragraph::new(PLACEHOLDER).render(area, buf);
            return;
        }

        let [header, main, footer] = Layout::vertical([
            Constraint::Length(block_height(&title_block(), 1)),
            Constraint::Min(0),
            Constraint::Length(block_height(&info_block(), 1)),
        ])
        .areas(area);

        render_header(self, header, buf);
        ViewportWidget::new(&self.viewport, hero_line(&self.hero)).render(main, buf);
        render_footer(self, footer, buf);
    }
}

fn render_header(model: &Model, area: Rect, buf: &mut Buffer) {
    let title = title_block();
    let title_width = block_width(&title, text_width(&model.title));
    let menu = MenuWidget::new(&model.menu);
    let menu_width = menu.width();

    let [title_area, _, menu_area] = Layout::horizontal([
        Constraint::Length(title_width),
        Constraint::Fill(1),
        Constraint::Length(menu_width),
    ])
    .areas(area);

    Paragraph::new(model.title.as_str())
        .block(title)
        .render(title_area, buf);
    menu.render(menu_area, buf);
}

fn render_footer(model: &Model, area: Rect, buf: &mut Buffer) {
    let info = info_block();
    let width = block_width(&info, text_width(&model.debug)).min(area.width);
    let [info_area, _] =
        Layout::horizontal([Constraint::Length(width), Constraint::Fill(1)]).areas(area);

    Paragraph::new(model.debug.as_str())
        .style(footer_style())
        .block(info)
        .render(info_area, buf);
}

/// Renders `model` into a `width` x `height` frame and returns its rows as text.
pub fn compose(model: &Model, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    model.render(area, &mut buf);
    buffer_rows(&buf)
}

/// Text of every row in `buf`, skipping the cells hidden behind wide glyphs.
pub fn buffer_rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut row = String::new();
            let mut x = area.left();
            while x < area.right() {
                let symbol = buf[(x, y)].symbol();
                row.push_str(symbol);
                x += text_width(symbol).max(1);
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::update;
    use crate::config::HeroConfig;
    use crate::event::Event;
    use ratatui::crossterm::event::Event as CrosstermEvent;

    fn ready_model(width: u16, height: u16) -> Model {
        let (model, _) = Model::init(&HeroConfig::default()).unwrap();
        update(model, Event::Crossterm(CrosstermEvent::Resize(width, height))).0
    }

    #[test]
    fn test_placeholder_before_first_resize() {
        let (model, _) = Model::init(&HeroConfig::default()).unwrap();
        let rows = compose(&model, 30, 3);
        assert_eq!(rows[0].trim(), "");
        assert_eq!(rows[1].trim_end(), "  Initializing...");
    }

    #[test]
    fn test_header_shows_title_and_menu() {
        let rows = compose(&ready_model(120, 20), 120, 20);
        assert!(rows[1].contains("CODEWAVE"));
        assert!(rows[1].contains("SERVICES  DONE IN A WEEK  INDUSTRIES"));
        assert!(rows[1].trim_end().ends_with("CONTACT"));
    }

    #[test]
    fn test_hero_is_vertically_centred() {
        let mut model = ready_model(80, 20);
        for _ in 0..5 {
            model = update(model, Event::Tick).0;
        }
        let rows = compose(&model, 80, 20);

        // 3 header rows, 14 viewport rows, 3 footer rows; the hero sits on
        // viewport row (14 - 1) / 2.
        let hero_rows: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.contains("BRING▋"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hero_rows, vec![3 + 6]);
    }

    #[test]
    fn test_hero_is_horizontally_centred() {
        let mut model = ready_model(81, 20);
        for _ in 0..12 {
            model = update(model, Event::Tick).0;
        }
        let rows = compose(&model, 81, 20);
        let row = rows.iter().find(|r| r.contains("BRING CHANGE")).unwrap();
        let left = row.find("BRING").unwrap();
        let right = 81 - left - "BRING CHANGE▋".chars().count();
        assert!(left.abs_diff(right) <= 2, "left {} right {}", left, right);
    }

    #[test]
    fn test_footer_shows_diagnostics() {
        let model = update(ready_model(80, 20), Event::Tick).0;
        let rows = compose(&model, 80, 20);
        assert!(rows[18].contains("word 1/7 · typing · SERVICES"));
        assert!(rows[18].starts_with('┤'));
    }

    #[test]
    fn test_compose_is_pure() {
        let model = ready_model(60, 12);
        let snapshot = model.clone();
        assert_eq!(compose(&model, 60, 12), compose(&model, 60, 12));
        assert_eq!(model, snapshot);
    }
}
