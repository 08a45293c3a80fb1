use ratatui::{
    layout::Rect,
    symbols::border,
    widgets::{Block, Borders, Padding},
};

/// Title block: one column of padding inside an invisible border.
pub fn title_block() -> Block<'static> {
    Block::new().padding(Padding::new(2, 2, 1, 1))
}

/// Footer block: rounded border whose left edge joins the line with `┤`.
pub fn info_block() -> Block<'static> {
    Block::new()
        .borders(Borders::ALL)
        .border_set(border::Set {
            vertical_left: "┤",
            ..border::ROUNDED
        })
        .padding(Padding::horizontal(1))
}

/// Rows `block` takes up around `content_rows` rows of content.
pub fn block_height(block: &Block, content_rows: u16) -> u16 {
    let probe = Rect::new(0, 0, 100, 100);
    let inner = block.inner(probe);
    probe.height - inner.height + content_rows
}

/// Columns `block` takes up around `content_cols` columns of content.
pub fn block_width(block: &Block, content_cols: u16) -> u16 {
    let probe = Rect::new(0, 0, 100, 100);
    let inner = block.inner(probe);
    probe.width - inner.width + content_cols
}

/// Width of `text` on screen, counting wide glyphs as two columns.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(ratatui::text::Line::raw(text).width()).unwrap_or(u16::MAX)
}
