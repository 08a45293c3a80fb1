use color_eyre::Result;
use ratatui::DefaultTerminal;

/// Puts the terminal into raw mode and the alternate screen.
///
/// `ratatui::try_init` enables raw mode first, so a failure while entering
/// the alternate screen would leave the shell in raw mode; restore on error.
pub fn init() -> Result<DefaultTerminal> {
    restore_on_err(ratatui::try_init(), ratatui::restore).map_err(Into::into)
}

/// Runs `restore` when `result` is an error, then hands `result` back.
pub fn restore_on_err<T, E>(result: std::result::Result<T, E>, restore: impl FnOnce()) -> std::result::Result<T, E> {
    if result.is_err() {
        restore();
    }
    result
}
