use std::time::Duration;

/// Fixed hero words, typed out one after another.
pub const HERO_WORDS: [&str; 7] = [
    "BRING CHANGE",
    "TAKE CHANCES",
    "CHOOSE DELIGHT",
    "CREATE VALUE",
    "THINK FREE",
    "PILOT IDEAS",
    "SPARK ACTION",
];

pub const MENU_ITEMS: [&str; 7] = [
    "SERVICES",
    "DONE IN A WEEK",
    "INDUSTRIES",
    "WORKS",
    "INSIGHTS",
    "CULTURE",
    "CONTACT",
];

pub const MOON_FRAMES: [&str; 8] = ["🌑 ", "🌒 ", "🌓 ", "🌔 ", "🌕 ", "🌖 ", "🌗 ", "🌘 "];

pub const CURSOR_GLYPH: &str = "▋";
pub const BLINK_TARGET: u32 = 3;
pub const TICK_DELAY: Duration = Duration::from_millis(150);
pub const MOON_TICK_DELAY: Duration = Duration::from_millis(200);

/// Everything the banner program is built from. There are no config files;
/// this is assembled in code at startup.
#[derive(Debug, Clone)]
pub struct HeroConfig {
    pub title: String,
    pub words: Vec<String>,
    pub menu_items: Vec<String>,
    pub cursor: String,
    pub blink_target: u32,
    pub tick_delay: Duration,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "CODEWAVE".to_string(),
            words: HERO_WORDS.iter().map(|w| w.to_string()).collect(),
            menu_items: MENU_ITEMS.iter().map(|m| m.to_string()).collect(),
            cursor: CURSOR_GLYPH.to_string(),
            blink_target: BLINK_TARGET,
            tick_delay: TICK_DELAY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoonConfig {
    pub frames: Vec<String>,
    pub tick_delay: Duration,
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            frames: MOON_FRAMES.iter().map(|f| f.to_string()).collect(),
            tick_delay: MOON_TICK_DELAY,
        }
    }
}
