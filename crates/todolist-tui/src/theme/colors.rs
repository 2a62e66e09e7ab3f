use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(168, 85, 247);
pub const ACCENT_SOFT: Color = Color::Rgb(216, 180, 254);
pub const ERROR_COLOR: Color = Color::Rgb(239, 68, 68);

pub const LIGHT_BG: Color = Color::Rgb(255, 255, 255);
pub const LIGHT_TEXT: Color = Color::Rgb(0, 0, 0);
pub const LIGHT_MUTED: Color = Color::Rgb(107, 114, 128);
pub const LIGHT_DONE: Color = Color::Rgb(156, 163, 175);
pub const LIGHT_SELECTED_BG: Color = Color::Rgb(243, 232, 255);
pub const LIGHT_POPUP_BG: Color = Color::Rgb(247, 247, 247);

pub const DARK_BG: Color = Color::Rgb(17, 24, 39);
pub const DARK_TEXT: Color = Color::Rgb(255, 255, 255);
pub const DARK_MUTED: Color = Color::Rgb(156, 163, 175);
pub const DARK_DONE: Color = Color::Rgb(107, 114, 128);
pub const DARK_SELECTED_BG: Color = Color::Rgb(55, 65, 81);
pub const DARK_POPUP_BG: Color = Color::Rgb(31, 41, 55);
