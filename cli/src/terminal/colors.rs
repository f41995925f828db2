use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const NETWORK_ADDR: Color = Color::BrightBlue;
pub const NETWORK_PREFIX: Color = Color::Blue;
pub const MISSING: Color = Color::Yellow;
