use colored::Color;

pub const OPEN: Color = Color::Cyan;
pub const CLOSED: Color = Color::Red;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const ACCENT: Color = Color::BrightGreen;
pub const TEXT_DEFAULT: Color = Color::White;
