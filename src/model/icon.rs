//! Icon catalog identifiers.

use strum::{Display, EnumIter};

/// An icon from the application's icon catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Icon {
    Home,
    SquarePlus,
    Book,
    Bullseye,
    Tags,
    LineChart,
    Sun,
    Cog,
    Bars,
    ChevronDown,
    Trash,
    Moon,
    EyeSlash,
}

impl Icon {
    /// Single-width glyph used to draw the icon in a terminal.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::SquarePlus => "⊞",
            Icon::Book => "☰",
            Icon::Bullseye => "◎",
            Icon::Tags => "#",
            Icon::LineChart => "↗",
            Icon::Sun => "☼",
            Icon::Cog => "⚙",
            Icon::Bars => "≡",
            Icon::ChevronDown => "▾",
            Icon::Trash => "✗",
            Icon::Moon => "☾",
            Icon::EyeSlash => "ø",
        }
    }
}
