//! ANSI foreground colors used for the demo lines.

use rand::Rng;

/// Terminates a colored span.
pub const RESET: &str = "\x1b[0m";

/// Bright foreground colors a line may be printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Blue,
    Yellow,
    Red,
}

impl Color {
    /// Every selectable color, in palette order.
    pub const ALL: [Color; 4] = [Color::Green, Color::Blue, Color::Yellow, Color::Red];

    /// Escape sequence that switches the terminal to this color.
    pub fn escape(self) -> &'static str {
        match self {
            Color::Green => "\x1b[92m",
            Color::Blue => "\x1b[94m",
            Color::Yellow => "\x1b[93m",
            Color::Red => "\x1b[91m",
        }
    }

    /// Pick one color uniformly at random. Never returns the reset sequence.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Color {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}
