//! Sequential and diverging colour scales.

use ratatui::style::Color;

type Rgb = (u8, u8, u8);

/// Sequential light-to-dark palettes used to shade numeric table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Blues,
    Purples,
    Greens,
    Oranges,
}

impl Palette {
    fn endpoints(self) -> (Rgb, Rgb) {
        match self {
            Self::Blues => ((247, 251, 255), (8, 48, 107)),
            Self::Purples => ((252, 251, 253), (63, 0, 125)),
            Self::Greens => ((247, 252, 245), (0, 68, 27)),
            Self::Oranges => ((255, 245, 235), (127, 39, 4)),
        }
    }

    /// Colour at position `t` in `[0, 1]` (clamped).
    #[must_use]
    pub fn color(self, t: f64) -> Color {
        let (light, dark) = self.endpoints();
        lerp(light, dark, t)
    }

    /// Colour for `value` scaled min-max into `[lo, hi]`.
    #[must_use]
    pub fn scaled(self, value: f64, (lo, hi): (f64, f64)) -> Color {
        let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.0 };
        self.color(t)
    }
}

/// Diverging blue-white-red scale over `[-1, 1]`.
#[must_use]
pub fn coolwarm(value: f64) -> Color {
    const COOL: Rgb = (59, 76, 192);
    const MID: Rgb = (221, 221, 221);
    const WARM: Rgb = (180, 4, 38);
    let value = value.clamp(-1.0, 1.0);
    if value < 0.0 {
        lerp(MID, COOL, -value)
    } else {
        lerp(MID, WARM, value)
    }
}

/// Black or white, whichever reads better on `background`.
#[must_use]
pub fn contrast_text(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
            if luma > 140.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => Color::Reset,
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(from: Rgb, to: Rgb, t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    Color::Rgb(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}
