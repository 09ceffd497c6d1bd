//! Colour theme shared by every chart and the HTML page.

use plotters::style::RGBColor;

/// Fixed dashboard palette.
///
/// Built once by the caller and passed to each rendering call; nothing reads
/// colours from global state.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Lines, axes and the cold end of the heatmap scale.
    pub primary: RGBColor,
    pub background: RGBColor,
    /// Card fill; also the neutral midpoint of the heatmap scale.
    pub card: RGBColor,
    pub text: RGBColor,
    /// Highlights and the warm end of the heatmap scale.
    pub accent: RGBColor,
    /// Donut slice colours, used in order.
    pub palette: [RGBColor; 5],
}

impl Default for Theme {
    fn default() -> Self {
        let primary = RGBColor(0x00, 0xd4, 0xff);
        let accent = RGBColor(0xff, 0x6b, 0x9d);
        Theme {
            primary,
            background: RGBColor(0x0a, 0x0e, 0x27),
            card: RGBColor(0x1a, 0x1f, 0x3a),
            text: RGBColor(0xff, 0xff, 0xff),
            accent,
            palette: [
                primary,
                accent,
                RGBColor(0x00, 0xff, 0x88),
                RGBColor(0xff, 0x95, 0x00),
                RGBColor(0xa7, 0x8b, 0xfa),
            ],
        }
    }
}

impl Theme {
    /// Colour for a correlation coefficient on a scale running
    /// primary (-1) -> card (0) -> accent (+1).
    pub fn diverging(&self, value: f64) -> RGBColor {
        let value = value.clamp(-1.0, 1.0);
        if value < 0.0 {
            lerp(self.primary, self.card, value + 1.0)
        } else {
            lerp(self.card, self.accent, value)
        }
    }
}

/// CSS hex notation, e.g. `#00d4ff`.
pub fn hex(color: RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

fn lerp(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let channel = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}
