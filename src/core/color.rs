use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    #[must_use]
    const fn from_packed(rgb: u32) -> Self {
        Self::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parses `#rrggbb` or `#rgb`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "color `{input}` must be #rgb or #rrggbb"
                )));
            }
        };
        let packed = u32::from_str_radix(&expanded, 16).map_err(|_| {
            ChartError::InvalidData(format!("color `{input}` contains non-hex digits"))
        })?;
        Ok(Self::from_packed(packed))
    }

    /// Formats as `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    /// Channel-wise interpolation at `t` in 0..=1.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        let mix = |from: f64, to: f64| from + (to - from) * t;
        Self::rgba(
            mix(self.red, target.red),
            mix(self.green, target.green),
            mix(self.blue, target.blue),
            mix(self.alpha, target.alpha),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

const CATEGORY20: [u32; 20] = [
    0x1f77b4, 0xaec7e8, 0xff7f0e, 0xffbb78, 0x2ca02c, 0x98df8a, 0xd62728, 0xff9896, 0x9467bd,
    0xc5b0d5, 0x8c564b, 0xc49c94, 0xe377c2, 0xf7b6d2, 0x7f7f7f, 0xc7c7c7, 0xbcbd22, 0xdbdb8d,
    0x17becf, 0x9edae5,
];

/// Maps a bar's position in the dataset to its fill color.
#[derive(Clone)]
pub enum ColorScale {
    /// Cycles through the palette by index.
    Palette(Arc<[Color]>),
    Custom(Arc<dyn Fn(usize) -> Color + Send + Sync>),
}

impl ColorScale {
    /// The twenty-color categorical palette.
    #[must_use]
    pub fn category20() -> Self {
        Self::Palette(CATEGORY20.iter().map(|rgb| Color::from_packed(*rgb)).collect())
    }

    /// Palette scale; an empty palette falls back to `category20`.
    #[must_use]
    pub fn palette(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            return Self::category20();
        }
        Self::Palette(colors.into())
    }

    #[must_use]
    pub fn custom(map: impl Fn(usize) -> Color + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(map))
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        match self {
            Self::Palette(colors) => match colors.len() {
                0 => Color::BLACK,
                len => colors[index % len],
            },
            Self::Custom(map) => map(index),
        }
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::category20()
    }
}

impl fmt::Debug for ColorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(colors) => f.debug_tuple("Palette").field(&colors.len()).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, ColorScale};

    #[test]
    fn category20_cycles_by_index() {
        let scale = ColorScale::category20();
        assert_eq!(scale.color(0).to_hex(), "#1f77b4");
        assert_eq!(scale.color(20), scale.color(0));
        assert_eq!(scale.color(19).to_hex(), "#9edae5");
    }

    #[test]
    fn hex_parsing_accepts_short_and_long_forms() {
        assert_eq!(Color::from_hex("#fff").expect("short"), Color::WHITE);
        assert_eq!(
            Color::from_hex("ff7f0e").expect("long").to_hex(),
            "#ff7f0e"
        );
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }
}
