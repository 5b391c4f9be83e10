//! Point colors
//!
//! Colors are RGB with components in [0, 1]. They parse from `#RRGGBB`
//! hex or from three comma-separated components (`0.9,0.9,0.1`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB color (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Bright yellow, the default paint for normalized clouds
pub const DEFAULT_POINT_COLOR: Color = Color {
    r: 0.9,
    g: 0.9,
    b: 0.1,
};

impl Color {
    /// Create a color, clamping components into [0, 1]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from hex string (e.g., "#FF5733" or "FF5733")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::from_rgb8([r, g, b]))
    }

    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Quantize to 8-bit channels
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl Default for Color {
    fn default() -> Self {
        DEFAULT_POINT_COLOR
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(color) = Color::from_hex(s) {
            return Ok(color);
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() == 3 {
            let parsed: Result<Vec<f64>, _> = parts.iter().map(|p| p.parse::<f64>()).collect();
            if let Ok(c) = parsed {
                if c.iter().all(|v| (0.0..=1.0).contains(v)) {
                    return Ok(Color::rgb(c[0], c[1], c[2]));
                }
            }
        }

        Err(format!(
            "invalid color '{}': expected #RRGGBB or r,g,b in [0, 1]",
            s
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let color = Color::from_hex("#E6E61A").unwrap();
        assert_eq!(color.to_hex(), "#E6E61A");
        assert_eq!(Color::from_hex("ff0000").unwrap(), Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
        assert!(Color::from_hex("#ÿÿÿ").is_none());
    }

    #[test]
    fn test_default_is_yellow() {
        assert_eq!(Color::default().to_rgb8(), [230, 230, 26]);
    }

    #[test]
    fn test_parse_components() {
        let color: Color = "0.9, 0.9, 0.1".parse().unwrap();
        assert_eq!(color, DEFAULT_POINT_COLOR);
        assert!("1.5,0,0".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
    }

    #[test]
    fn test_rgb_clamps() {
        let color = Color::rgb(-1.0, 2.0, 0.5);
        assert_eq!(color, Color { r: 0.0, g: 1.0, b: 0.5 });
    }
}
