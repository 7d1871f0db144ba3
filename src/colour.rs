use crate::BreakError;
use std::fmt;
use std::str::FromStr;

/// An sRGB fill colour for a run of text. Channels range from 0 to 255 and
/// print as CSS hex so they can be dropped straight into an SVG `fill`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Create a colour from channels in the range 0.0 to 1.0
    pub fn from_unit(r: f32, g: f32, b: f32) -> Colour {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Colour {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = BreakError;

    /// Parse `#rgb` or `#rrggbb` hex notation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || BreakError::UnknownColour(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(unknown)?;
        if !hex.is_ascii() {
            return Err(unknown());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| unknown());
        match hex.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| channel(&hex[i..=i]).map(|c| c * 17);
                Ok(Colour::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Colour::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(unknown()),
        }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new(r, g, b)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new(0, 0, 0);
    pub const WHITE: Colour = Colour::new(255, 255, 255);
    pub const RED: Colour = Colour::new(255, 0, 0);
    pub const GREEN: Colour = Colour::new(0, 255, 0);
    pub const BLUE: Colour = Colour::new(0, 0, 255);
}
