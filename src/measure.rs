use crate::style::{FontSpec, TextStyle};
use crate::units::Pt;
use crate::whitespace::whitespace_weight;

/// The font collaborators the line breaker relies on.
///
/// Implementations must be deterministic: the same text in the same font
/// always measures the same. Widths must never be negative, and removing
/// characters from the end of a string must never make it wider; overflow
/// truncation shrinks runs one character at a time and relies on that.
pub trait TextMeasurer {
    /// Rendered width of `text` set in `font`
    fn measure(&self, text: &str, font: &FontSpec) -> Pt;

    /// Resolve a token's style overrides against the base font.
    ///
    /// Default merges the overrides with [FontSpec::restyle].
    fn resolve_font(&self, base: &FontSpec, style: &TextStyle) -> FontSpec {
        base.restyle(style)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font: &FontSpec) -> Pt {
        (**self).measure(text, font)
    }

    fn resolve_font(&self, base: &FontSpec, style: &TextStyle) -> FontSpec {
        (**self).resolve_font(base, style)
    }
}

/// Measures text without any font file: whitespace uses the typographic
/// weights from [crate::whitespace], every other character a fixed advance.
/// Good enough for previews and for tests where exact glyph metrics don't
/// matter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeuristicMeasurer {
    /// Advance of a non-whitespace character, in ems
    pub advance: f32,
    /// Extra advance added to each non-whitespace character of bold text, in ems
    pub bold_extra: f32,
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        HeuristicMeasurer {
            advance: 0.6,
            bold_extra: 0.05,
        }
    }
}

impl HeuristicMeasurer {
    /// A monospaced measurer where every glyph, whitespace included, is
    /// `advance` ems wide
    pub fn monospace(advance: f32) -> MonospaceMeasurer {
        MonospaceMeasurer { advance }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Pt {
        let glyph = if font.bold {
            self.advance + self.bold_extra
        } else {
            self.advance
        };
        let ems: f32 = text
            .chars()
            .map(|ch| whitespace_weight(ch).unwrap_or(glyph))
            .sum();
        font.size * ems
    }
}

/// Every character is the same width. Handy for reasoning about layouts in
/// whole character cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance: f32,
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Pt {
        font.size * (self.advance * text.chars().count() as f32)
    }
}
