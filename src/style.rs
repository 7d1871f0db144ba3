use crate::colour::{colours, Colour};
use crate::units::Pt;
use std::fmt;

/// Size scale applied to sub- and superscript runs
pub const SCRIPT_SCALE: f32 = 0.7;
/// Baseline shift of superscript runs, in ems of the base font
pub const SUPERSCRIPT_SHIFT: f32 = 0.45;
/// Baseline shift of subscript runs, in ems of the base font
pub const SUBSCRIPT_SHIFT: f32 = -0.3;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Script {
    #[default]
    Normal,
    Superscript,
    Subscript,
}

/// Per-token overrides on top of the base font of a text box. Every field
/// left at its default inherits from the base font.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub colour: Option<Colour>,
    pub family: Option<String>,
    /// Size relative to the base font, i.e. `0.5` is half size
    pub size: Option<f32>,
    /// Baseline shift in ems, positive is up
    pub baseline: Option<f32>,
    pub script: Script,
}

impl TextStyle {
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn family<S: Into<String>>(mut self, family: S) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn size(mut self, scale: f32) -> Self {
        self.size = Some(scale);
        self
    }

    pub fn superscript(mut self) -> Self {
        self.script = Script::Superscript;
        self
    }

    pub fn subscript(mut self) -> Self {
        self.script = Script::Subscript;
        self
    }

    /// Fold sub/superscript into an explicit size scale and baseline shift.
    /// Scripts win over any size or baseline set by hand.
    pub fn normalized(&self) -> TextStyle {
        let mut style = self.clone();
        match self.script {
            Script::Normal => {}
            Script::Superscript => {
                style.baseline = Some(SUPERSCRIPT_SHIFT);
                style.size = Some(SCRIPT_SCALE);
            }
            Script::Subscript => {
                style.baseline = Some(SUBSCRIPT_SHIFT);
                style.size = Some(SCRIPT_SCALE);
            }
        }
        style
    }

    /// Whether this style changes nothing about the base font
    pub fn is_plain(&self) -> bool {
        !self.bold
            && !self.italic
            && self.colour.is_none()
            && self.family.is_none()
            && self.size.is_none()
            && self.baseline.is_none()
            && self.script == Script::Normal
    }
}

/// A concrete font instance: everything a measurer needs to know to size a
/// run of text, and everything a renderer needs to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: Pt,
    /// Line height as a multiple of the size
    pub line_height: f32,
    pub bold: bool,
    pub italic: bool,
    /// Baseline shift in ems of the unscaled base font
    pub baseline: f32,
    pub colour: Colour,
}

impl FontSpec {
    pub fn new<S: Into<String>>(family: S, size: Pt) -> FontSpec {
        FontSpec {
            family: family.into(),
            size,
            line_height: 1.2,
            bold: false,
            italic: false,
            baseline: 0.0,
            colour: colours::BLACK,
        }
    }

    /// Set the line height as a multiple of the font size
    pub fn with_line_height(mut self, line_height: f32) -> FontSpec {
        self.line_height = line_height;
        self
    }

    /// The same font with its weight and slant replaced
    pub fn with_emphasis(&self, bold: bool, italic: bool) -> FontSpec {
        FontSpec {
            bold,
            italic,
            ..self.clone()
        }
    }

    /// Vertical distance between consecutive baselines
    pub fn line_height(&self) -> Pt {
        self.size * self.line_height
    }

    /// Apply a token's overrides to this font. Plain styles return an
    /// unchanged copy.
    pub fn restyle(&self, style: &TextStyle) -> FontSpec {
        if style.is_plain() {
            return self.clone();
        }

        let style = style.normalized();
        FontSpec {
            family: style.family.unwrap_or_else(|| self.family.clone()),
            size: self.size * style.size.unwrap_or(1.0),
            line_height: self.line_height,
            bold: self.bold || style.bold,
            italic: self.italic || style.italic,
            baseline: style.baseline.unwrap_or(self.baseline),
            colour: style.colour.unwrap_or(self.colour),
        }
    }
}

/// Formats as a CSS `font` shorthand, e.g. `italic bold 12px Helvetica`
impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.italic {
            write!(f, "italic ")?;
        }
        if self.bold {
            write!(f, "bold ")?;
        }
        write!(f, "{}px {}", self.size.0, self.family)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn base() -> FontSpec {
        FontSpec::new("Helvetica", Pt(10.0))
    }

    #[test]
    fn plain_style_keeps_base() {
        assert_eq!(base().restyle(&TextStyle::default()), base());
    }

    #[test]
    fn superscript_shrinks_and_raises() {
        let f = base().restyle(&TextStyle::default().superscript());
        assert_eq!(f.size, Pt(7.0));
        assert_eq!(f.baseline, SUPERSCRIPT_SHIFT);
        assert_eq!(f.family, "Helvetica");
    }

    #[test]
    fn subscript_overrides_custom_size() {
        let f = base().restyle(&TextStyle::default().size(2.0).subscript());
        assert_eq!(f.size, Pt(7.0));
        assert_eq!(f.baseline, SUBSCRIPT_SHIFT);
    }

    #[test]
    fn overrides_apply() {
        let style = TextStyle::default()
            .bold()
            .family("Courier")
            .colour(colours::RED)
            .size(1.5);
        let f = base().restyle(&style);
        assert!(f.bold);
        assert!(!f.italic);
        assert_eq!(f.family, "Courier");
        assert_eq!(f.colour, colours::RED);
        assert_eq!(f.size, Pt(15.0));
        assert_eq!(f.line_height(), Pt(18.0));
    }

    #[test]
    fn css_shorthand() {
        assert_eq!(base().to_string(), "10px Helvetica");
        assert_eq!(
            base().with_emphasis(true, true).to_string(),
            "italic bold 10px Helvetica"
        );
    }
}
