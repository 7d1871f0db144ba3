use crate::units::Pt;
use std::fmt;
use std::sync::Arc;

/// How wide each line of a box may be
#[derive(Clone)]
pub enum WidthBudget {
    /// Every line has the same width
    Fixed(Pt),
    /// Line `i` gets entry `i`; lines past the end reuse the last entry. An
    /// empty list allows no width at all.
    Lines(Vec<Pt>),
    /// Arbitrary per-line widths, e.g. for text flowed inside a circle
    Shape(Arc<dyn Fn(usize) -> Pt + Send + Sync>),
}

impl WidthBudget {
    pub fn shape<F: Fn(usize) -> Pt + Send + Sync + 'static>(f: F) -> WidthBudget {
        WidthBudget::Shape(Arc::new(f))
    }

    /// Width available to the line at `line_index`
    pub fn width(&self, line_index: usize) -> Pt {
        match self {
            WidthBudget::Fixed(w) => *w,
            WidthBudget::Lines(widths) => widths
                .get(line_index)
                .or_else(|| widths.last())
                .copied()
                .unwrap_or_default(),
            WidthBudget::Shape(f) => f(line_index),
        }
    }
}

impl fmt::Debug for WidthBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthBudget::Fixed(w) => f.debug_tuple("Fixed").field(w).finish(),
            WidthBudget::Lines(widths) => f.debug_tuple("Lines").field(widths).finish(),
            WidthBudget::Shape(_) => f.write_str("Shape(..)"),
        }
    }
}

impl From<Pt> for WidthBudget {
    fn from(w: Pt) -> Self {
        WidthBudget::Fixed(w)
    }
}

impl From<Vec<Pt>> for WidthBudget {
    fn from(widths: Vec<Pt>) -> Self {
        WidthBudget::Lines(widths)
    }
}

/// What to show at the end of the last line when the text doesn't fit
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Cut the text silently
    #[default]
    Clip,
    /// Append `…`
    Ellipsis,
    /// Append a custom marker
    Marker(String),
}

impl Overflow {
    /// The marker text to append, if any
    pub fn marker(&self) -> Option<&str> {
        match self {
            Overflow::Clip => None,
            Overflow::Ellipsis => Some("…"),
            Overflow::Marker(m) if m.is_empty() => None,
            Overflow::Marker(m) => Some(m),
        }
    }
}

/// The bounds of a text box. Defaults to an unbounded box that clips.
#[derive(Clone, Debug)]
pub struct BreakOptions {
    pub width: WidthBudget,
    /// Total height available for lines; [Pt::INFINITY] for no limit
    pub height: Pt,
    pub overflow: Overflow,
}

impl Default for BreakOptions {
    fn default() -> Self {
        BreakOptions {
            width: WidthBudget::Fixed(Pt::INFINITY),
            height: Pt::INFINITY,
            overflow: Overflow::Clip,
        }
    }
}

impl BreakOptions {
    pub fn width<W: Into<WidthBudget>>(mut self, width: W) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: Pt) -> Self {
        self.height = height;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}
