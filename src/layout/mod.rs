//! Breaking token lists into lines that fit a box.
//!
//! Layout happens in three steps, each available on its own:
//!
//! - [`pack`](crate::layout::pack) - greedily assigns tokens to lines and returns where each line ends
//! - [`materialize`](crate::layout::materialize) - cuts the token list into trimmed lines
//! - [`append_overflow`](crate::layout::append_overflow) - marks the last line when the text didn't fit
//!
//! [`TextBox`](crate::layout::TextBox) runs all three.
//!
//! # Example
//!
//! ```
//! use textbox_break::{tokenize_plain, FontSpec, HeuristicMeasurer, Pt};
//! use textbox_break::layout::{BreakOptions, Overflow, TextBox};
//!
//! let font = FontSpec::new("Helvetica", Pt(12.0));
//! let options = BreakOptions::default()
//!     .width(Pt(120.0))
//!     .height(Pt(30.0))
//!     .overflow(Overflow::Ellipsis);
//! let text_box = TextBox::new(options, font);
//!
//! let mut tokens = tokenize_plain("The quick brown fox jumps over the lazy dog, twice.");
//! let lines = text_box.break_lines(&mut tokens, &HeuristicMeasurer::default());
//!
//! assert_eq!(lines.len(), 2);
//! assert!(lines.truncated);
//! assert!(lines[1].text().ends_with('…'));
//! ```

mod lines;
mod options;
mod overflow;
mod pack;

pub use lines::*;
pub use options::*;
pub use overflow::*;
pub use pack::*;

use crate::measure::TextMeasurer;
use crate::style::FontSpec;
use crate::token::Token;

/// A box text is laid out into: its bounds and its base font
#[derive(Clone, Debug)]
pub struct TextBox {
    pub options: BreakOptions,
    pub font: FontSpec,
}

impl TextBox {
    pub fn new(options: BreakOptions, font: FontSpec) -> TextBox {
        TextBox { options, font }
    }

    /// Lay `tokens` out into lines.
    ///
    /// The tokens are annotated in place with their resolved font, width,
    /// line and whitespace flag. The returned lines hold copies of the
    /// annotated tokens. When the height runs out before the tokens do, the
    /// last line gets the configured overflow marker.
    pub fn break_lines<M: TextMeasurer>(&self, tokens: &mut [Token], measurer: &M) -> Lines {
        let breaks = pack(
            tokens,
            &self.options.width,
            self.options.height,
            &self.font,
            measurer,
        );
        let truncated = breaks.is_truncated(tokens.len());
        let mut lines = materialize(tokens, &breaks, &self.font, measurer);

        if truncated {
            let last_index = lines.len().saturating_sub(1);
            let budget = self.options.width.width(last_index);
            if let (Some(marker), Some(last)) = (self.options.overflow.marker(), lines.last_mut()) {
                append_overflow(last, last_index, budget, marker, &self.font, measurer);
            }
        }

        Lines {
            lines,
            font: self.font.clone(),
            truncated,
        }
    }
}

/// Lay `tokens` out in a box described by `options`, based on `font`.
/// Shorthand for [TextBox::break_lines] on a one-off box.
pub fn linebreak<M: TextMeasurer>(
    tokens: &mut [Token],
    options: &BreakOptions,
    font: &FontSpec,
    measurer: &M,
) -> Lines {
    let text_box = TextBox {
        options: options.clone(),
        font: font.clone(),
    };
    text_box.break_lines(tokens, measurer)
}
