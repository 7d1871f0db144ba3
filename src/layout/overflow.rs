use crate::layout::Line;
use crate::measure::TextMeasurer;
use crate::style::FontSpec;
use crate::token::Token;
use crate::units::Pt;

/// Make room at the end of `line` for `marker` and append it.
///
/// The marker is measured in the bold variant of `base`. Until it fits within
/// `budget`, the last token on the line loses its final character, or is
/// dropped entirely once it is no wider than the marker. A soft hyphen left
/// at the end is dropped too since a dash followed by an ellipsis looks
/// wrong. The marker picks up the emphasis and link of whatever token ends up
/// in front of it, and is appended even if the line had to be emptied.
pub fn append_overflow<M: TextMeasurer>(
    line: &mut Line,
    line_index: usize,
    budget: Pt,
    marker: &str,
    base: &FontSpec,
    measurer: &M,
) {
    let marker_width = measurer.measure(marker, &base.with_emphasis(true, false));
    let mut line_width = line.width();

    while line_width + marker_width > budget {
        let Some(last) = line.tokens.last_mut() else {
            break;
        };
        let previous_width = last.width;

        if last.width > marker_width && last.value.pop().is_some() {
            last.width = measurer.measure(&last.value, last.font.as_ref().unwrap_or(base));
            line_width += last.width;
        } else {
            line.tokens.pop();
        }
        line_width -= previous_width;
    }

    if line.tokens.last().is_some_and(Token::is_soft_hyphen) {
        line.tokens.pop();
    }

    let mut token = Token::text(marker);
    let (bold, italic) = match line.tokens.last() {
        Some(previous) => {
            token.href = previous.href.clone();
            (previous.style.bold, previous.style.italic)
        }
        None => (false, false),
    };
    token.style.bold = bold;
    token.style.italic = italic;
    token.font = Some(base.with_emphasis(bold, italic));
    token.width = marker_width;
    token.line = line_index;

    log::debug!(
        "truncated line {line_index} to {} tokens to fit overflow marker {marker:?}",
        line.tokens.len()
    );
    line.tokens.push(token);
}
