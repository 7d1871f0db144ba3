use crate::layout::WidthBudget;
use crate::measure::TextMeasurer;
use crate::style::FontSpec;
use crate::token::Token;
use crate::units::Pt;
use crate::whitespace::is_whitespace;

/// Where each line of a packed token list ends
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Breakpoints {
    /// Exclusive end index of each line, strictly increasing
    pub ends: Vec<usize>,
    /// How many tokens were considered before packing stopped. Anything less
    /// than the token count means the height ran out first.
    pub consumed: usize,
}

impl Breakpoints {
    pub fn is_truncated(&self, token_count: usize) -> bool {
        self.consumed < token_count
    }
}

/// A place the current line could be cut, and how wide the line was there
#[derive(Copy, Clone, Debug)]
struct Candidate {
    index: usize,
    width: Pt,
}

/// How many lines of `base` fit in `height`; unbounded heights allow any number
pub fn max_lines(height: Pt, base: &FontSpec) -> usize {
    if !height.is_finite() {
        return usize::MAX;
    }
    // saturating cast: a zero line height allows unlimited lines, NaN allows none
    (height.0 / base.line_height().0).floor() as usize
}

/// Replace runs of CR, LF and NBSP inside a run with a single space
fn collapse_line_ends(value: &str) -> Option<String> {
    let is_end = |ch: char| matches!(ch, '\r' | '\n' | '\u{00A0}');
    if !value.contains(is_end) {
        return None;
    }

    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for ch in value.chars() {
        if is_end(ch) {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    Some(out)
}

/// Would ending a line on this candidate with a hyphen overflow the line?
fn hyphen_overflows<M: TextMeasurer>(
    token: &Token,
    candidate: Candidate,
    budget: Pt,
    base: &FontSpec,
    measurer: &M,
) -> bool {
    if !token.is_soft_hyphen() {
        return false;
    }
    let hyphen = measurer.measure("-", token.font.as_ref().unwrap_or(base));
    candidate.width + hyphen > budget
}

/// Greedily pack tokens into lines, returning where each line ends.
///
/// Every visited token gets its `font`, `width`, `line` and `whitespace`
/// annotations written. Lines are filled until a token no longer fits, at
/// which point the line is cut at the most recent break opportunity and
/// packing resumes right after it. Soft hyphens whose `-` would itself
/// overflow are passed over in favour of earlier opportunities, unless they
/// are the last ones left. A token that doesn't fit and has no opportunity
/// before it on its line stays put and overflows.
pub fn pack<M: TextMeasurer>(
    tokens: &mut [Token],
    width: &WidthBudget,
    height: Pt,
    base: &FontSpec,
    measurer: &M,
) -> Breakpoints {
    if tokens.is_empty() {
        return Breakpoints::default();
    }

    let max_lines = max_lines(height, base);
    // nothing would ever be visible
    if (height.0 == 0.0 && width.width(0).0 == 0.0) || max_lines == 0 {
        log::debug!("box has no room for lines (height {height}, max lines {max_lines})");
        return Breakpoints::default();
    }

    let mut ends: Vec<usize> = Vec::new();
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut index = 0usize;
    let mut line = 0usize;
    let mut line_width = Pt(0.0);
    let mut last_was_whitespace = false;

    while index < tokens.len() && line < max_lines {
        let budget = width.width(line);

        let token = &mut tokens[index];
        let font = measurer.resolve_font(base, &token.style);
        token.width = if token.is_break() {
            Pt(0.0)
        } else {
            measurer.measure(&token.value, &font)
        };
        token.font = Some(font);
        token.line = line;
        token.whitespace = is_whitespace(&token.value);

        let whitespace = token.whitespace;
        let hard_break = token.is_line_break();
        let opportunity = token.is_break() || token.is_soft_hyphen();

        if whitespace && (line_width == Pt(0.0) || last_was_whitespace) {
            // leading or repeated whitespace takes no room
        } else if hard_break {
            ends.push(index + 1);
            line_width = Pt(0.0);
            candidates.clear();
            line += 1;
        } else if opportunity {
            candidates.push(Candidate {
                index,
                width: line_width,
            });
        } else if candidates.is_empty() || whitespace || line_width + token.width < budget {
            // SVG doesn't collapse newlines into spaces the way HTML does
            if let Some(collapsed) = collapse_line_ends(&token.value) {
                token.value = collapsed;
            }
            line_width += token.width;
        } else {
            let mut accepted = None;
            while let Some(candidate) = candidates.pop() {
                if candidates.is_empty()
                    || !hyphen_overflows(&tokens[candidate.index], candidate, budget, base, measurer)
                {
                    accepted = Some(candidate);
                    break;
                }
                log::trace!(
                    "line {line}: hyphen at token {} would overflow, trying an earlier break",
                    candidate.index
                );
            }

            if let Some(candidate) = accepted {
                log::trace!(
                    "line {line}: token {index} overflows {budget}, breaking after token {}",
                    candidate.index
                );
                ends.push(candidate.index + 1);
                line_width = Pt(0.0);
                candidates.clear();
                line += 1;
                // re-examine everything after the break on the new line
                index = candidate.index;
            }
        }

        index += 1;
        last_was_whitespace = whitespace;
    }

    // the remainder of the last line
    if ends.last() != Some(&index) {
        ends.push(index);
    }

    log::debug!(
        "packed {} of {} tokens into {} lines",
        index,
        tokens.len(),
        ends.len()
    );

    Breakpoints {
        ends,
        consumed: index,
    }
}
