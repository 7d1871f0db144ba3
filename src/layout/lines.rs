use crate::layout::pack::Breakpoints;
use crate::measure::TextMeasurer;
use crate::style::FontSpec;
use crate::token::Token;
use crate::units::Pt;
use derive_more::Deref;

/// One laid out line, ready to be rendered left to right
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    pub tokens: Vec<Token>,
}

impl Line {
    /// Sum of the widths of the tokens on this line
    pub fn width(&self) -> Pt {
        self.tokens.iter().map(|t| t.width).sum()
    }

    /// Whether a hard line break ended this line, as opposed to running out
    /// of width. Justified text leaves these lines ragged.
    pub fn ends_in_hard_break(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_line_break)
    }

    /// The visible text of the line. Breaks of either kind draw nothing.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .filter(|t| !t.is_line_break() && !t.is_break())
            .map(|t| t.value.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// The result of breaking a token list: the lines, the font every line is
/// based on, and whether some content didn't fit
#[derive(Clone, Debug, PartialEq, Deref)]
pub struct Lines {
    #[deref]
    pub lines: Vec<Line>,
    pub font: FontSpec,
    pub truncated: bool,
}

impl Lines {
    /// Total height the lines take up in the base font
    pub fn height(&self) -> Pt {
        self.font.line_height() * self.lines.len() as f32
    }
}

impl IntoIterator for Lines {
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lines {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Tokens that take no visible room at the start of a line
fn is_leading_junk(token: &Token) -> bool {
    token.whitespace || token.value.is_empty()
}

/// Tokens that take no visible room at the end of a line. A soft hyphen is
/// kept since it may turn into a dash.
fn is_trailing_junk(token: &Token) -> bool {
    token.whitespace || (token.value.is_empty() && !token.is_soft_hyphen())
}

/// Turn packed breakpoints into lines of annotated tokens.
///
/// Each line is trimmed of whitespace and empty tokens at both ends. A soft
/// hyphen left at the end of a line becomes a `-` measured in its own font,
/// and a hard break that ended the line is kept as the last token so
/// justification can tell it apart from a wrapped line. Tokens are copied out
/// of `tokens`, so the input list keeps its soft hyphens intact for the next
/// layout.
pub fn materialize<M: TextMeasurer>(
    tokens: &[Token],
    breaks: &Breakpoints,
    base: &FontSpec,
    measurer: &M,
) -> Vec<Line> {
    let mut start = 0usize;
    let mut lines = Vec::with_capacity(breaks.ends.len());

    for &end in &breaks.ends {
        let mut e = end;
        let mut hard_break: Option<&Token> = None;
        while e > start && is_trailing_junk(&tokens[e - 1]) {
            if tokens[e - 1].is_line_break() {
                hard_break = Some(&tokens[e - 1]);
            }
            e -= 1;
        }

        let mut s = start;
        while s < e && is_leading_junk(&tokens[s]) {
            s += 1;
        }

        let mut slice = tokens[s..e].to_vec();
        if let Some(last) = slice.last_mut().filter(|t| t.is_soft_hyphen()) {
            last.value = "-".to_string();
            last.width = measurer.measure("-", last.font.as_ref().unwrap_or(base));
        }

        let mut line: Vec<Token> = slice.into_iter().filter(|t| !t.value.is_empty()).collect();
        if let Some(hard_break) = hard_break {
            line.push(hard_break.clone());
        }

        lines.push(Line { tokens: line });
        start = end;
    }

    lines
}
