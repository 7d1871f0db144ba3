use crate::style::{FontSpec, TextStyle};
use crate::units::Pt;

pub const SOFT_HYPHEN: char = '\u{00AD}';

/// What a token means to the line breaker
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Literal text
    Text,
    /// A place the line may be broken. Takes no room and is never rendered,
    /// whatever its value.
    Break,
    /// A place the line may be broken by hyphenating. Shows as `-` when the
    /// line ends on it and as nothing otherwise.
    SoftHyphen,
    /// A mandatory line break
    LineBreak,
}

/// A unit of layout input.
///
/// `font`, `width`, `line` and `whitespace` are written by the line breaker
/// during layout and are meaningless before it. A layout pass takes the tokens
/// by `&mut`, so only one layout can annotate a token list at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub style: TextStyle,
    /// Hyperlink target the run belongs to
    pub href: Option<String>,

    pub font: Option<FontSpec>,
    pub width: Pt,
    pub line: usize,
    pub whitespace: bool,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, value: S) -> Token {
        Token {
            kind,
            value: value.into(),
            style: TextStyle::default(),
            href: None,
            font: None,
            width: Pt(0.0),
            line: 0,
            whitespace: false,
        }
    }

    pub fn text<S: Into<String>>(value: S) -> Token {
        Token::new(TokenKind::Text, value)
    }

    /// An invisible break opportunity
    pub fn soft_break() -> Token {
        Token::new(TokenKind::Break, "")
    }

    /// A single space of text. Put a [Token::soft_break] in front of it to
    /// let the line wrap there.
    pub fn space() -> Token {
        Token::text(" ")
    }

    pub fn soft_hyphen() -> Token {
        Token::new(TokenKind::SoftHyphen, "")
    }

    pub fn line_break() -> Token {
        Token::new(TokenKind::LineBreak, "")
    }

    pub fn with_style(mut self, style: TextStyle) -> Token {
        self.style = style;
        self
    }

    pub fn with_href<S: Into<String>>(mut self, href: S) -> Token {
        self.href = Some(href.into());
        self
    }

    pub fn is_break(&self) -> bool {
        self.kind == TokenKind::Break
    }

    pub fn is_soft_hyphen(&self) -> bool {
        self.kind == TokenKind::SoftHyphen
    }

    pub fn is_line_break(&self) -> bool {
        self.kind == TokenKind::LineBreak
    }
}

/// Split plain text into tokens: words become [TokenKind::Text], each run of
/// whitespace a [TokenKind::Break] followed by a single space, U+00AD a
/// [TokenKind::SoftHyphen] and each newline a [TokenKind::LineBreak].
///
/// This is a convenience for unstyled text; styled input is expected to come
/// from the caller's own markup parser.
pub fn tokenize_plain(text: &str) -> Vec<Token> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut in_space = false;

    let flush = |word: &mut String, tokens: &mut Vec<Token>| {
        if !word.is_empty() {
            tokens.push(Token::text(std::mem::take(word)));
        }
    };

    for ch in text.chars() {
        match ch {
            '\n' => {
                flush(&mut word, &mut tokens);
                tokens.push(Token::line_break());
                in_space = false;
            }
            SOFT_HYPHEN => {
                flush(&mut word, &mut tokens);
                tokens.push(Token::soft_hyphen());
                in_space = false;
            }
            ch if ch.is_whitespace() => {
                flush(&mut word, &mut tokens);
                if !in_space {
                    tokens.push(Token::soft_break());
                    tokens.push(Token::space());
                    in_space = true;
                }
            }
            ch => {
                word.push(ch);
                in_space = false;
            }
        }
    }
    flush(&mut word, &mut tokens);

    tokens
}
