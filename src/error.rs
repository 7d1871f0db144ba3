use thiserror::Error;

/// All errors that the crate can generate. Line breaking itself never fails;
/// these come from the font and style collaborators.
#[derive(Error, Debug)]
pub enum BreakError {
    #[error(transparent)]
    /// An I/O error occurred while reading a font file
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("unknown colour `{0}`, expected #rgb or #rrggbb")]
    /// A colour string could not be parsed
    UnknownColour(String),
}
