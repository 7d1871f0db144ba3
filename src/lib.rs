mod colour;
pub use colour::*;

mod font;
pub use font::*;

/// Greedy line breaking of token lists into width and height limited boxes
pub mod layout;

mod measure;
pub use measure::*;

mod style;
pub use style::*;

mod token;
pub use token::*;

mod units;
pub use units::*;

/// The whitespace characters the line breaker recognises and their widths
pub mod whitespace;

mod error;
pub use error::*;
