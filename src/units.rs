use derive_more::{Add, AddAssign, Deref, Display, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};
use std::ops::Div;

/// A distance in layout units. For SVG text boxes this is typically user units
/// (px), but nothing in the line breaker assumes a particular unit as long as
/// widths, heights and font sizes agree with each other.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl Pt {
    /// An unbounded distance, used for boxes without a height limit
    pub const INFINITY: Pt = Pt(f32::INFINITY);
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}
