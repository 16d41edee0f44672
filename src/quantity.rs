use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

/// A trait representing a flow or cost quantity, typically an integer.
pub trait Quantity:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + Debug
    + Display
{
}

impl Quantity for i32 {}

impl Quantity for i64 {}

impl Quantity for i128 {}
