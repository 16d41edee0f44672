use core::fmt::Debug;

/// A trait representing an external edge label.
///
/// Labels are caller-chosen and need not be unique: both arcs of a logical
/// edge carry the same label, and several logical edges may share one.
pub trait EdgeId: Copy + Ord + Debug {}

impl EdgeId for usize {}

impl EdgeId for u32 {}

impl EdgeId for u64 {}

impl EdgeId for i32 {}
