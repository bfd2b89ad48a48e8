use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Add;

/// Identifier for a vertex in the graph.
///
/// Any cloneable, hashable key works: integers, strings, or opaque handles.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Numeric edge weight.
///
/// Distances accumulate with `+`. Overflow on pathological inputs is not
/// checked; pick a wide enough type.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug + Display {
    const ZERO: Self;

    /// True for weights strictly below zero
    fn is_negative(&self) -> bool {
        *self < Self::ZERO
    }

    /// False for weights with no ordering against themselves (NaN)
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

macro_rules! impl_weight {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_weight!(0 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_weight!(0.0 => f32, f64);
