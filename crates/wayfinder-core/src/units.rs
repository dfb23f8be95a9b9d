//! Compile-time unit safety for routing quantities.
//!
//! Every edge carries two integers with very different meanings: the minimum
//! power an actor needs to traverse it, and the distance accumulated when it
//! does. Keeping both as raw `u64` makes it easy to compare a budget against a
//! distance by accident, so each gets its own newtype.
//!
//! # Usage
//!
//! ```
//! use wayfinder_core::units::{Distance, Power};
//!
//! let leg = Distance(2) + Distance(3);
//! assert_eq!(leg, Distance(5));
//!
//! // This would NOT compile - different units
//! // let wrong = leg + Power(1);
//!
//! assert!(Power(10).admits(Power(5)));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Macro to implement the shared surface of integer unit types
macro_rules! impl_unit_ops {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $type {
            pub const ZERO: Self = Self(0);
            pub const MAX: Self = Self(u64::MAX);

            /// Create a new value
            #[inline]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $type {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

// =============================================================================
// Power
// =============================================================================

/// Power requirement of an edge, or power budget of a query.
///
/// An edge with requirement `p` is usable by any budget `b` with `p <= b`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Power(pub u64);

impl_unit_ops!(Power);

impl Power {
    /// Whether this budget is enough to traverse an edge requiring `requirement`.
    #[inline]
    pub fn admits(self, requirement: Power) -> bool {
        requirement <= self
    }

    /// Next probe of an exponential search; saturates at `Power::MAX`.
    #[inline]
    pub fn doubled(self) -> Self {
        Self(self.0.saturating_mul(2))
    }

    /// Integer midpoint of `self..=upper`, rounded down, without overflow.
    #[inline]
    pub fn midpoint(self, upper: Power) -> Self {
        Self(self.0 + (upper.0 - self.0) / 2)
    }
}

// =============================================================================
// Distance
// =============================================================================

/// Non-negative traversal cost accumulated along a path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Distance(pub u64);

impl_unit_ops!(Distance);

impl Distance {
    /// Distance assigned to edges that do not state one.
    pub const UNIT: Self = Self(1);
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Distance::ZERO, Add::add)
    }
}
