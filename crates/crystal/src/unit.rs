use std::ops::Deref;

use crate::{
    approx::EPSILON,
    norm::Normed,
    scalar::{Sqrt, Zero},
};

/// A vector known to have unit length. Only reachable through normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Unit<T>(T);

impl<T> Unit<T>
where
    T: Normed,
    T::Norm: Sqrt<Output = T::Norm> + Zero + PartialEq,
{
    /// A zero vector stays zero.
    pub fn new_normalize(value: T) -> Self {
        Self(value.normalized())
    }
}

impl<T: Normed<Norm = f32>> Unit<T> {
    /// Returns `None` if the length of `value` is within [`EPSILON`] of zero.
    pub fn try_new_normalize(mut value: T) -> Option<Self> {
        let n = value.magnitude();
        if n.abs() <= EPSILON {
            return None;
        }
        value.unscale_mut(n);

        Some(Self(value))
    }
}

impl<T> Unit<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Unit<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Unit<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}
