use std::ops::{AddAssign, DivAssign, Mul, MulAssign};

use crate::{
    scalar::{Sqrt, Zero},
    vector::ColVector,
};

/// Euclidean length of a column vector.
pub trait Normed: Sized {
    type Norm;

    fn magnitude_squared(&self) -> Self::Norm;
    fn scale_mut(&mut self, n: Self::Norm);
    fn unscale_mut(&mut self, n: Self::Norm);

    fn magnitude(&self) -> Self::Norm
    where
        Self::Norm: Sqrt<Output = Self::Norm>,
    {
        self.magnitude_squared().sqrt()
    }

    /// Scales to unit length. A zero vector is left untouched.
    fn normalize(&mut self)
    where
        Self::Norm: Sqrt<Output = Self::Norm> + Zero + PartialEq,
    {
        let n = self.magnitude();
        if n != Self::Norm::zero() {
            self.unscale_mut(n);
        }
    }

    fn normalized(mut self) -> Self
    where
        Self::Norm: Sqrt<Output = Self::Norm> + Zero + PartialEq,
    {
        self.normalize();
        self
    }
}

impl<T, const R: usize> Normed for ColVector<T, R>
where
    T: Clone + Zero + Mul<T, Output = T> + AddAssign<T> + MulAssign<T> + DivAssign<T>,
{
    type Norm = T;

    fn magnitude_squared(&self) -> T {
        self.dot_product(self)
    }

    fn scale_mut(&mut self, n: T) {
        for row in self.data[0].iter_mut() {
            *row *= n.clone();
        }
    }

    fn unscale_mut(&mut self, n: T) {
        for row in self.data[0].iter_mut() {
            *row /= n.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{approx::ApproxEq, vector::Vec3};

    #[test]
    fn magnitude() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);

        assert_eq!(v.magnitude_squared(), 49.0);
        assert_eq!(v.magnitude(), 7.0);
    }

    #[test]
    fn normalize() {
        let v = Vec3::new(0.0f32, 3.0, -4.0).normalized();

        assert!(v.approx_eq(&Vec3::new(0.0, 0.6, -0.8)));
    }

    #[test]
    fn normalize_zero_vector() {
        let mut v = Vec3::<f32>::zero();
        v.normalize();

        assert_eq!(v, Vec3::zero());
    }

    #[test]
    fn scale() {
        let mut v = Vec3::new(1.0f32, -2.0, 0.5);
        v.scale_mut(2.0);

        assert_eq!(v, Vec3::new(2.0, -4.0, 1.0));
    }
}
