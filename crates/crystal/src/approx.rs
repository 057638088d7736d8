use crate::matrix::Matrix;

/// Margin used by [`ApproxEq::approx_eq`].
pub const EPSILON: f32 = 1e-6;

pub trait ApproxEq<Rhs: ?Sized = Self> {
    fn approx_eq_margin(&self, other: &Rhs, margin: f32) -> bool;

    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_margin(other, EPSILON)
    }
}

impl ApproxEq for f32 {
    fn approx_eq_margin(&self, other: &Self, margin: f32) -> bool {
        (self - other).abs() <= margin
    }
}

impl<const R: usize, const C: usize> ApproxEq for Matrix<f32, R, C> {
    fn approx_eq_margin(&self, other: &Self, margin: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.approx_eq_margin(b, margin))
    }
}
