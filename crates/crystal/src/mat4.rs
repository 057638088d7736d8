use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::{
    mat3::Mat3,
    matn::MatN,
    scalar::{One, Zero},
    vector::{Vec3, Vec4},
};

pub type Mat4<T> = MatN<T, 4>;

impl<T> Mat4<T> {
    /// Arguments are given row by row.
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c0r0: T, c1r0: T, c2r0: T, c3r0: T,
        c0r1: T, c1r1: T, c2r1: T, c3r1: T,
        c0r2: T, c1r2: T, c2r2: T, c3r2: T,
        c0r3: T, c1r3: T, c2r3: T, c3r3: T,
    ) -> Self {
        Self::from_data([
            [c0r0, c0r1, c0r2, c0r3],
            [c1r0, c1r1, c1r2, c1r3],
            [c2r0, c2r1, c2r2, c2r3],
            [c3r0, c3r1, c3r2, c3r3],
        ])
    }

    pub fn scale(factor: T) -> Self
    where
        T: Clone + Zero + One + Mul<T, Output = T>,
    {
        let mut matrix = &Self::identity() * factor;
        matrix[(3, 3)] = T::one();
        matrix
    }

    pub fn translate(direction: Vec3<T>) -> Self
    where
        T: Zero + One,
    {
        let mut matrix = Self::identity();
        let [x, y, z] = direction.into_array();
        matrix[(0, 3)] = x;
        matrix[(1, 3)] = y;
        matrix[(2, 3)] = z;
        matrix
    }

    /// Laplace expansion along the first row.
    pub fn determinant(&self) -> T
    where
        T: Clone + Zero + Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T>,
    {
        let mut value = T::zero();

        for col in 0..4 {
            let minor = Mat3::from_fn(|row, minor_col| {
                let src_col = if minor_col < col { minor_col } else { minor_col + 1 };
                self[(row + 1, src_col)].clone()
            });
            let term = self[(0, col)].clone() * minor.determinant();

            value = if col % 2 == 0 { value + term } else { value - term };
        }

        value
    }

    /// Transforms a point, dividing the result by its `w` component.
    pub fn transform_point(&self, point: &Vec3<T>) -> Vec3<T>
    where
        T: Clone + Zero + One + AddAssign<T> + Mul<T, Output = T> + Div<T, Output = T>,
    {
        let h: Vec4<T> = self * &point.to_homogeneous();
        let [x, y, z, w] = h.into_array();

        Vec3::new(x / w.clone(), y / w.clone(), z / w)
    }
}
