use std::ops::{Add, Mul, Sub};

use crate::matn::MatN;

pub type Mat3<T> = MatN<T, 3>;

impl<T> Mat3<T> {
    /// Arguments are given row by row.
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c0r0: T, c1r0: T, c2r0: T,
        c0r1: T, c1r1: T, c2r1: T,
        c0r2: T, c1r2: T, c2r2: T,
    ) -> Self {
        Self::from_data([
            [c0r0, c0r1, c0r2],
            [c1r0, c1r1, c1r2],
            [c2r0, c2r1, c2r2],
        ])
    }

    pub fn determinant(&self) -> T
    where
        T: Clone + Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T>,
    {
        let m = |row: usize, col: usize| self[(row, col)].clone();

        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }
}
