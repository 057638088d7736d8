use std::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub},
};

use crate::{index::MatrixIndex, scalar::Zero};

/// Column-major matrix with `R` rows and `C` columns.
#[repr(C)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; R]; C],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const fn from_data(data: [[T; R]; C]) -> Self {
        Self { data }
    }

    /// Builds a matrix by calling `f(row, col)` for every cell.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_data(std::array::from_fn(|col| {
            std::array::from_fn(|row| f(row, col))
        }))
    }

    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    pub fn get<I>(&self, index: I) -> Option<&I::Output>
    where
        I: MatrixIndex<Self>,
    {
        index.get(self)
    }

    pub fn get_mut<I>(&mut self, index: I) -> Option<&mut I::Output>
    where
        I: MatrixIndex<Self>,
    {
        index.get_mut(self)
    }

    pub fn into_data(self) -> [[T; R]; C] {
        self.data
    }

    pub fn transpose(&self) -> Matrix<T, C, R>
    where
        T: Clone,
    {
        Matrix::from_fn(|row, col| self[(col, row)].clone())
    }

    fn zip_map<RT, F>(&self, rhs: &Matrix<RT, R, C>, mut f: F) -> Self
    where
        T: Clone,
        RT: Clone,
        F: FnMut(T, RT) -> T,
    {
        Self::from_fn(|row, col| f(self[(row, col)].clone(), rhs[(row, col)].clone()))
    }
}

impl<T, const R: usize, const C: usize> Clone for Matrix<T, R, C>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self::from_data(self.data.clone())
    }
}

impl<T, const R: usize, const C: usize> Copy for Matrix<T, R, C> where T: Copy {}

impl<T, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape())
            .field("data", &self.data)
            .finish()
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> PartialEq<Self> for Matrix<T, R, C>
where
    T: PartialEq<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.data.eq(&other.data)
    }
}

impl<T, const R: usize, const C: usize> From<[[T; R]; C]> for Matrix<T, R, C> {
    fn from(data: [[T; R]; C]) -> Self {
        Self::from_data(data)
    }
}

impl<T, const R: usize> From<[T; R]> for Matrix<T, R, 1> {
    fn from(data: [T; R]) -> Self {
        Self::from_data([data])
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; R]; C] {
    fn from(value: Matrix<T, R, C>) -> Self {
        value.data
    }
}

impl<T, const R: usize, const C: usize> Zero for Matrix<T, R, C>
where
    T: Zero,
{
    fn zero() -> Self {
        Self::from_fn(|_, _| T::zero())
    }
}

impl<'a, 'b, ST, RT, const R: usize, const C: usize> Add<&'a Matrix<RT, R, C>>
    for &'b Matrix<ST, R, C>
where
    ST: Clone + Add<RT, Output = ST>,
    RT: Clone,
{
    type Output = Matrix<ST, R, C>;

    fn add(self, rhs: &'a Matrix<RT, R, C>) -> Self::Output {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<ST, RT, const R: usize, const C: usize> Add<Matrix<RT, R, C>> for Matrix<ST, R, C>
where
    ST: Clone + Add<RT, Output = ST>,
    RT: Clone,
{
    type Output = Self;

    fn add(self, rhs: Matrix<RT, R, C>) -> Self::Output {
        &self + &rhs
    }
}

impl<ST, RT, const R: usize, const C: usize> AddAssign<Matrix<RT, R, C>> for Matrix<ST, R, C>
where
    ST: AddAssign<RT>,
{
    fn add_assign(&mut self, rhs: Matrix<RT, R, C>) {
        for (lhs_col, rhs_col) in self.data.iter_mut().zip(rhs.data) {
            for (lhs, rhs) in lhs_col.iter_mut().zip(rhs_col) {
                *lhs += rhs;
            }
        }
    }
}

impl<'a, 'b, ST, RT, const R: usize, const C: usize> Sub<&'a Matrix<RT, R, C>>
    for &'b Matrix<ST, R, C>
where
    ST: Clone + Sub<RT, Output = ST>,
    RT: Clone,
{
    type Output = Matrix<ST, R, C>;

    fn sub(self, rhs: &'a Matrix<RT, R, C>) -> Self::Output {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<ST, RT, const R: usize, const C: usize> Sub<Matrix<RT, R, C>> for Matrix<ST, R, C>
where
    ST: Clone + Sub<RT, Output = ST>,
    RT: Clone,
{
    type Output = Self;

    fn sub(self, rhs: Matrix<RT, R, C>) -> Self::Output {
        &self - &rhs
    }
}

impl<'a, 'b, ST, RT, const SR: usize, const SHARED: usize, const RC: usize>
    Mul<&'a Matrix<RT, SHARED, RC>> for &'b Matrix<ST, SR, SHARED>
where
    ST: Clone + Zero + AddAssign<ST> + Mul<RT, Output = ST>,
    RT: Clone,
{
    type Output = Matrix<ST, SR, RC>;

    fn mul(self, rhs: &'a Matrix<RT, SHARED, RC>) -> Self::Output {
        Matrix::from_fn(|row_idx, col_idx| {
            let mut value = ST::zero();
            for idx in 0..SHARED {
                value += self[(row_idx, idx)].clone() * rhs[(idx, col_idx)].clone();
            }
            value
        })
    }
}

impl<'a, T, const R: usize, const C: usize> Mul<T> for &'a Matrix<T, R, C>
where
    T: Clone + Mul<T, Output = T>,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        Matrix::from_fn(|row_idx, col_idx| self[(row_idx, col_idx)].clone() * rhs.clone())
    }
}

impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Clone + Mul<T, Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}

impl<'a, T, const R: usize, const C: usize> Neg for &'a Matrix<T, R, C>
where
    T: Clone + Neg<Output = T>,
{
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Self::Output {
        Matrix::from_fn(|row_idx, col_idx| -self[(row_idx, col_idx)].clone())
    }
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Clone + Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_from_data_is_column_major() {
        let m: Matrix<i32, 2, 3> = [[1, 2], [3, 4], [5, 6]].into();

        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(1, 0)], 2);
        assert_eq!(m[(0, 2)], 5);
        assert_eq!(m.get((1, 2)), Some(&6));
        assert_eq!(m.get((2, 0)), None);
    }

    #[test]
    fn matrix_add_sub_neg() {
        let a: Matrix<f32, 2, 2> = [[1.0, 2.0], [3.0, 4.0]].into();
        let b: Matrix<f32, 2, 2> = [[0.5, 0.5], [1.0, -1.0]].into();

        let sum: Matrix<f32, 2, 2> = [[1.5, 2.5], [4.0, 3.0]].into();
        let diff: Matrix<f32, 2, 2> = [[0.5, 1.5], [2.0, 5.0]].into();
        let neg: Matrix<f32, 2, 2> = [[-1.0, -2.0], [-3.0, -4.0]].into();

        assert_eq!(&a + &b, sum);
        assert_eq!(&a - &b, diff);
        assert_eq!(-a, neg);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn matrix_mul() {
        // rows: [1 2] [3 4]
        let a: Matrix<i32, 2, 2> = [[1, 3], [2, 4]].into();
        // rows: [5 6] [7 8]
        let b: Matrix<i32, 2, 2> = [[5, 7], [6, 8]].into();

        // rows: [19 22] [43 50]
        let product: Matrix<i32, 2, 2> = [[19, 43], [22, 50]].into();
        let doubled: Matrix<i32, 2, 2> = [[2, 6], [4, 8]].into();

        assert_eq!(&a * &b, product);
        assert_eq!(&a * 2, doubled);
    }

    #[test]
    fn matrix_transpose() {
        let m: Matrix<i32, 2, 3> = [[1, 2], [3, 4], [5, 6]].into();
        let t: Matrix<i32, 3, 2> = m.transpose();

        let expected: Matrix<i32, 3, 2> = [[1, 3, 5], [2, 4, 6]].into();
        assert_eq!(t, expected);
        assert_eq!(t.transpose(), m);
    }
}
