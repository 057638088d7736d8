use std::ops::{Index, IndexMut};

use crate::matrix::Matrix;

/// Index into a matrix by `(row, column)`.
pub trait MatrixIndex<T: ?Sized> {
    type Output: ?Sized;

    fn get(self, matrix: &T) -> Option<&Self::Output>;
    fn get_mut(self, matrix: &mut T) -> Option<&mut Self::Output>;
}

impl<T, const R: usize, const C: usize> MatrixIndex<Matrix<T, R, C>> for (usize, usize) {
    type Output = T;

    fn get(self, matrix: &Matrix<T, R, C>) -> Option<&Self::Output> {
        matrix.data.get(self.1)?.get(self.0)
    }

    fn get_mut(self, matrix: &mut Matrix<T, R, C>) -> Option<&mut Self::Output> {
        matrix.data.get_mut(self.1)?.get_mut(self.0)
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[col][row]
    }
}
