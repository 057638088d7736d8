use crate::{
    matrix::Matrix,
    scalar::{One, Zero},
};

pub type MatN<T, const SIDE: usize> = Matrix<T, SIDE, SIDE>;

impl<T, const SIDE: usize> MatN<T, SIDE>
where
    T: Zero + One,
{
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::one() } else { T::zero() })
    }
}
