use std::ops::{AddAssign, Mul, Sub};

use crate::{
    matrix::Matrix,
    scalar::{Cross, One, Zero},
};

pub(crate) type ColVector<T, const R: usize> = Matrix<T, R, 1>;

pub type Vec2<T> = ColVector<T, 2>;
pub type Vec3<T> = ColVector<T, 3>;
pub type Vec4<T> = ColVector<T, 4>;

impl<T, const R: usize> ColVector<T, R> {
    fn unit(idx: usize) -> Self
    where
        T: Zero + One,
    {
        Matrix::from_fn(|row, _| if row == idx { T::one() } else { T::zero() })
    }

    /// Components in order.
    pub fn into_array(self) -> [T; R] {
        let [column] = self.into_data();
        column
    }

    pub fn dot_product<RT>(&self, rhs: &ColVector<RT, R>) -> T
    where
        T: Clone + Zero + Mul<RT, Output = T> + AddAssign<T>,
        RT: Clone,
    {
        self.data[0]
            .iter()
            .zip(&rhs.data[0])
            .fold(T::zero(), |mut sum, (a, b)| {
                sum += a.clone() * b.clone();
                sum
            })
    }
}

// Named component access and unit vectors, only for the components a vector has.
macro_rules! impl_components {
    ( $( $vec:ident { $( $idx:literal => $get:ident $get_mut:ident $unit:ident ),+ } )+ ) => {
        $(
            impl<T> $vec<T> {
                $(
                    pub fn $get(&self) -> &T {
                        &self.data[0][$idx]
                    }

                    pub fn $get_mut(&mut self) -> &mut T {
                        &mut self.data[0][$idx]
                    }

                    pub fn $unit() -> Self
                    where
                        T: Zero + One,
                    {
                        Self::unit($idx)
                    }
                )+
            }
        )+
    };
}

impl_components! {
    Vec2 {
        0 => x x_mut unit_x,
        1 => y y_mut unit_y
    }
    Vec3 {
        0 => x x_mut unit_x,
        1 => y y_mut unit_y,
        2 => z z_mut unit_z
    }
    Vec4 {
        0 => x x_mut unit_x,
        1 => y y_mut unit_y,
        2 => z z_mut unit_z,
        3 => w w_mut unit_w
    }
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self::from_data([[x, y]])
    }
}

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_data([[x, y, z]])
    }

    /// Extends a point to homogeneous coordinates with `w = 1`.
    pub fn to_homogeneous(&self) -> Vec4<T>
    where
        T: Clone + One,
    {
        let [x, y, z] = self.data[0].clone();
        Vec4::new(x, y, z, T::one())
    }
}

impl<T> Vec4<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_data([[x, y, z, w]])
    }
}

fn cross<T, RT>(lhs: &Vec3<T>, rhs: &Vec3<RT>) -> Vec3<T>
where
    T: Clone + Mul<RT, Output = T> + Sub<T, Output = T>,
    RT: Clone,
{
    let [a1, a2, a3] = &lhs.data[0];
    let [b1, b2, b3] = &rhs.data[0];
    let product = |a: &T, b: &RT| a.clone() * b.clone();

    Vec3::new(
        product(a2, b3) - product(a3, b2),
        product(a3, b1) - product(a1, b3),
        product(a1, b2) - product(a2, b1),
    )
}

impl<'a, 'b, T, RT> Cross<&'a Vec3<RT>> for &'b Vec3<T>
where
    T: Clone + Mul<RT, Output = T> + Sub<T, Output = T>,
    RT: Clone,
{
    type Output = Vec3<T>;

    fn cross(self, rhs: &'a Vec3<RT>) -> Vec3<T> {
        cross(self, rhs)
    }
}

impl<T, RT> Cross<Vec3<RT>> for Vec3<T>
where
    T: Clone + Mul<RT, Output = T> + Sub<T, Output = T>,
    RT: Clone,
{
    type Output = Vec3<T>;

    fn cross(self, rhs: Vec3<RT>) -> Vec3<T> {
        cross(&self, &rhs)
    }
}
