#![allow(clippy::needless_range_loop)]

mod approx;
mod index;
mod mat3;
mod mat4;
mod matn;
mod matrix;
mod norm;
mod scalar;
mod unit;
mod vector;

pub use approx::{ApproxEq, EPSILON};
pub use matrix::Matrix;

pub mod prelude {
    pub use crate::approx::{ApproxEq, EPSILON};
    pub use crate::mat3::Mat3;
    pub use crate::mat4::Mat4;
    pub use crate::matn::MatN;
    pub use crate::matrix::Matrix;
    pub use crate::norm::Normed;
    pub use crate::scalar::{Cross, One, Sqrt, Zero};
    pub use crate::unit::Unit;
    pub use crate::vector::{Vec2, Vec3, Vec4};
}
