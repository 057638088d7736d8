pub trait Zero {
    fn zero() -> Self;
}

pub trait One {
    fn one() -> Self;
}

pub trait Sqrt {
    type Output;

    fn sqrt(&self) -> Self::Output;
}

pub trait Cross<Rhs = Self> {
    type Output;

    fn cross(self, rhs: Rhs) -> Self::Output;
}

macro_rules! impl_nums_zero_one {
    ( $( $num:ty )+ ) => {
        $(
            impl Zero for $num {
                fn zero() -> Self {
                    0 as $num
                }
            }

            impl One for $num {
                fn one() -> Self {
                    1 as $num
                }
            }
        )+
    };
}

macro_rules! impl_float_sqrt {
    ( $( $float:ty )+ ) => {
        $(
            impl Sqrt for $float {
                type Output = Self;

                fn sqrt(&self) -> Self::Output {
                    (*self).sqrt()
                }
            }
        )+
    };
}

impl_nums_zero_one! { u8 u16 u32 u64 u128 usize }
impl_nums_zero_one! { i8 i16 i32 i64 i128 isize }
impl_nums_zero_one! { f32 f64 }

// NaN propagates
impl_float_sqrt! { f32 f64 }
