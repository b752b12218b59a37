use std::{
    error::Error,
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

use super::{Atan2, Cos, IsNeg, One, Sin, Sqr, Sqrt, Zero};

/// Complex number `re + im*i`.
///
/// Operators (`+`, `-`, `*`, `/`, unary `-`) never touch their operands and
/// return a new value. The `*Assign` operators update the left operand in
/// place. The named methods belong to one of the two sets: [`Complex::plus`]
/// and [`Complex::times`] update in place, everything else is pure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex<T> {
    re: T,
    im: T,
}

impl<T> From<(T, T)> for Complex<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            re: value.0,
            im: value.1,
        }
    }
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn re(&self) -> T
    where
        T: Copy,
    {
        self.re
    }

    pub fn im(&self) -> T
    where
        T: Copy,
    {
        self.im
    }

    pub fn from_polar<U>(len: T, radians: U) -> Self
    where
        T: Copy + Mul<U, Output = T>,
        U: Copy + Cos<Output = U> + Sin<Output = U>,
    {
        Self {
            re: len * radians.cos(),
            im: len * radians.sin(),
        }
    }

    /// Adds `rhs` to `self` in place and returns `self` so calls can be chained.
    pub fn plus(&mut self, rhs: Self) -> &mut Self
    where
        T: AddAssign,
    {
        *self += rhs;
        self
    }

    /// Multiplies `self` by `rhs` in place and returns `self` so calls can be chained.
    pub fn times(&mut self, rhs: Self) -> &mut Self
    where
        T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
    {
        *self *= rhs;
        self
    }

    pub fn minus(&self, rhs: Self) -> Self
    where
        T: Copy + Sub<Output = T>,
    {
        *self - rhs
    }

    /// Divides by `rhs` without checking it. A zero divisor yields NaN or
    /// infinite components, the same way `f64` division does.
    pub fn divide(&self, rhs: Self) -> Self
    where
        T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
    {
        *self / rhs
    }

    pub fn checked_div(&self, rhs: Self) -> Result<Self, ZeroDivisorError<T>>
    where
        T: Copy
            + Zero
            + PartialEq
            + Add<Output = T>
            + Sub<Output = T>
            + Mul<Output = T>
            + Div<Output = T>,
    {
        if rhs.re * rhs.re + rhs.im * rhs.im == T::zero() {
            Err(ZeroDivisorError { dividend: *self })
        } else {
            Ok(*self / rhs)
        }
    }

    pub fn conjugate(&self) -> Self
    where
        T: Copy + Neg<Output = T>,
    {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared modulus `re^2 + im^2`.
    pub fn length_sq(&self) -> <<T as Sqr>::Output as Add>::Output
    where
        T: Copy + Sqr,
        <T as Sqr>::Output: Add,
    {
        self.re.sqr() + self.im.sqr()
    }

    pub fn len(&self) -> <<<T as Sqr>::Output as Add>::Output as Sqrt>::Output
    where
        T: Copy + Sqr,
        <T as Sqr>::Output: Add,
        <<T as Sqr>::Output as Add>::Output: Sqrt,
    {
        self.length_sq().sqrt()
    }

    /// Result in range -PI..PI
    pub fn arg(&self) -> <T as Atan2>::Output
    where
        T: Copy + Atan2,
    {
        self.im.atan2(self.re)
    }
}

impl<T> Display for Complex<T>
where
    T: Copy + Display + IsNeg + Neg<Output = T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im.is_neg() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl<T: Zero> Zero for Complex<T> {
    fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
}

impl<T: Zero + One> One for Complex<T> {
    fn one() -> Self {
        Self {
            re: T::one(),
            im: T::zero(),
        }
    }
}

impl<T> Add for Complex<T>
where
    T: Add<Output = T>,
{
    type Output = Complex<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T> Sub for Complex<T>
where
    T: Sub<Output = T>,
{
    type Output = Complex<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T> Mul for Complex<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    type Output = Complex<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Output {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl<T> Div for Complex<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    type Output = Complex<T>;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Self::Output {
            re: (self.re * rhs.re + self.im * rhs.im) / denom,
            im: (self.im * rhs.re - self.re * rhs.im) / denom,
        }
    }
}

impl<T> Neg for Complex<T>
where
    T: Neg<Output = T>,
{
    type Output = Complex<T>;

    fn neg(self) -> Self::Output {
        Self::Output {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T> AddAssign for Complex<T>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<T> SubAssign for Complex<T>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl<T> MulAssign for Complex<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl<T> DivAssign for Complex<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs
    }
}

#[derive(Debug)]
pub struct ZeroDivisorError<T> {
    dividend: Complex<T>,
}

impl<T> ZeroDivisorError<T> {
    pub fn dividend(self) -> Complex<T> {
        self.dividend
    }
}

impl<T> Display for ZeroDivisorError<T>
where
    T: Copy + Display + IsNeg + Neg<Output = T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "can not divide {} by zero", self.dividend)
    }
}

impl<T> Error for ZeroDivisorError<T> where T: Copy + Debug + Display + IsNeg + Neg<Output = T> {}
