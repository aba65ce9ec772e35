use core::{iter::Sum, ops::{Add, Div, Index, Mul, Neg, Sub}};

use crate::*;

/// An element of three-dimensional real space, stored as its X, Y and Z coordinates.
///
/// The vector is a plain value: its components are fixed at construction and every operation
/// yields a new vector. The scalar type only needs the `core::ops` traits an operation uses, so a
/// unit-carrying newtype works as well as `f64`.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector3<S = f64>
{
    x: S,
    y: S,
    z: S,
}

impl<S> From<[S; 3]> for Vector3<S> {
    fn from([x, y, z]: [S; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<S> From<(S, S, S)> for Vector3<S> {
    fn from((x, y, z): (S, S, S)) -> Self {
        Self { x, y, z }
    }
}

impl<S> From<Vector3<S>> for [S; 3] {
    fn from(vector: Vector3<S>) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl<S> Vector3<S>
{
    pub const fn new(x: S, y: S, z: S) -> Self {
        Vector3 { x, y, z }
    }

    /// Component lookup with a signed index. Non-negative indices wrap around modulo 3, so index 3
    /// is X again; negative indices are an error.
    ///
    pub fn component_at(&self, index: isize) -> Result<&S, GeometryError> {
        match usize::try_from(index) {
            Ok(index) => Ok(&self[index]),
            Err(_) => {
                log::debug!("rejected negative component index {}", index);
                Err(GeometryError::NegativeIndex(index))
            }
        }
    }

    /// Applies `f` to every component, in X, Y, Z order.
    ///
    pub fn map<P>(self, mut f: impl FnMut(S) -> P) -> Vector3<P> {
        Vector3 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Multiplies the vector by a scalar written on the left, i.e. computes `factor * v[i]` for
    /// every component. Use `v * factor` for the right-hand form.
    ///
    pub fn scale<F, P>(factor: F, vector: Vector3<S>) -> Vector3<P>
    where
        F: Copy + Mul<S, Output = P>,
    {
        vector.map(|component| factor * component)
    }

    pub fn into_array(self) -> [S; 3] {
        self.into()
    }
}

impl<S: Copy> Vector3<S>
{
    #[inline]
    pub fn x(&self) -> S {
        self.x
    }

    #[inline]
    pub fn y(&self) -> S {
        self.y
    }

    #[inline]
    pub fn z(&self) -> S {
        self.z
    }

    /// Take the dot product of two vectors. The right-hand side may use a different scalar, in
    /// which case the result has the product type.
    ///
    pub fn dot<T, P>(&self, other: &Vector3<T>) -> P
    where
        T: Copy,
        S: Mul<T, Output = P>,
        P: Add<Output = P>,
    {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the right-handed cross product of two vectors.
    ///
    pub fn cross<T, P>(&self, other: &Vector3<T>) -> Vector3<P>
    where
        T: Copy,
        S: Mul<T, Output = P>,
        P: Sub<Output = P>,
    {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl<S: Real> Vector3<S>
{
    /// Returns a zero vector.
    ///
    pub const fn zero() -> Self {
        Vector3::new(S::ZERO, S::ZERO, S::ZERO)
    }

    pub const fn unit_x() -> Self {
        Vector3::new(S::ONE, S::ZERO, S::ZERO)
    }

    pub const fn unit_y() -> Self {
        Vector3::new(S::ZERO, S::ONE, S::ZERO)
    }

    pub const fn unit_z() -> Self {
        Vector3::new(S::ZERO, S::ZERO, S::ONE)
    }

    pub fn norm_squared(&self) -> S {
        self.dot(self)
    }

    /// Largest component in absolute value.
    ///
    fn max_abs_component(&self) -> S {
        let (x, y, z) = (self.x.abs(), self.y.abs(), self.z.abs());
        let xy = if x > y { x } else { y };
        if xy > z { xy } else { z }
    }

    /// Euclidean length of the vector. Components are scaled by the largest of them before
    /// squaring, so finite vectors near the ends of the float range neither overflow to infinity
    /// nor underflow to zero.
    ///
    pub fn norm(&self) -> S {
        let scale = self.max_abs_component();
        if scale == S::ZERO || !scale.is_finite() {
            return self.norm_squared().sqrt();
        }
        scale * (*self / scale).norm_squared().sqrt()
    }

    /// Scales the vector to unit length.
    ///
    pub fn normalize(&self) -> Result<Self, GeometryError> {
        let norm = self.norm();
        if norm == S::ZERO {
            log::debug!("cannot normalize a vector with zero norm");
            return Err(GeometryError::ZeroNorm);
        }
        let scale = self.max_abs_component();
        if !scale.is_finite() {
            return Ok(*self / norm);
        }
        let scaled = *self / scale;
        Ok(scaled / scaled.norm_squared().sqrt())
    }

    /// Removes from `other` its projection onto `self`, leaving a vector orthogonal to `self`.
    ///
    pub fn orthogonalize(&self, other: Self) -> Result<Self, GeometryError> {
        let unit = self.normalize()?;
        Ok(other - unit * unit.dot(&other))
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Self, tol: S) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }
}

impl<S> Index<usize> for Vector3<S>
{
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        &self[Axis::from_index(index)]
    }
}

impl<S> Index<Axis> for Vector3<S>
{
    type Output = S;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<S: Neg<Output = S>> Neg for Vector3<S>
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|component| -component)
    }
}

impl<S: Add<Output = S>> Add for Vector3<S>
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<S: Sub<Output = S>> Sub for Vector3<S>
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<S, T, P> Mul<T> for Vector3<S>
where
    T: Copy,
    S: Mul<T, Output = P>,
{
    type Output = Vector3<P>;

    fn mul(self, other: T) -> Self::Output {
        self.map(|component| component * other)
    }
}

impl<S, T, Q> Div<T> for Vector3<S>
where
    T: Copy,
    S: Div<T, Output = Q>,
{
    type Output = Vector3<Q>;

    fn div(self, other: T) -> Self::Output {
        self.map(|component| component / other)
    }
}

macro_rules! impl_scalar_first_mul {
    ($($scalar:ty),*) => {
        $(
            impl Mul<Vector3<$scalar>> for $scalar
            {
                type Output = Vector3<$scalar>;

                fn mul(self, other: Vector3<$scalar>) -> Self::Output {
                    Vector3::scale(self, other)
                }
            }
        )*
    };
}

impl_scalar_first_mul!(f32, f64);

impl<S: Default + Add<Output = S>> Sum for Vector3<S>
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |sum, vector| sum + vector)
    }
}
