//! Fixed-size vectors and square matrices used as parameter payloads

use std::fmt;
use std::ops::Index;

/// Element type of a vector or matrix.
pub trait Scalar:
    Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Collapse values indistinguishable from zero (including `-0.0`) to zero.
    fn maybe_zero(self) -> Self;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn maybe_zero(self) -> Self {
        if self.abs() < 1.0e-12 {
            0.0
        } else {
            self
        }
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn maybe_zero(self) -> Self {
        if self.abs() < 1.0e-6 {
            0.0
        } else {
            self
        }
    }
}

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn maybe_zero(self) -> Self {
        self
    }
}

fn write_components<T: Scalar>(out: &mut dyn fmt::Write, values: &[T]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_str(" ")?;
        }
        write!(out, "{}", value.maybe_zero())?;
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// Vectors
// ═══════════════════════════════════════════════════════════════════

/// An `N`-component vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VecBase<T: Scalar, const N: usize>(pub [T; N]);

impl<T: Scalar, const N: usize> VecBase<T, N> {
    /// Create a vector from its components
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    /// Create a vector with every component set to `value`
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// The components as an array
    pub fn components(&self) -> &[T; N] {
        &self.0
    }

    /// Get a component by index
    pub fn get(&self, index: usize) -> Option<T> {
        self.0.get(index).copied()
    }

    /// Number of components
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the vector has no components
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Write the components separated by spaces
    pub fn output(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write_components(out, &self.0)
    }
}

impl<T: Scalar> VecBase<T, 2> {
    /// Create a 2-component vector
    pub const fn xy(x: T, y: T) -> Self {
        Self([x, y])
    }
}

impl<T: Scalar> VecBase<T, 3> {
    /// Create a 3-component vector
    pub const fn xyz(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }
}

impl<T: Scalar> VecBase<T, 4> {
    /// Create a 4-component vector
    pub const fn xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }
}

impl<T: Scalar, const N: usize> Default for VecBase<T, N> {
    fn default() -> Self {
        Self::splat(T::ZERO)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for VecBase<T, N> {
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for VecBase<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T: Scalar, const N: usize> fmt::Display for VecBase<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.output(f)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Matrices
// ═══════════════════════════════════════════════════════════════════

/// An `N`×`N` matrix stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T: Scalar, const N: usize>(pub [[T; N]; N]);

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Create a matrix from its rows
    pub const fn new(rows: [[T; N]; N]) -> Self {
        Self(rows)
    }

    /// The all-zero matrix
    pub fn zero() -> Self {
        Self([[T::ZERO; N]; N])
    }

    /// The identity matrix
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.0[i][i] = T::ONE;
        }
        m
    }

    /// The rows as arrays
    pub fn rows(&self) -> &[[T; N]; N] {
        &self.0
    }

    /// Get a single cell
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Write the matrix as bracketed rows: `[ a b ] [ c d ]`
    pub fn output(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                out.write_str(" ")?;
            }
            out.write_str("[ ")?;
            write_components(out, row)?;
            out.write_str(" ]")?;
        }
        Ok(())
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    fn from(rows: [[T; N]; N]) -> Self {
        Self(rows)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.output(f)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Catalogue aliases
// ═══════════════════════════════════════════════════════════════════

/// 2-component f64 vector
pub type LVecBase2d = VecBase<f64, 2>;
/// 2-component f32 vector
pub type LVecBase2f = VecBase<f32, 2>;
/// 2-component i32 vector
pub type LVecBase2i = VecBase<i32, 2>;
/// 3-component f64 vector
pub type LVecBase3d = VecBase<f64, 3>;
/// 3-component f32 vector
pub type LVecBase3f = VecBase<f32, 3>;
/// 3-component i32 vector
pub type LVecBase3i = VecBase<i32, 3>;
/// 4-component f64 vector
pub type LVecBase4d = VecBase<f64, 4>;
/// 4-component f32 vector
pub type LVecBase4f = VecBase<f32, 4>;
/// 4-component i32 vector
pub type LVecBase4i = VecBase<i32, 4>;
/// 3×3 f64 matrix
pub type LMatrix3d = Matrix<f64, 3>;
/// 3×3 f32 matrix
pub type LMatrix3f = Matrix<f32, 3>;
/// 4×4 f64 matrix
pub type LMatrix4d = Matrix<f64, 4>;
/// 4×4 f32 matrix
pub type LMatrix4f = Matrix<f32, 4>;
