//! 2D vector type for directions and offsets.

use super::number::ExactNumber;
use num_traits::Zero;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector representing a direction or offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: ExactNumber,
    pub y: ExactNumber,
}

impl Vec2 {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: ExactNumber, y: ExactNumber) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: ExactNumber::zero(),
            y: ExactNumber::zero(),
        }
    }

    /// Returns true if both components are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> ExactNumber {
        &self.x * &other.x + &self.y * &other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(&self, other: &Self) -> ExactNumber {
        &self.x * &other.y - &self.y * &other.x
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(&self) -> ExactNumber {
        self.dot(self)
    }

    /// Returns the vector rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self {
            x: -&self.y,
            y: self.x.clone(),
        }
    }
}

impl Add for &Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: &Vec2) -> Vec2 {
        Vec2 {
            x: &self.x + &other.x,
            y: &self.y + &other.y,
        }
    }
}

impl Sub for &Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: &Vec2) -> Vec2 {
        Vec2 {
            x: &self.x - &other.x,
            y: &self.y - &other.y,
        }
    }
}

impl Mul<&ExactNumber> for &Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, scalar: &ExactNumber) -> Vec2 {
        Vec2 {
            x: &self.x * scalar,
            y: &self.y * scalar,
        }
    }
}

impl Neg for &Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -&self.x,
            y: -&self.y,
        }
    }
}
