// SPDX-License-Identifier: MPL-2.0
//! Sexagesimal (degrees, minutes, seconds) angles.
//!
//! An [`Angle`] is an unsigned magnitude stored as its DMS components, most
//! significant first. Comparison is lexicographic over the components and
//! subtraction borrows in base 60, so two angles are only comparable when they
//! have the same number of components.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use smallvec::{smallvec, SmallVec};

use crate::domain::error::GeoError;

// =============================================================================
// Bounds
// =============================================================================

/// Base of the minutes and seconds positions.
pub const RADIX: f64 = 60.0;

/// Number of components of a canonical (degrees, minutes, seconds) angle.
pub const CANONICAL_ARITY: usize = 3;

/// Largest accepted degrees component.
pub const MAX_DEGREES: f64 = 180.0;

type Components = SmallVec<[f64; CANONICAL_ARITY]>;

// =============================================================================
// Angle
// =============================================================================

/// An angular magnitude in sexagesimal form.
///
/// Every component is finite and non-negative, every component after the
/// degrees is below 60, and degrees never exceed [`MAX_DEGREES`]. Only the
/// last component may be fractional. The hemisphere is not part of the value.
///
/// # Example
///
/// ```
/// use photo_extent::domain::geo::Angle;
///
/// let a = Angle::new(2.0, 0.0, 0.0).unwrap();
/// let b = Angle::new(1.0, 59.0, 59.0).unwrap();
/// assert_eq!(a.absolute_difference(&b).unwrap(), Angle::new(0.0, 0.0, 1.0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Angle(Components);

impl Angle {
    /// Creates a canonical (degrees, minutes, seconds) angle.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::MalformedAngle`] if a component is out of range.
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Result<Self, GeoError> {
        Self::from_components(&[degrees, minutes, seconds])
    }

    /// Creates an angle from the raw component list an ingestion source read.
    ///
    /// Fractional degrees or minutes are carried into the next position, so
    /// `(1.5, 0, 0)` becomes 1°30'0" and `(2, 21.12, 0)` becomes 2°21'7.2".
    ///
    /// Lists of any non-empty length are accepted so that a source which
    /// produced too few or too many components can still be represented;
    /// arithmetic against a canonical angle then fails with
    /// [`GeoError::ArityMismatch`].
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::MalformedAngle`] for an empty list, a non-finite or
    /// negative component, a minutes/seconds component of 60 or more, or
    /// degrees above [`MAX_DEGREES`].
    pub fn from_components(components: &[f64]) -> Result<Self, GeoError> {
        if components.is_empty() {
            return Err(GeoError::MalformedAngle(
                "an angle needs at least one component".into(),
            ));
        }

        for (position, &value) in components.iter().enumerate() {
            if !value.is_finite() {
                return Err(GeoError::MalformedAngle(format!(
                    "component {position} is not a finite number"
                )));
            }
            if value < 0.0 {
                return Err(GeoError::MalformedAngle(format!(
                    "component {position} is negative ({value})"
                )));
            }
            if position > 0 && value >= RADIX {
                return Err(GeoError::MalformedAngle(format!(
                    "component {position} must be below 60 ({value})"
                )));
            }
        }

        let mut normalized = Components::from_slice(components);
        normalize(&mut normalized);

        let degrees = normalized[0];
        if degrees > MAX_DEGREES {
            return Err(GeoError::MalformedAngle(format!(
                "degrees must not exceed {MAX_DEGREES} ({degrees})"
            )));
        }

        Ok(Self(normalized))
    }

    /// The zero angle (0°0'0").
    #[must_use]
    pub fn zero() -> Self {
        Self::zeroed(CANONICAL_ARITY)
    }

    fn zeroed(arity: usize) -> Self {
        Self(smallvec![0.0; arity])
    }

    /// Returns the components, most significant first.
    #[must_use]
    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of components.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Returns whether every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == 0.0)
    }

    /// Returns the (degrees, minutes, seconds) triple.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ArityMismatch`] unless the angle has exactly three
    /// components.
    pub fn dms(&self) -> Result<(f64, f64, f64), GeoError> {
        match self.0.as_slice() {
            [degrees, minutes, seconds] => Ok((*degrees, *minutes, *seconds)),
            other => Err(GeoError::ArityMismatch {
                left: other.len(),
                right: CANONICAL_ARITY,
            }),
        }
    }

    /// Converts to decimal degrees (`deg + min/60 + sec/3600`).
    #[must_use]
    pub fn to_decimal_degrees(&self) -> f64 {
        let mut scale = 1.0;
        let mut total = 0.0;
        for component in &self.0 {
            total += component / scale;
            scale *= RADIX;
        }
        total
    }

    /// Converts to radians through the decimal-degree value.
    #[must_use]
    pub fn to_radians(&self) -> f64 {
        self.to_decimal_degrees() * std::f64::consts::PI / 180.0
    }

    /// Compares two angles lexicographically over their components.
    ///
    /// The first differing component decides; equal angles compare
    /// [`Ordering::Equal`].
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ArityMismatch`] if the component counts differ.
    pub fn compare(&self, other: &Angle) -> Result<Ordering, GeoError> {
        self.ensure_same_arity(other)?;

        for (left, right) in self.0.iter().zip(other.0.iter()) {
            if left != right {
                return Ok(if left > right {
                    Ordering::Greater
                } else {
                    Ordering::Less
                });
            }
        }
        Ok(Ordering::Equal)
    }

    /// Subtracts `subtrahend` from `self` with base-60 borrowing.
    ///
    /// Components are processed from least to most significant. A negative
    /// position gains 60 and borrows one unit from the next more significant
    /// position of a working copy of `self`; a position holding less than one
    /// unit wraps by 59 and passes the borrow further up.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ArityMismatch`] if the component counts differ and
    /// [`GeoError::Underflow`] if the borrow chain runs past the degrees, i.e.
    /// when `subtrahend` is larger than `self`.
    pub fn checked_sub(&self, subtrahend: &Angle) -> Result<Angle, GeoError> {
        self.ensure_same_arity(subtrahend)?;

        let mut minuend = self.0.clone();
        let mut result: Components = smallvec![0.0; minuend.len()];

        for position in (0..minuend.len()).rev() {
            let mut difference = minuend[position] - subtrahend.0[position];
            if difference < 0.0 {
                if position == 0 {
                    return Err(GeoError::Underflow);
                }
                difference += RADIX;
                borrow(&mut minuend, position - 1)?;
            }
            result[position] = difference;
        }

        Ok(Angle(result))
    }

    /// Returns the unsigned span between two angles.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ArityMismatch`] if the component counts differ.
    pub fn absolute_difference(&self, other: &Angle) -> Result<Angle, GeoError> {
        match self.compare(other)? {
            Ordering::Equal => Ok(Self::zeroed(self.arity())),
            Ordering::Greater => self.checked_sub(other),
            Ordering::Less => other.checked_sub(self),
        }
    }

    fn ensure_same_arity(&self, other: &Angle) -> Result<(), GeoError> {
        if self.arity() == other.arity() {
            Ok(())
        } else {
            Err(GeoError::ArityMismatch {
                left: self.arity(),
                right: other.arity(),
            })
        }
    }
}

/// Moves the fractional part of every component but the last into the next
/// position, so that only the least significant component carries a fraction
/// and lexicographic order matches numeric order.
fn normalize(components: &mut [f64]) {
    let last = components.len() - 1;
    if components[..last].iter().all(|c| c.fract() == 0.0) {
        return;
    }

    for position in 0..last {
        let whole = components[position].trunc();
        let fraction = components[position] - whole;
        components[position] = whole;
        components[position + 1] += fraction * RADIX;
    }

    // Carry positions pushed to 60 or beyond back up toward the degrees.
    for position in (1..=last).rev() {
        if components[position] >= RADIX {
            let carry = (components[position] / RADIX).floor();
            components[position] -= carry * RADIX;
            components[position - 1] += carry;
        }
    }
}

/// Takes one unit from `components[position]`, wrapping through 59 toward
/// the degrees while a position holds less than one unit.
fn borrow(components: &mut [f64], mut position: usize) -> Result<(), GeoError> {
    loop {
        if components[position] >= 1.0 {
            components[position] -= 1.0;
            return Ok(());
        }
        if position == 0 {
            return Err(GeoError::Underflow);
        }
        components[position] += RADIX - 1.0;
        position -= 1;
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MARKS: [&str; CANONICAL_ARITY] = ["°", "'", "\""];

        for (position, component) in self.0.iter().enumerate() {
            match MARKS.get(position) {
                Some(mark) => write!(f, "{component}{mark}")?,
                None => write!(f, ":{component}")?,
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
