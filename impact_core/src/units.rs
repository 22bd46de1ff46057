//! # Unit Types
//!
//! Type-safe wrappers for the quantities an estimate deals in. They are plain
//! `f64` newtypes that serialize as bare numbers, so JSON output stays clean.
//!
//! - Area: square meters (m²)
//! - Emissions: kilograms of carbon-dioxide equivalent (kg CO₂e)
//! - Distance: kilometers driven (km)
//!
//! ## Example
//!
//! ```rust
//! use impact_core::units::{KgCo2e, Kilometers};
//!
//! let emissions = KgCo2e(10.0);
//! let driven: Kilometers = emissions.into();
//! assert_eq!(driven.0, 36.0);
//! ```

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Kilometers driven per kg CO₂e, used for the illustrative distance figure.
pub const KM_PER_KG_CO2E: f64 = 3.6;

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Mass of carbon-dioxide equivalent in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgCo2e(pub f64);

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

impl From<KgCo2e> for Kilometers {
    fn from(kg: KgCo2e) -> Self {
        Kilometers(kg.0 * KM_PER_KG_CO2E)
    }
}

// Emission factor (kg CO₂e per m²) times area gives emissions
impl Mul<f64> for SquareMeters {
    type Output = KgCo2e;
    fn mul(self, factor: f64) -> KgCo2e {
        KgCo2e(self.0 * factor)
    }
}

impl Add for KgCo2e {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        KgCo2e(self.0 + rhs.0)
    }
}

impl Sub for KgCo2e {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        KgCo2e(self.0 - rhs.0)
    }
}

impl Mul<f64> for KgCo2e {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        KgCo2e(self.0 * rhs)
    }
}

impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} m²", p, self.0),
            None => write!(f, "{} m²", self.0),
        }
    }
}

impl fmt::Display for KgCo2e {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} kg CO₂e", p, self.0),
            None => write!(f, "{} kg CO₂e", self.0),
        }
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} km", p, self.0),
            None => write!(f, "{} km", self.0),
        }
    }
}
