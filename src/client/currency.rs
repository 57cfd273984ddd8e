//! Fixed-point currency amounts as reported by the node.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Number of hastings (smallest unit) in one siacoin.
pub const HASTINGS_PER_SIACOIN: f64 = 1e24;

/// An arbitrary-precision amount in the smallest currency unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Currency(BigUint);

impl Currency {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Exact multiplication, no rounding until [`Currency::to_f64`].
    pub fn mul_u64(&self, rhs: u64) -> Self {
        Self(&self.0 * rhs)
    }

    /// The raw amount as a float. Saturates to infinity for absurdly large values.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::INFINITY)
    }

    /// The amount in display units (siacoins).
    pub fn to_display(&self) -> f64 {
        self.to_f64() / HASTINGS_PER_SIACOIN
    }
}

impl From<u64> for Currency {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl FromStr for Currency {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

struct CurrencyVisitor;

impl<'de> Visitor<'de> for CurrencyVisitor {
    type Value = Currency;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer or a decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Currency, E> {
        Currency::from_str(v).map_err(|e| E::custom(format!("invalid currency '{}': {}", v, e)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Currency, E> {
        Ok(Currency::from(v))
    }
}

// The node encodes amounts as JSON strings since they overflow every JSON number type.
impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CurrencyVisitor)
    }
}
