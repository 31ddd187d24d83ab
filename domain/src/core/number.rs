//! Numeric setting values.
//!
//! Range bounds, steps and runtime values may be integers or floats. Integer
//! arithmetic stays exact; anything involving a float falls back to `f64`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// An integer or floating point number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Read a JSON number. Booleans, strings and other types are not numbers.
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Number(n) = value else {
            return None;
        };
        if let Some(i) = n.as_i64() {
            Some(Self::Int(i))
        } else {
            n.as_f64().map(Self::Float)
        }
    }

    pub fn to_json(self) -> Value {
        match self {
            Self::Int(i) => Value::from(i),
            Self::Float(f) => Value::from(f),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Whole number, whether stored as an integer or as an integral float
    pub fn is_integral(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(f) => f.is_finite() && f.fract() == 0.0,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(i) => i < 0,
            Self::Float(f) => f < 0.0,
        }
    }

    /// Remainder of `(self - origin) / step`.
    ///
    /// Zero means `self` lies on the grid of `step`-sized increments anchored at
    /// `origin`. A zero `step` yields `NaN` for floats and is the caller's concern.
    pub fn offset_remainder(self, origin: Number, step: Number) -> Number {
        match (self, origin, step) {
            (Self::Int(v), Self::Int(o), Self::Int(s)) if s != 0 => {
                let rem = (i128::from(v) - i128::from(o)) % i128::from(s);
                // |rem| < |s|, so it always fits back into i64
                Self::Int(rem as i64)
            }
            _ => Self::Float((self.as_f64() - origin.as_f64()) % step.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}
