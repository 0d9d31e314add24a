use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog value that may be stored as an integer, a float, or text.
///
/// Catalog files are hand-maintained, so numeric attributes such as BPM or
/// version occasionally show up as strings. Comparisons read them through
/// [`Scalar::as_int`] / [`Scalar::as_float`] and fall back to plain equality
/// when neither works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Integer view: integers as-is, floats truncated toward zero, text parsed
    /// after trimming. Floats outside the `i64` range have no integer view.
    pub fn as_int(&self) -> Option<i64> {
        // 2^63 is exact as f64; i64::MIN is exactly -2^63
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(v) => {
                let v = v.trunc();
                (v >= -LIMIT && v < LIMIT).then_some(v as i64)
            }
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Floating-point view. NaN is treated as non-numeric.
    pub fn as_float(&self) -> Option<f64> {
        let value = match self {
            Self::Integer(v) => *v as f64,
            Self::Float(v) => *v,
            Self::Text(s) => s.trim().parse().ok()?,
        };
        (!value.is_nan()).then_some(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
