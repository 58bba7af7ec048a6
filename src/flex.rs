//! Tolerant numeric values for controller telemetry.
//!
//! The controller API is loose about numeric encoding: the same field may
//! arrive as a JSON number on one firmware and as a numeric string on
//! another. [`FlexNum`] normalizes both forms to an `f64` while keeping the
//! original text rendering, which the exporters reuse for identity labels
//! (byte counts, uptime, channel numbers).

use serde::{Deserialize, Deserializer};

/// A numeric telemetry value that may arrive as a number or as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexNum {
    /// Canonical numeric magnitude.
    pub val: f64,
    /// Original text rendering, unchanged when the source sent a string.
    pub txt: String,
    /// Whether a parseable value was actually present. A malformed string
    /// falls back to zero with `present == false`, so callers can tell
    /// "zero" from "absent" when it matters.
    pub present: bool,
}

impl FlexNum {
    /// Build from a plain number.
    pub fn from_num(val: f64) -> Self {
        Self {
            val,
            txt: render(val),
            present: true,
        }
    }

    /// Build from text, falling back to a zero value when the text does not
    /// parse as a number.
    pub fn from_text(txt: String) -> Self {
        match txt.trim().parse::<f64>() {
            Ok(val) => Self {
                val,
                txt,
                present: true,
            },
            Err(_) => Self {
                val: 0.0,
                txt,
                present: false,
            },
        }
    }
}

impl From<f64> for FlexNum {
    fn from(val: f64) -> Self {
        Self::from_num(val)
    }
}

impl From<u64> for FlexNum {
    fn from(val: u64) -> Self {
        Self::from_num(val as f64)
    }
}

impl From<&str> for FlexNum {
    fn from(txt: &str) -> Self {
        Self::from_text(txt.to_string())
    }
}

impl<'de> Deserialize<'de> for FlexNum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(v) => FlexNum::from_num(v),
            Raw::Text(s) => FlexNum::from_text(s),
        })
    }
}

/// Render a float the way the controller prints integers: no trailing `.0`.
fn render(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        v.to_string()
    }
}
