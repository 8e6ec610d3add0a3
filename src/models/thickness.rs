//! Frame thickness values used for symbol margins and key borders.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-sided thickness (left, top, right, bottom).
///
/// Definition files write a thickness either as a single number (uniform on
/// all sides) or as a comma separated string: `"h,v"` or `"l,t,r,b"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThicknessRepr")]
pub struct Thickness {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Right edge
    pub right: f64,
    /// Bottom edge
    pub bottom: f64,
}

/// Raw on-disk forms of a thickness.
#[derive(Deserialize)]
#[serde(untagged)]
enum ThicknessRepr {
    Uniform(f64),
    Text(String),
}

impl TryFrom<ThicknessRepr> for Thickness {
    type Error = anyhow::Error;

    fn try_from(repr: ThicknessRepr) -> Result<Self> {
        match repr {
            ThicknessRepr::Uniform(value) => Ok(Self::uniform(value)),
            ThicknessRepr::Text(text) => Self::parse(&text),
        }
    }
}

impl Thickness {
    /// Creates a thickness from explicit edges.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a thickness with the same value on every edge.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Parses a thickness from its text form.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynkey::models::Thickness;
    ///
    /// assert_eq!(Thickness::parse("4").unwrap(), Thickness::uniform(4.0));
    /// assert_eq!(Thickness::parse("1,2").unwrap(), Thickness::new(1.0, 2.0, 1.0, 2.0));
    /// assert_eq!(Thickness::parse("1, 2, 3, 4").unwrap(), Thickness::new(1.0, 2.0, 3.0, 4.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not hold 1, 2 or 4 numbers.
    pub fn parse(text: &str) -> Result<Self> {
        let values = text
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .context(format!("Invalid thickness component '{part}'"))
            })
            .collect::<Result<Vec<f64>>>()?;

        match values.as_slice() {
            [all] => Ok(Self::uniform(*all)),
            [horizontal, vertical] => Ok(Self::new(*horizontal, *vertical, *horizontal, *vertical)),
            [left, top, right, bottom] => Ok(Self::new(*left, *top, *right, *bottom)),
            _ => anyhow::bail!(
                "Invalid thickness '{text}'. Expected 1, 2 or 4 comma separated numbers"
            ),
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.left, self.top, self.right, self.bottom
        )
    }
}
