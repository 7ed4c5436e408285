//! Inclusive integer ranges used by tag priorities and catalog entries
//!
//! - `Amount`: a configured `[n]` or `[min, max]` list (weekly/daily amounts)
//! - `DaySpan`: a catalog `days` cell, either `"3"` or `"2-4"`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PlanError, Result};

/// A configured amount: one fixed value or an inclusive min/max pair.
///
/// Serialized as a JSON list (`[3]` or `[1, 2]`). A bare integer or a
/// `"min-max"` string is accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AmountRepr", into = "Vec<u32>")]
pub struct Amount {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    One(u32),
    List(Vec<u32>),
    Text(String),
}

impl TryFrom<AmountRepr> for Amount {
    type Error = PlanError;

    fn try_from(repr: AmountRepr) -> Result<Self> {
        match repr {
            AmountRepr::One(n) => Ok(Self::fixed(n)),
            AmountRepr::List(values) => Self::from_values(&values),
            AmountRepr::Text(text) => {
                let span: DaySpan = text.parse()?;
                Self::new(span.min(), span.max())
            }
        }
    }
}

impl From<Amount> for Vec<u32> {
    fn from(amount: Amount) -> Self {
        amount.choices()
    }
}

impl Amount {
    /// Create an amount with an inclusive range.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(PlanError::InvalidAmount(format!("min {} exceeds max {}", min, max)));
        }
        Ok(Self { min, max })
    }

    /// Create a single-valued amount (min == max).
    pub fn fixed(n: u32) -> Self {
        Self { min: n, max: n }
    }

    /// Build from the configured list form.
    pub fn from_values(values: &[u32]) -> Result<Self> {
        match values {
            [n] => Ok(Self::fixed(*n)),
            [min, max] => Self::new(*min, *max),
            _ => Err(PlanError::InvalidAmount(format!(
                "expected 1 or 2 values, got {}",
                values.len()
            ))),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// The discrete values the configuration lists; a draw from the "set"
    /// picks one of these rather than anything in between.
    pub fn choices(&self) -> Vec<u32> {
        if self.is_fixed() { vec![self.min] } else { vec![self.min, self.max] }
    }

    /// Same amount with both ends capped.
    pub fn clamped(&self, cap: u32) -> Self {
        Self {
            min: self.min.min(cap),
            max: self.max.min(cap),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// How many distinct days one pick of a catalog task should occupy.
///
/// Both ends are at least one day; deserialization goes through `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DaySpanRepr", into = "DaySpanRepr")]
pub struct DaySpan {
    min: u32,
    max: u32,
}

#[derive(Serialize, Deserialize)]
struct DaySpanRepr {
    min: u32,
    max: u32,
}

impl TryFrom<DaySpanRepr> for DaySpan {
    type Error = PlanError;

    fn try_from(repr: DaySpanRepr) -> Result<Self> {
        Self::new(repr.min, repr.max)
    }
}

impl From<DaySpan> for DaySpanRepr {
    fn from(span: DaySpan) -> Self {
        Self {
            min: span.min,
            max: span.max,
        }
    }
}

impl DaySpan {
    /// Inclusive span; both ends are at least one day.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min == 0 {
            return Err(PlanError::InvalidAmount("day span must be at least 1".to_string()));
        }
        if min > max {
            return Err(PlanError::InvalidAmount(format!("min {} exceeds max {}", min, max)));
        }
        Ok(Self { min, max })
    }

    pub fn single(days: u32) -> Result<Self> {
        Self::new(days, days)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for DaySpan {
    fn default() -> Self {
        Self { min: 1, max: 1 }
    }
}

impl FromStr for DaySpan {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| PlanError::InvalidAmount(format!("not a day count: '{}'", s)))
        };

        match s.split_once('-') {
            Some((min, max)) => Self::new(parse(min)?, parse(max)?),
            None => Self::single(parse(s)?),
        }
    }
}

impl fmt::Display for DaySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_from_single_value() {
        let amount: Amount = serde_json::from_str("[3]").unwrap();
        assert_eq!(amount.min(), 3);
        assert_eq!(amount.max(), 3);
        assert!(amount.is_fixed());
        assert_eq!(amount.choices(), vec![3]);
    }

    #[test]
    fn test_amount_from_pair() {
        let amount: Amount = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(amount.min(), 1);
        assert_eq!(amount.max(), 2);
        assert_eq!(amount.choices(), vec![1, 2]);
    }

    #[test]
    fn test_amount_accepts_bare_integer_and_string() {
        let amount: Amount = serde_json::from_str("4").unwrap();
        assert_eq!(amount, Amount::fixed(4));

        let amount: Amount = serde_json::from_str("\"2-5\"").unwrap();
        assert_eq!(amount, Amount::new(2, 5).unwrap());
    }

    #[test]
    fn test_amount_rejects_three_values() {
        let result = serde_json::from_str::<Amount>("[1, 2, 3]");
        assert!(result.is_err());
    }

    #[test]
    fn test_amount_rejects_inverted_pair() {
        assert!(serde_json::from_str::<Amount>("[5, 2]").is_err());
        assert!(Amount::new(5, 2).is_err());
    }

    #[test]
    fn test_amount_serializes_as_list() {
        let json = serde_json::to_string(&Amount::new(1, 2).unwrap()).unwrap();
        assert_eq!(json, "[1,2]");
        let json = serde_json::to_string(&Amount::fixed(3)).unwrap();
        assert_eq!(json, "[3]");
    }

    #[test]
    fn test_amount_clamped() {
        let amount = Amount::new(5, 9).unwrap().clamped(7);
        assert_eq!(amount.min(), 5);
        assert_eq!(amount.max(), 7);
    }

    #[test]
    fn test_day_span_parse_single() {
        let span: DaySpan = "3".parse().unwrap();
        assert_eq!(span, DaySpan::single(3).unwrap());
        assert_eq!(span.to_string(), "3");
    }

    #[test]
    fn test_day_span_parse_range() {
        let span: DaySpan = " 2-4 ".parse().unwrap();
        assert_eq!((span.min(), span.max()), (2, 4));
        assert_eq!(span.to_string(), "2-4");
    }

    #[test]
    fn test_day_span_rejects_garbage() {
        assert!("".parse::<DaySpan>().is_err());
        assert!("two".parse::<DaySpan>().is_err());
        assert!("4-2".parse::<DaySpan>().is_err());
        assert!("0".parse::<DaySpan>().is_err());
    }

    #[test]
    fn test_day_span_deserialize_validates() {
        let span: DaySpan = serde_json::from_str(r#"{"min":2,"max":4}"#).unwrap();
        assert_eq!(span, DaySpan::new(2, 4).unwrap());
        assert_eq!(serde_json::to_string(&span).unwrap(), r#"{"min":2,"max":4}"#);

        assert!(serde_json::from_str::<DaySpan>(r#"{"min":0,"max":0}"#).is_err());
        assert!(serde_json::from_str::<DaySpan>(r#"{"min":3,"max":1}"#).is_err());
    }
}
