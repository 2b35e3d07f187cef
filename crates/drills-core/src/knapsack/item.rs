use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DrillsError, Result};

/// Anything with a value and a weight can go in a knapsack
pub trait Valued {
    fn name(&self) -> &str;
    fn value(&self) -> f64;
    fn weight(&self) -> f64;
}

/// A plain knapsack item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub value: f64,
    pub weight: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, value: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }
}

impl Valued for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.name, self.value, self.weight)
    }
}

/// Sort by value
pub fn value<T: Valued>(item: &T) -> f64 {
    item.value()
}

/// Sort lightest first
pub fn weight_inverse<T: Valued>(item: &T) -> f64 {
    1.0 / item.weight()
}

/// Sort by value per unit weight
pub fn density<T: Valued>(item: &T) -> f64 {
    item.value() / item.weight()
}

/// Named sort keys, for callers that pick one at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Value,
    WeightInverse,
    #[default]
    Density,
}

impl SortKey {
    pub fn apply<T: Valued>(self, item: &T) -> f64 {
        match self {
            SortKey::Value => value(item),
            SortKey::WeightInverse => weight_inverse(item),
            SortKey::Density => density(item),
        }
    }
}

impl FromStr for SortKey {
    type Err = DrillsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "value" => Ok(SortKey::Value),
            "weight-inverse" => Ok(SortKey::WeightInverse),
            "density" => Ok(SortKey::Density),
            other => Err(DrillsError::invalid_value("sort key", other)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Value => write!(f, "value"),
            SortKey::WeightInverse => write!(f, "weight-inverse"),
            SortKey::Density => write!(f, "density"),
        }
    }
}

/// Reject items the greedy solvers cannot rank or split
pub(crate) fn validate<T: Valued>(items: &[T]) -> Result<()> {
    for item in items {
        if !item.value().is_finite() {
            return Err(DrillsError::invalid_value(
                format!("value for {}", item.name()),
                item.value(),
            ));
        }
        if !(item.weight().is_finite() && item.weight() > 0.0) {
            return Err(DrillsError::invalid_value(
                format!("weight for {}", item.name()),
                item.weight(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_functions() {
        let clock = Item::new("clock", 175.0, 10.0);
        assert_eq!(value(&clock), 175.0);
        assert_eq!(weight_inverse(&clock), 0.1);
        assert_eq!(density(&clock), 17.5);
        assert_eq!(SortKey::Density.apply(&clock), 17.5);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("weight_inverse".parse::<SortKey>().unwrap(), SortKey::WeightInverse);
        assert_eq!("Value".parse::<SortKey>().unwrap(), SortKey::Value);
        assert!("heaviest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_weight() {
        let items = vec![Item::new("feather", 1.0, 0.0)];
        assert!(matches!(
            validate(&items),
            Err(DrillsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Item::new("radio", 20.0, 4.0).to_string(), "<radio, 20, 4>");
    }
}
