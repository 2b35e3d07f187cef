use serde::Serialize;
use tracing::debug;

use crate::error::{DrillsError, Result};
use crate::knapsack::item::{validate, Valued};

/// An item placed in the knapsack, possibly split
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection<T> {
    pub item: T,
    /// Share of the item carried, in (0, 1]
    pub fraction: f64,
}

/// Result of a fractional knapsack fill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Knapsack<T> {
    pub selections: Vec<Selection<T>>,
    pub total_value: f64,
    pub total_weight: f64,
}

/// Sort items by `key` (highest first, ties keep input order) and pack them.
///
/// Whole items are taken while they fit. The first item that does not fit
/// is split so the knapsack ends exactly at `max_weight`, and packing stops.
#[tracing::instrument(skip(items, key), fields(items = items.len()))]
pub fn greedy_fractional<T, F>(items: &[T], max_weight: f64, key: F) -> Result<Knapsack<T>>
where
    T: Valued + Clone,
    F: Fn(&T) -> f64,
{
    if !(max_weight.is_finite() && max_weight >= 0.0) {
        return Err(DrillsError::invalid_value("max weight", max_weight));
    }
    validate(items)?;

    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));

    let mut selections = Vec::new();
    let mut total_value = 0.0;
    let mut total_weight = 0.0;

    for item in sorted {
        if total_weight >= max_weight {
            break;
        }
        if total_weight + item.weight() <= max_weight {
            total_value += item.value();
            total_weight += item.weight();
            selections.push(Selection {
                item: item.clone(),
                fraction: 1.0,
            });
        } else {
            let fraction = (max_weight - total_weight) / item.weight();
            total_value += fraction * item.value();
            total_weight = max_weight;
            selections.push(Selection {
                item: item.clone(),
                fraction,
            });
        }
    }

    debug!(selected = selections.len(), total_value, "greedy_fractional");

    Ok(Knapsack {
        selections,
        total_value,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::{density, value, weight_inverse, Item, SortKey};

    fn household() -> Vec<Item> {
        vec![
            Item::new("clock", 175.0, 10.0),
            Item::new("painting", 90.0, 9.0),
            Item::new("radio", 20.0, 4.0),
        ]
    }

    #[test]
    fn test_density_splits_first_item() {
        let sack = greedy_fractional(&household(), 5.0, density).unwrap();
        assert_eq!(sack.total_value, 87.5);
        assert_eq!(sack.selections.len(), 1);
        assert_eq!(sack.selections[0].item.name, "clock");
        assert_eq!(sack.selections[0].fraction, 0.5);
        assert_eq!(sack.total_weight, 5.0);
    }

    #[test]
    fn test_density_fills_with_second_item() {
        let sack = greedy_fractional(&household(), 13.0, density).unwrap();
        assert_eq!(sack.total_value, 205.0);
        let names: Vec<&str> = sack.selections.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["clock", "painting"]);
    }

    #[test]
    fn test_weight_inverse_prefers_light_items() {
        let sack = greedy_fractional(&household(), 11.0, weight_inverse).unwrap();
        assert_eq!(sack.total_value, 90.0);
        assert_eq!(sack.selections[0].item.name, "radio");
        assert_eq!(sack.selections[0].fraction, 1.0);
    }

    #[test]
    fn test_everything_fits() {
        let sack = greedy_fractional(&household(), 100.0, value).unwrap();
        assert_eq!(sack.selections.len(), 3);
        assert_eq!(sack.total_value, 285.0);
        assert_eq!(sack.total_weight, 23.0);
    }

    #[test]
    fn test_exact_fit_stops_without_zero_fractions() {
        let sack =
            greedy_fractional(&household(), 10.0, |i: &Item| SortKey::Value.apply(i)).unwrap();
        assert_eq!(sack.selections.len(), 1);
        assert_eq!(sack.total_value, 175.0);
    }

    #[test]
    fn test_zero_capacity() {
        let sack = greedy_fractional(&household(), 0.0, density).unwrap();
        assert!(sack.selections.is_empty());
        assert_eq!(sack.total_value, 0.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![Item::new("first", 10.0, 1.0), Item::new("second", 10.0, 1.0)];
        let sack = greedy_fractional(&items, 1.0, value).unwrap();
        assert_eq!(sack.selections[0].item.name, "first");
    }

    #[test]
    fn test_negative_capacity_rejected() {
        assert!(greedy_fractional(&household(), -1.0, density).is_err());
    }
}
