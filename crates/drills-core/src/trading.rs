//! Moving-average crossover trading
//!
//! A short-term average crossing above a long-term one is read as a buy
//! signal, crossing below as a sell signal. The simulator holds either all
//! cash or all stock, trades fractional quantities and pays no fees.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_invalid;
use crate::error::{DrillsError, Result};

/// Which series is strictly higher after a crossover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leader {
    /// First series on top; a buy when the first series is the short average
    First,
    /// Second series on top; a sell
    Second,
}

impl Leader {
    /// 1 for [`Leader::First`], 2 for [`Leader::Second`]
    pub fn code(self) -> u8 {
        match self {
            Leader::First => 1,
            Leader::Second => 2,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Leader::First),
            2 => Ok(Leader::Second),
            other => Err(DrillsError::invalid_value("crossover leader", other)),
        }
    }
}

/// Point at which one series becomes strictly higher than the other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossover {
    pub index: usize,
    pub leader: Leader,
}

impl Crossover {
    pub fn new(index: usize, leader: Leader) -> Self {
        Self { index, leader }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.index, self.leader.code())
    }
}

/// `n`-period simple moving average.
///
/// The window shrinks to the series length when `n` is longer. The first
/// `window - 1` entries have no value.
pub fn moving_average(prices: &[f64], n: usize) -> Result<Vec<Option<f64>>> {
    if n == 0 {
        bail_invalid!("moving average window", n);
    }
    if prices.is_empty() {
        return Ok(Vec::new());
    }

    let window = n.min(prices.len());
    let mut averages = vec![None; window - 1];
    averages.extend(
        prices
            .windows(window)
            .map(|w| Some(w.iter().sum::<f64>() / window as f64)),
    );
    Ok(averages)
}

/// 0 when equal, 1 when `a` is higher, 2 when `b` is higher
fn ordering_state(a: f64, b: f64) -> u8 {
    if a == b {
        0
    } else if a < b {
        2
    } else {
        1
    }
}

/// Indices where one series becomes strictly higher than the other.
///
/// Comparison starts once both series have values. Returning to equality is
/// not a crossover; moving from equal to strictly higher is.
pub fn cross_overs(first: &[Option<f64>], second: &[Option<f64>]) -> Result<Vec<Crossover>> {
    if first.len() != second.len() {
        return Err(DrillsError::LengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }

    let mut crossovers = Vec::new();
    for (k, (a, b)) in first.windows(2).zip(second.windows(2)).enumerate() {
        let (Some(prev_a), Some(prev_b), Some(cur_a), Some(cur_b)) = (a[0], b[0], a[1], b[1]) else {
            continue;
        };
        let previous = ordering_state(prev_a, prev_b);
        let current = ordering_state(cur_a, cur_b);
        if current != previous && current != 0 {
            let leader = if current == 1 {
                Leader::First
            } else {
                Leader::Second
            };
            crossovers.push(Crossover::new(k + 1, leader));
        }
    }
    Ok(crossovers)
}

fn validate_trades(prices: &[f64], crossovers: &[Crossover]) -> Result<()> {
    if let Some(bad) = prices.iter().find(|p| !(p.is_finite() && **p > 0.0)) {
        return Err(DrillsError::invalid_value("price", bad));
    }
    let mut previous: Option<usize> = None;
    for c in crossovers {
        if c.index >= prices.len() {
            return Err(DrillsError::invalid_value(
                "crossover index",
                format!("{} (only {} prices)", c.index, prices.len()),
            ));
        }
        if previous.is_some_and(|p| c.index <= p) {
            return Err(DrillsError::invalid_value(
                "crossover order",
                format!("{} follows {}", c.index, previous.unwrap_or_default()),
            ));
        }
        previous = Some(c.index);
    }
    Ok(())
}

/// Portfolio value at every price index when trading on `crossovers`.
///
/// Cash is held until the first crossover. A [`Leader::First`] crossover
/// buys with all cash at that index's price, a [`Leader::Second`] one sells
/// the whole position. A buy while holding stock, or a sell while holding
/// cash, changes nothing.
pub fn make_trades(
    starting_cash: f64,
    prices: &[f64],
    crossovers: &[Crossover],
) -> Result<Vec<f64>> {
    if !(starting_cash.is_finite() && starting_cash >= 0.0) {
        bail_invalid!("starting cash", starting_cash);
    }
    validate_trades(prices, crossovers)?;

    let Some(first) = crossovers.first() else {
        return Ok(vec![starting_cash; prices.len()]);
    };

    let mut values = vec![starting_cash; first.index + 1];
    let mut active = 0usize;

    for i in first.index + 1..prices.len() {
        let held = match crossovers[active].leader {
            Leader::First => 1.0,
            Leader::Second => 0.0,
        };
        let last = values[i - 1];
        values.push(last * (1.0 + (prices[i] / prices[i - 1] - 1.0) * held));

        if let Some(next) = crossovers.get(active + 1) {
            if i >= next.index {
                active += 1;
            }
        }
    }

    Ok(values)
}

/// Full moving-average crossover run over one price series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub short_average: Vec<Option<f64>>,
    pub long_average: Vec<Option<f64>>,
    pub crossovers: Vec<Crossover>,
    pub values: Vec<f64>,
}

impl Simulation {
    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Compute both averages, their crossovers, and the resulting portfolio
#[tracing::instrument(skip(prices), fields(prices = prices.len()))]
pub fn simulate(
    prices: &[f64],
    short: usize,
    long: usize,
    starting_cash: f64,
) -> Result<Simulation> {
    let short_average = moving_average(prices, short)?;
    let long_average = moving_average(prices, long)?;
    let crossovers = cross_overs(&short_average, &long_average)?;
    let values = make_trades(starting_cash, prices, &crossovers)?;

    debug!(crossovers = crossovers.len(), final_value = ?values.last(), "simulate");

    Ok(Simulation {
        short_average,
        long_average,
        crossovers,
        values,
    })
}
