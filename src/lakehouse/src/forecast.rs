use chrono::Datelike;
use chrono::Duration;
use chrono::NaiveDate;

use crate::error::LakehouseError;
use crate::error::Result;

// two-sided 95% interval
const Z_95: f64 = 1.96;

/// Which columns of `source` form the time series, and how far to project it.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub source: String,
    pub time_col: String,
    pub value_col: String,
    pub group_col: String,
    pub horizon_days: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub upper: f64,
    pub lower: f64,
}

pub trait Forecaster: Send + Sync {
    /// Predicts every day after the last observation up to and including `horizon`.
    fn forecast(
        &self,
        history: &[(NaiveDate, f64)],
        horizon: NaiveDate,
    ) -> Result<Vec<ForecastPoint>>;
}

/// Linear trend over the day offset, scaled by a weekday seasonal ratio.
#[derive(Debug, Clone)]
pub struct TrendForecaster {
    z: f64,
}

impl TrendForecaster {
    pub fn new() -> Self {
        Self { z: Z_95 }
    }
}

impl Default for TrendForecaster {
    fn default() -> Self {
        Self::new()
    }
}

struct Fit {
    origin: NaiveDate,
    intercept: f64,
    slope: f64,
    seasonal: [f64; 7],
}

impl Fit {
    fn predict(&self, date: NaiveDate) -> f64 {
        let x = (date - self.origin).num_days() as f64;
        let weekday = date.weekday().num_days_from_monday() as usize;
        (self.intercept + self.slope * x) * self.seasonal[weekday]
    }
}

fn fit(history: &[(NaiveDate, f64)], origin: NaiveDate) -> Fit {
    let n = history.len() as f64;
    let xs: Vec<f64> = history
        .iter()
        .map(|(d, _)| (*d - origin).num_days() as f64)
        .collect();
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = history.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, (_, y)) in xs.iter().zip(history) {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
    let intercept = mean_y - slope * mean_x;

    let mut sums = [0.0; 7];
    let mut counts = [0usize; 7];
    for (d, y) in history {
        let weekday = d.weekday().num_days_from_monday() as usize;
        sums[weekday] += y;
        counts[weekday] += 1;
    }
    let mut seasonal = [1.0; 7];
    if mean_y != 0.0 && counts.iter().all(|c| *c > 0) {
        for weekday in 0..7 {
            seasonal[weekday] = sums[weekday] / counts[weekday] as f64 / mean_y;
        }
    }

    Fit {
        origin,
        intercept,
        slope,
        seasonal,
    }
}

impl Forecaster for TrendForecaster {
    fn forecast(
        &self,
        history: &[(NaiveDate, f64)],
        horizon: NaiveDate,
    ) -> Result<Vec<ForecastPoint>> {
        if let Some((d, v)) = history.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LakehouseError::Internal(format!(
                "non-finite value {v} at {d}"
            )));
        }

        let mut history = history.to_vec();
        history.sort_by_key(|(d, _)| *d);
        let (origin, last) = match (history.first(), history.last()) {
            (Some(first), Some(last)) => (first.0, last.0),
            _ => return Ok(vec![]),
        };

        let model = fit(&history, origin);
        let sse: f64 = history
            .iter()
            .map(|(d, y)| {
                let r = y - model.predict(*d);
                r * r
            })
            .sum();
        let dof = history.len().saturating_sub(2).max(1) as f64;
        let margin = self.z * (sse / dof).sqrt();

        let mut out = Vec::new();
        let mut date = last + Duration::days(1);
        while date <= horizon {
            let value = model.predict(date);
            out.push(ForecastPoint {
                date,
                value,
                upper: value + margin,
                lower: value - margin,
            });
            date += Duration::days(1);
        }

        Ok(out)
    }
}
