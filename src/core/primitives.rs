use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Model value used for time axes: fractional unix seconds.
#[must_use]
pub fn datetime_to_model_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_model_seconds`], truncated to millisecond precision.
pub fn model_seconds_to_datetime(seconds: f64) -> ChartResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(ChartError::InvalidData(
            "time model value must be finite".to_owned(),
        ));
    }
    let millis = (seconds * 1000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(ChartError::InvalidData(
            "time model value is out of range".to_owned(),
        ));
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64).ok_or_else(|| {
        ChartError::InvalidData("time model value is out of range".to_owned())
    })
}
