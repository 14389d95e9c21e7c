use std::collections::HashMap;
use std::fmt::{self, Write as _};
use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::core::model_seconds_to_datetime;
use crate::error::{ChartError, ChartResult};

pub type TickLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// How tick values become label text.
#[derive(Clone)]
pub enum TickLabelFormat {
    /// Fixed decimal places; negative zero prints without its sign.
    Decimal { places: u8 },
    /// Model values read as unix seconds and rendered with a `chrono` pattern.
    ///
    /// Values that cannot be rendered (out-of-range times, or a pattern chrono
    /// rejects) fall back to the plain number.
    UtcTime { pattern: String },
    Custom(TickLabelFormatterFn),
}

impl Default for TickLabelFormat {
    fn default() -> Self {
        Self::Decimal { places: 0 }
    }
}

impl TickLabelFormat {
    pub fn custom<F>(formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(formatter))
    }

    /// Builds a [`TickLabelFormat::UtcTime`], rejecting patterns chrono cannot parse.
    pub fn utc_time(pattern: impl Into<String>) -> ChartResult<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ChartError::InvalidConfig(format!(
                "invalid time label pattern: {pattern:?}"
            )));
        }
        Ok(Self::UtcTime { pattern })
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Decimal { places } => {
                let places = usize::from(*places);
                let text = format!("{value:.places$}");
                // `-0.00` reads as a bug on an axis.
                if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
                    text[1..].to_owned()
                } else {
                    text
                }
            }
            Self::UtcTime { pattern } => {
                let Ok(time) = model_seconds_to_datetime(value) else {
                    return format!("{value}");
                };
                let mut text = String::new();
                if write!(text, "{}", time.format(pattern)).is_err() {
                    debug!(pattern = %pattern, "time label pattern failed to render");
                    return format!("{value}");
                }
                text
            }
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl fmt::Debug for TickLabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal { places } => f.debug_struct("Decimal").field("places", places).finish(),
            Self::UtcTime { pattern } => f.debug_struct("UtcTime").field("pattern", pattern).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Runtime metrics of a tick label cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Keyed by the integer tick index rather than the reconstructed model value,
/// which can differ in the last bits between redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct LabelCacheKey {
    pub(super) index: i64,
    pub(super) spacing: OrderedFloat<f64>,
    pub(super) origin: OrderedFloat<f64>,
}

#[derive(Debug, Default)]
pub(super) struct LabelCache {
    entries: HashMap<LabelCacheKey, String>,
    hits: u64,
    misses: u64,
}

impl LabelCache {
    const MAX_ENTRIES: usize = 4096;

    pub(super) fn get_or_insert_with<F>(&mut self, key: LabelCacheKey, make: F) -> String
    where
        F: FnOnce() -> String,
    {
        if let Some(text) = self.entries.get(&key) {
            self.hits = self.hits.saturating_add(1);
            return text.clone();
        }

        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            trace!(size = self.entries.len(), "tick label cache full; clearing");
            self.entries.clear();
        }
        let text = make();
        self.entries.insert(key, text.clone());
        text
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> LabelCacheStats {
        LabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TickLabelFormat;

    #[test]
    fn decimal_format_drops_negative_zero_sign() {
        let format = TickLabelFormat::Decimal { places: 2 };
        assert_eq!(format.format(-0.001), "0.00");
        assert_eq!(format.format(-1.5), "-1.50");
    }

    #[test]
    fn utc_time_format_reads_unix_seconds() {
        let format = TickLabelFormat::UtcTime {
            pattern: "%Y-%m-%d %H:%M".to_owned(),
        };
        assert_eq!(format.format(86_400.0), "1970-01-02 00:00");
    }

    #[test]
    fn utc_time_constructor_rejects_unparsable_pattern() {
        assert!(TickLabelFormat::utc_time("%Q").is_err());
        assert!(TickLabelFormat::utc_time("%H:%M").is_ok());
    }

    #[test]
    fn unparsable_time_pattern_falls_back_to_number() {
        let format = TickLabelFormat::UtcTime {
            pattern: "%Q".to_owned(),
        };
        assert_eq!(format.format(3_600.0), "3600");
    }
}
