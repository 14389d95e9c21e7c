use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub type AxisFn = Arc<dyn Fn(f64) -> f64 + Send + Sync + 'static>;

/// Scalar remapping applied to model values before linear placement on an axis.
///
/// `inverse(evaluate(x)) == x` must hold for every model value the axis is asked
/// to map, within floating-point tolerance. Built-in variants serialize by kind;
/// `Custom` pairs only exist in memory.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AxisTransform {
    #[default]
    Identity,
    /// `ln` / `exp`.
    NaturalLog,
    /// `log10` / `10^x`.
    Log10,
    /// Sign-preserving power: `sign(x) * |x|^exponent`.
    Power { exponent: f64 },
    #[serde(skip)]
    Custom(CustomAxisTransform),
}

/// User supplied forward/inverse pair.
///
/// Two custom transforms compare equal only when they share the same function
/// objects, so re-setting a clone is a no-op while a freshly built pair is not.
#[derive(Clone)]
pub struct CustomAxisTransform {
    forward: AxisFn,
    inverse: AxisFn,
}

impl AxisTransform {
    pub fn power(exponent: f64) -> ChartResult<Self> {
        let transform = Self::Power { exponent };
        transform.validate()?;
        Ok(transform)
    }

    /// Wraps an arbitrary forward/inverse pair.
    ///
    /// Debug builds spot-check the round trip at `1.0` when `forward(1.0)` is finite.
    pub fn custom<F, I>(forward: F, inverse: I) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        I: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        let custom = CustomAxisTransform {
            forward: Arc::new(forward),
            inverse: Arc::new(inverse),
        };
        if cfg!(debug_assertions) {
            let probe = (custom.forward)(1.0);
            if probe.is_finite() {
                let back = (custom.inverse)(probe);
                debug_assert!(
                    (back - 1.0).abs() <= 1e-9,
                    "custom axis transform is not invertible at 1.0 (got {back})"
                );
            }
        }
        Self::Custom(custom)
    }

    /// Maps a model value into transformed space.
    #[must_use]
    pub fn evaluate(&self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::NaturalLog => value.ln(),
            Self::Log10 => value.log10(),
            Self::Power { exponent } => signed_pow(value, *exponent),
            Self::Custom(custom) => (custom.forward)(value),
        }
    }

    /// Maps a transformed value back into model space.
    #[must_use]
    pub fn inverse(&self, transformed: f64) -> f64 {
        match self {
            Self::Identity => transformed,
            Self::NaturalLog => transformed.exp(),
            Self::Log10 => 10_f64.powf(transformed),
            Self::Power { exponent } => signed_pow(transformed, exponent.recip()),
            Self::Custom(custom) => (custom.inverse)(transformed),
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Self::Power { exponent } = self {
            if !exponent.is_finite() || *exponent == 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "power axis transform exponent must be finite and non-zero, got {exponent}"
                )));
            }
        }
        Ok(())
    }
}

fn signed_pow(value: f64, exponent: f64) -> f64 {
    value.signum() * value.abs().powf(exponent)
}

impl PartialEq for AxisTransform {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Identity, Self::Identity)
            | (Self::NaturalLog, Self::NaturalLog)
            | (Self::Log10, Self::Log10) => true,
            (Self::Power { exponent: lhs }, Self::Power { exponent: rhs }) => lhs == rhs,
            (Self::Custom(lhs), Self::Custom(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl PartialEq for CustomAxisTransform {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.forward), Arc::as_ptr(&other.forward))
            && std::ptr::addr_eq(Arc::as_ptr(&self.inverse), Arc::as_ptr(&other.inverse))
    }
}

impl fmt::Debug for AxisTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::NaturalLog => f.write_str("NaturalLog"),
            Self::Log10 => f.write_str("Log10"),
            Self::Power { exponent } => f.debug_struct("Power").field("exponent", exponent).finish(),
            Self::Custom(custom) => custom.fmt(f),
        }
    }
}

impl fmt::Debug for CustomAxisTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("forward", &Arc::as_ptr(&self.forward))
            .field("inverse", &Arc::as_ptr(&self.inverse))
            .finish()
    }
}
