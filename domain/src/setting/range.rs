//! Numeric range domains.
//!
//! A [`RangeDomain`] is resolved once, at construction, from a catalog
//! entry's built-in [`RangePolicy`] and the user's [`SettingOptions`]. After
//! that it only answers "is this value acceptable?".
//!
//! Construction-time rules:
//!
//! - `min`, `max` and `step` must all be known and `min <= max`
//! - `step > 0` whenever `min != max`
//! - `step` must divide `max - min` exactly
//! - a frozen range rejects any `min`/`max`/`step` option, even an identical one
//! - a non-relaxable range rejects a lower `min`, a higher `max`, or a `step`
//!   that is not a multiple of the built-in step

use super::options::SettingOptions;
use crate::core::error::EncoderError;
use crate::core::number::Number;
use serde::Serialize;
use serde_json::Value;

/// Built-in bounds and configuration policy of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePolicy {
    pub min: Option<Number>,
    pub max: Option<Number>,
    pub step: Option<Number>,
    /// Configuration may widen the built-in bounds
    pub relaxable: bool,
    /// Configuration may not touch `min`, `max` or `step` at all
    pub freeze_range: bool,
}

impl RangePolicy {
    /// Bounds supplied entirely by configuration.
    pub const OPEN: Self = Self {
        min: None,
        max: None,
        step: None,
        relaxable: true,
        freeze_range: false,
    };

    pub const fn bounded(min: i64, max: i64, step: i64) -> Self {
        Self {
            min: Some(Number::Int(min)),
            max: Some(Number::Int(max)),
            step: Some(Number::Int(step)),
            relaxable: true,
            freeze_range: false,
        }
    }

    pub const fn strict(self) -> Self {
        Self {
            relaxable: false,
            ..self
        }
    }

    pub const fn frozen(self) -> Self {
        Self {
            freeze_range: true,
            ..self
        }
    }
}

/// Validated `min..=max` domain walked in `step` increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeDomain {
    pub min: Number,
    pub max: Number,
    pub step: Number,
}

impl RangeDomain {
    /// Resolve the effective domain of `setting`, enforcing every construction rule.
    pub fn resolve(
        setting: &str,
        policy: &RangePolicy,
        options: &SettingOptions,
    ) -> Result<Self, EncoderError> {
        let min = options
            .min
            .or(policy.min)
            .ok_or_else(|| EncoderError::config(setting, "No min value configured"))?;
        let max = options
            .max
            .or(policy.max)
            .ok_or_else(|| EncoderError::config(setting, "No max value configured"))?;
        let step = options
            .step
            .or(policy.step)
            .ok_or_else(|| EncoderError::config(setting, "No step value configured"))?;

        if min > max {
            return Err(EncoderError::config(
                setting,
                format!("Lower boundary {} is higher than upper boundary {}", min, max),
            ));
        }
        if min != max {
            if step.is_negative() {
                return Err(EncoderError::config(
                    setting,
                    format!("Step must be a positive number, found {}", step),
                ));
            }
            if step.is_zero() {
                return Err(EncoderError::config(
                    setting,
                    "Step cannot be zero when min != max",
                ));
            }
        }
        if !step.is_zero() {
            let last = max.offset_remainder(min, step);
            if !last.is_zero() {
                return Err(EncoderError::config(
                    setting,
                    format!(
                        "Step {} must allow to get from {} to {} in equal steps. \
                         The size of the last step would be {}",
                        step, min, max, last
                    ),
                ));
            }
        }

        if policy.freeze_range {
            if policy.min.is_none() || policy.max.is_none() || policy.step.is_none() {
                return Err(EncoderError::config(
                    setting,
                    "Built-in min, max and step are required to freeze the range",
                ));
            }
            if options.overrides_range() {
                return Err(EncoderError::config(
                    setting,
                    "Cannot change min, max or step",
                ));
            }
        }

        if !policy.relaxable {
            Self::check_not_relaxed(setting, policy, min, max, step)?;
        }

        Ok(Self { min, max, step })
    }

    fn check_not_relaxed(
        setting: &str,
        policy: &RangePolicy,
        min: Number,
        max: Number,
        step: Number,
    ) -> Result<(), EncoderError> {
        let (Some(default_min), Some(default_max), Some(default_step)) =
            (policy.min, policy.max, policy.step)
        else {
            return Err(EncoderError::config(
                setting,
                "Built-in min, max and step are required to disallow relaxation",
            ));
        };

        if min < default_min {
            return Err(EncoderError::config(
                setting,
                format!("Min value cannot be lower than {}. It is {} now", default_min, min),
            ));
        }
        if max > default_max {
            return Err(EncoderError::config(
                setting,
                format!("Max value cannot be higher than {}. It is {} now", default_max, max),
            ));
        }
        let misaligned = if default_step.is_zero() {
            !step.is_zero()
        } else {
            !step.offset_remainder(Number::Int(0), default_step).is_zero()
        };
        if misaligned {
            return Err(EncoderError::config(
                setting,
                format!(
                    "Step value must be a multiple of the built-in step {}. It is {} now",
                    default_step, step
                ),
            ));
        }
        Ok(())
    }

    /// Check a candidate runtime value; returns it unchanged when acceptable.
    pub fn validate_value(&self, setting: &str, value: Option<&Value>) -> Result<Number, EncoderError> {
        let raw = match value {
            None | Some(Value::Null) => {
                return Err(EncoderError::runtime_value(setting, "null", "No value provided"));
            }
            Some(raw) => raw,
        };
        let number = Number::from_json(raw).ok_or_else(|| {
            EncoderError::runtime_value(setting, raw, "Value must be either integer or float")
        })?;
        self.check(setting, number)
    }

    /// Domain check for an already numeric value.
    pub fn check(&self, setting: &str, value: Number) -> Result<Number, EncoderError> {
        if value < self.min {
            return Err(EncoderError::runtime_value(
                setting,
                value,
                format!("violating lower bound {}", self.min),
            ));
        }
        if value > self.max {
            return Err(EncoderError::runtime_value(
                setting,
                value,
                format!("violating upper bound {}", self.max),
            ));
        }
        if self.min < self.max
            && self.step > Number::Int(0)
            && !value.offset_remainder(self.min, self.step).is_zero()
        {
            return Err(EncoderError::runtime_value(
                setting,
                value,
                format!("violating step requirement. Step is size {}", self.step),
            ));
        }
        Ok(value)
    }
}
