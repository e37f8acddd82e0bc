//! Core validation traits

use crate::error::ValidationResult;
use chrono::{Local, NaiveDate};
use serde_json::Value;

/// Source of "today" for date-sensitive validators
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Returns `None` for an impossible calendar date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Ambient inputs a field validator may consult besides the raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldContext<'a> {
    /// Selected authorization protocol label, if any
    pub protocol: Option<&'a str>,
    /// Date the validation runs on
    pub today: NaiveDate,
}

impl<'a> FieldContext<'a> {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            protocol: None,
            today,
        }
    }

    /// Context dated by the given clock
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
    }

    /// Set the selected protocol; a blank label counts as no selection
    pub fn with_protocol(mut self, protocol: Option<&'a str>) -> Self {
        self.protocol = protocol.filter(|p| !p.trim().is_empty());
        self
    }
}

/// A validator for one form field
///
/// Implementations are pure: the same value and context always produce
/// the same result.
pub trait FieldValidator: Send + Sync {
    /// Validate a raw field value
    fn validate(&self, value: &str, ctx: &FieldContext<'_>) -> ValidationResult;

    /// Get the validation rule name
    fn rule_name(&self) -> &'static str;

    /// Get validation rule parameters as JSON
    fn parameters(&self) -> Option<Value> {
        None
    }
}
