//! Normalized work record model.
//!
//! This module contains the [`WorkRecord`] type, the strongly-typed payroll
//! fact sheet every rule check evaluates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Normalized payroll facts extracted from a single pay stub.
///
/// All hours and money amounts are exact decimals and never negative.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::WorkRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = WorkRecord {
///     regular_hours: Decimal::from_str("40").unwrap(),
///     overtime_hours: Decimal::from_str("8").unwrap(),
///     hourly_rate: Decimal::from_str("16.00").unwrap(),
///     overtime_rate: Decimal::from_str("24.00").unwrap(),
///     ..WorkRecord::default()
/// };
///
/// assert_eq!(record.total_hours().unwrap(), Decimal::from_str("48").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Hours paid at the double-time rate.
    pub double_time_hours: Decimal,
    /// The regular hourly rate.
    pub hourly_rate: Decimal,
    /// The overtime hourly rate as printed on the stub.
    pub overtime_rate: Decimal,
    /// The double-time hourly rate as printed on the stub.
    pub double_time_rate: Decimal,
    /// Gross wages for the period.
    pub gross_pay: Decimal,
    /// Net wages for the period.
    pub net_pay: Decimal,
    /// First day of the pay period, when it could be parsed.
    pub pay_period_start: Option<NaiveDate>,
    /// Last day of the pay period, when it could be parsed.
    pub pay_period_end: Option<NaiveDate>,
    /// Employee name, empty when not extracted.
    pub employee_name: String,
    /// Employer name, empty when not extracted.
    pub employer_name: String,
}

impl WorkRecord {
    /// Returns regular + overtime + double-time hours.
    ///
    /// Fails only when the sum leaves the representable decimal range.
    pub fn total_hours(&self) -> EngineResult<Decimal> {
        self.regular_hours
            .checked_add(self.overtime_hours)
            .and_then(|hours| hours.checked_add(self.double_time_hours))
            .ok_or(EngineError::ArithmeticOverflow {
                rule: "work_record",
                operation: "total hours",
            })
    }

    /// Returns `true` when both pay period dates were parsed.
    pub fn has_pay_period(&self) -> bool {
        self.pay_period_start.is_some() && self.pay_period_end.is_some()
    }
}
