//! Field normalization for the labor rules engine.
//!
//! This module converts the loosely typed field map supplied by the
//! document-extraction service into a [`WorkRecord`](crate::models::WorkRecord):
//! numeric coercion, text coercion, pay period parsing, and extraction
//! confidence scoring. Nothing here can fail; bad input becomes defaults.

mod confidence;
mod numeric;
mod pay_period;
mod record;

pub use confidence::{DEFAULT_FIELD_CONFIDENCE, extraction_confidence};
pub use numeric::{decimal_from_value, parse_decimal};
pub use pay_period::{PAY_PERIOD_DATE_FORMATS, PAY_PERIOD_DELIMITER, parse_pay_period};
pub use record::{normalize_fields, parse_text};

/// Field names used by the extraction service.
pub mod fields {
    /// Employee name.
    pub const EMPLOYEE_NAME: &str = "employeeName";
    /// Employer name.
    pub const EMPLOYER_NAME: &str = "employerName";
    /// Pay period as `"<start> - <end>"`.
    pub const PAY_PERIOD: &str = "payPeriod";
    /// Gross pay.
    pub const GROSS_PAY: &str = "grossPay";
    /// Net pay.
    pub const NET_PAY: &str = "netPay";
    /// Regular hours worked.
    pub const REGULAR_HOURS: &str = "regularHours";
    /// Overtime hours paid.
    pub const OVERTIME_HOURS: &str = "overtimeHours";
    /// Double-time hours paid.
    pub const DOUBLE_TIME_HOURS: &str = "doubleTimeHours";
    /// Regular hourly rate.
    pub const HOURLY_RATE: &str = "hourlyRate";
    /// Overtime hourly rate.
    pub const OVERTIME_RATE: &str = "overtimeRate";
    /// Double-time hourly rate.
    pub const DOUBLE_TIME_RATE: &str = "doubleTimeRate";
}
