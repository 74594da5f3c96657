//! Rule checks for the labor rules engine.
//!
//! This module contains one function per rule family: overtime, meal
//! breaks, rest breaks, minimum wage, pay stub completeness and pay
//! calculation consistency. Each is pure and independent. [`RulesEngine`]
//! runs them in a fixed order, then sorts and summarizes the result.

mod catalog;
mod engine;
mod meal_break;
mod minimum_wage;
mod ordering;
mod overtime;
mod pay_calculation;
mod pay_stub;
mod rest_break;

pub use catalog::{RuleDescriptor, rule_catalog};
pub use engine::{RULES_ENGINE_VERSION, RulesEngine};
pub use meal_break::check_meal_breaks;
pub use minimum_wage::{MinimumWage, check_minimum_wage, normalize_city, resolve_minimum_wage};
pub use ordering::sort_violations;
pub use overtime::check_overtime;
pub use pay_calculation::check_pay_calculation;
pub use pay_stub::check_pay_stub_requirements;
pub use rest_break::check_rest_breaks;

use crate::error::EngineError;

/// Citation for overtime and double time.
pub const LABOR_CODE_OVERTIME: &str = "CA Labor Code § 510";
/// Citation for meal periods.
pub const LABOR_CODE_MEAL_BREAKS: &str = "CA Labor Code § 512";
/// Citation for itemized wage statements, also used for rest break pay.
pub const LABOR_CODE_WAGE_STATEMENTS: &str = "CA Labor Code § 226";
/// Citation for the minimum wage.
pub const LABOR_CODE_MINIMUM_WAGE: &str = "CA Labor Code § 1182.12";

fn overflow(rule: &'static str, operation: &'static str) -> EngineError {
    EngineError::ArithmeticOverflow { rule, operation }
}
