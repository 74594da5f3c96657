//! Minimum wage resolution and violation detection.

use rust_decimal::Decimal;

use crate::config::MinimumWageTable;
use crate::error::EngineResult;
use crate::models::{LocationInfo, Severity, Violation, ViolationKind, WorkRecord};

use super::LABOR_CODE_MINIMUM_WAGE;

/// Jurisdiction name reported when no local rate applies.
const STATE_JURISDICTION: &str = "California";

/// The minimum wage that applies to a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumWage {
    /// Hourly minimum wage.
    pub rate: Decimal,
    /// Name of the jurisdiction that set the rate.
    pub jurisdiction: String,
}

/// Normalizes a city name for matching against jurisdiction codes.
///
/// Upper-cases, trims, and collapses every run of spaces, hyphens and
/// underscores into a single `_`.
///
/// # Example
///
/// ```
/// use labor_rules_engine::rules::normalize_city;
///
/// assert_eq!(normalize_city("  san  francisco "), "SAN_FRANCISCO");
/// assert_eq!(normalize_city("Santa-Clara"), "SANTA_CLARA");
/// ```
pub fn normalize_city(city: &str) -> String {
    let mut normalized = String::with_capacity(city.len());
    let mut in_separator = false;

    for c in city.trim().chars() {
        if matches!(c, ' ' | '-' | '_') || c.is_whitespace() {
            in_separator = true;
            continue;
        }
        if in_separator && !normalized.is_empty() {
            normalized.push('_');
        }
        in_separator = false;
        normalized.extend(c.to_uppercase());
    }

    normalized
}

/// Resolves the minimum wage for a location.
///
/// Local rates are searched in table order and the first code contained in
/// the normalized city wins. Without a city, or without a match, the state
/// rate applies.
///
/// # Example
///
/// ```
/// use labor_rules_engine::config::RulesConfig;
/// use labor_rules_engine::models::LocationInfo;
/// use labor_rules_engine::rules::resolve_minimum_wage;
///
/// let table = RulesConfig::california().minimum_wage;
///
/// let sf = resolve_minimum_wage(&table, Some(&LocationInfo::city("San Francisco")));
/// assert_eq!(sf.rate.to_string(), "18.07");
///
/// let state = resolve_minimum_wage(&table, None);
/// assert_eq!(state.rate.to_string(), "16.00");
/// ```
pub fn resolve_minimum_wage(
    table: &MinimumWageTable,
    location: Option<&LocationInfo>,
) -> MinimumWage {
    let city = location
        .and_then(|location| location.city.as_deref())
        .map(normalize_city)
        .filter(|city| !city.is_empty());

    let local = city.and_then(|city| {
        table
            .local_rates
            .iter()
            .find(|local| city.contains(&normalize_city(&local.code)))
    });

    match local {
        Some(local) => MinimumWage {
            rate: local.rate,
            jurisdiction: local.name.clone(),
        },
        None => MinimumWage {
            rate: table.state_rate,
            jurisdiction: STATE_JURISDICTION.to_string(),
        },
    }
}

/// Reports an hourly rate below the applicable minimum wage.
///
/// A zero hourly rate means none was extracted and is not reported.
pub fn check_minimum_wage(
    record: &WorkRecord,
    minimum: &MinimumWage,
) -> EngineResult<Vec<Violation>> {
    if record.hourly_rate <= Decimal::ZERO || record.hourly_rate >= minimum.rate {
        return Ok(Vec::new());
    }

    Ok(vec![Violation {
        violation_type: ViolationKind::MinimumWage,
        description: format!(
            "Hourly rate of ${}/hr is below the applicable minimum wage of ${}/hr.",
            record.hourly_rate, minimum.rate
        ),
        severity: Severity::High,
        confidence: 0.98,
        labor_code: LABOR_CODE_MINIMUM_WAGE.to_string(),
        actual_value: Some(record.hourly_rate),
        expected_value: Some(minimum.rate),
        recommendation: Some(format!(
            "Increase hourly rate to meet minimum wage of ${}/hr",
            minimum.rate
        )),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LocalMinimumWage, RulesConfig};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table() -> MinimumWageTable {
        RulesConfig::california().minimum_wage
    }

    fn resolve(city: &str) -> MinimumWage {
        resolve_minimum_wage(&table(), Some(&LocationInfo::city(city)))
    }

    fn check(rate: &str, minimum: &MinimumWage) -> Vec<Violation> {
        let record = WorkRecord {
            hourly_rate: dec(rate),
            ..WorkRecord::default()
        };
        check_minimum_wage(&record, minimum).unwrap()
    }

    // ==========================================================================
    // City normalization
    // ==========================================================================

    #[test]
    fn test_normalize_city_collapses_separators() {
        assert_eq!(normalize_city("los angeles"), "LOS_ANGELES");
        assert_eq!(normalize_city("Los - Angeles"), "LOS_ANGELES");
        assert_eq!(normalize_city("san__diego"), "SAN_DIEGO");
        assert_eq!(normalize_city("\tOakland\n"), "OAKLAND");
    }

    #[test]
    fn test_normalize_city_blank() {
        assert_eq!(normalize_city(""), "");
        assert_eq!(normalize_city("  - _ "), "");
    }

    // ==========================================================================
    // Resolution
    // ==========================================================================

    #[test]
    fn test_no_location_uses_state_rate() {
        let minimum = resolve_minimum_wage(&table(), None);
        assert_eq!(minimum.rate, dec("16.00"));
        assert_eq!(minimum.jurisdiction, "California");
    }

    #[test]
    fn test_location_without_city_uses_state_rate() {
        let location = LocationInfo {
            city: None,
            state: Some("CA".to_string()),
        };
        let minimum = resolve_minimum_wage(&table(), Some(&location));
        assert_eq!(minimum.rate, dec("16.00"));
    }

    #[test]
    fn test_multi_word_city_matches() {
        assert_eq!(resolve("San Francisco").rate, dec("18.07"));
        assert_eq!(resolve("los angeles").rate, dec("16.78"));
        assert_eq!(resolve("SAN DIEGO").rate, dec("16.30"));
        assert_eq!(resolve("Santa Clara").rate, dec("17.20"));
    }

    #[test]
    fn test_city_containing_code_matches() {
        let minimum = resolve("City of Oakland");
        assert_eq!(minimum.rate, dec("16.94"));
        assert_eq!(minimum.jurisdiction, "Oakland");
    }

    #[test]
    fn test_unknown_city_uses_state_rate() {
        let minimum = resolve("Fresno");
        assert_eq!(minimum.rate, dec("16.00"));
        assert_eq!(minimum.jurisdiction, "California");
    }

    #[test]
    fn test_first_match_in_table_order_wins() {
        let table = MinimumWageTable {
            effective_date: table().effective_date,
            state_rate: dec("15.00"),
            local_rates: vec![
                LocalMinimumWage {
                    code: "SAN".to_string(),
                    name: "Any San".to_string(),
                    rate: dec("15.50"),
                },
                LocalMinimumWage {
                    code: "SAN_JOSE".to_string(),
                    name: "San Jose".to_string(),
                    rate: dec("17.55"),
                },
            ],
        };
        let minimum = resolve_minimum_wage(&table, Some(&LocationInfo::city("San Jose")));
        assert_eq!(minimum.jurisdiction, "Any San");
    }

    // ==========================================================================
    // Violation detection
    // ==========================================================================

    #[test]
    fn test_rate_below_state_minimum() {
        let violations = check("10", &resolve_minimum_wage(&table(), None));

        assert_eq!(violations.len(), 1);
        let violation = &violations[0];
        assert_eq!(violation.violation_type, ViolationKind::MinimumWage);
        assert_eq!(violation.severity, Severity::High);
        assert_eq!(violation.confidence, 0.98);
        assert_eq!(violation.labor_code, "CA Labor Code § 1182.12");
        assert_eq!(violation.actual_value, Some(dec("10")));
        assert_eq!(violation.expected_value, Some(dec("16.00")));
        assert_eq!(violation.expected_value.unwrap().to_string(), "16.00");
        assert_eq!(
            violation.description,
            "Hourly rate of $10/hr is below the applicable minimum wage of $16.00/hr."
        );
        assert_eq!(
            violation.recommendation.as_deref(),
            Some("Increase hourly rate to meet minimum wage of $16.00/hr")
        );
    }

    #[test]
    fn test_rate_at_minimum_no_violation() {
        assert!(check("16.00", &resolve_minimum_wage(&table(), None)).is_empty());
    }

    #[test]
    fn test_zero_rate_no_violation() {
        assert!(check("0", &resolve_minimum_wage(&table(), None)).is_empty());
    }

    #[test]
    fn test_state_compliant_rate_below_local_minimum() {
        let violations = check("17.00", &resolve("San Francisco"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].expected_value, Some(dec("18.07")));
        assert!(violations[0].description.ends_with("minimum wage of $18.07/hr."));
    }
}
