//! The rules engine: normalization, rule evaluation, ordering and summary.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::RulesConfig;
use crate::error::EngineResult;
use crate::models::{AnalysisResult, FieldMap, LocationInfo, Summary, Violation, WorkRecord};
use crate::normalization::{extraction_confidence, normalize_fields};

use super::{
    MinimumWage, RuleDescriptor, check_meal_breaks, check_minimum_wage, check_overtime,
    check_pay_calculation, check_pay_stub_requirements, check_rest_breaks, rule_catalog,
    sort_violations,
};

/// Version reported in every [`AnalysisResult`].
pub const RULES_ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyzes extracted pay stub fields for California wage-and-hour violations.
///
/// The engine holds only read-only configuration and can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::{ExtractedField, FieldMap, ViolationKind};
/// use labor_rules_engine::rules::RulesEngine;
///
/// let mut fields = FieldMap::new();
/// fields.insert("hourlyRate".to_string(), ExtractedField::text("10"));
///
/// let result = RulesEngine::default().analyze(&fields, None);
/// assert_eq!(result.violations[0].violation_type, ViolationKind::MinimumWage);
/// assert_eq!(result.rules_engine_version, "1.0.0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RulesEngine {
    config: RulesConfig,
}

impl RulesEngine {
    /// Creates an engine over the given rule configuration.
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Returns the rule configuration.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Runs every rule check and returns the ordered, summarized result.
    ///
    /// Never fails. If a check cannot complete, the violations of the checks
    /// that already ran are kept and a single Processing Error violation is
    /// appended before sorting.
    pub fn analyze(&self, fields: &FieldMap, location: Option<&LocationInfo>) -> AnalysisResult {
        let record = normalize_fields(fields);
        let minimum_wage = self.minimum_wage(location);

        let mut violations = Vec::new();
        if let Err(err) = self.evaluate(&record, fields, &minimum_wage, &mut violations) {
            warn!(error = %err, "Rule check failed; reporting processing error");
            violations.push(Violation::processing_error(err));
        }
        sort_violations(&mut violations);

        let summary = Summary::from_violations(&violations);
        info!(
            fields = fields.len(),
            total_violations = summary.total_violations,
            high = summary.high_severity,
            medium = summary.medium_severity,
            low = summary.low_severity,
            "Analysis completed"
        );

        AnalysisResult {
            violations,
            summary,
            extraction_confidence: extraction_confidence(fields),
            rules_engine_version: RULES_ENGINE_VERSION.to_string(),
        }
    }

    /// Returns the hourly minimum wage that applies to a location.
    pub fn resolve_minimum_wage(&self, location: Option<&LocationInfo>) -> Decimal {
        self.minimum_wage(location).rate
    }

    /// Lists the violation kinds this engine can report.
    pub fn catalog(&self) -> Vec<RuleDescriptor> {
        rule_catalog(&self.config)
    }

    fn minimum_wage(&self, location: Option<&LocationInfo>) -> MinimumWage {
        let minimum = super::resolve_minimum_wage(&self.config.minimum_wage, location);
        debug!(
            jurisdiction = %minimum.jurisdiction,
            rate = %minimum.rate,
            "Resolved minimum wage"
        );
        minimum
    }

    /// Appends each check's violations in evaluation order, stopping at the
    /// first failing check.
    fn evaluate(
        &self,
        record: &WorkRecord,
        fields: &FieldMap,
        minimum_wage: &MinimumWage,
        violations: &mut Vec<Violation>,
    ) -> EngineResult<()> {
        let config = &self.config;

        collect("overtime", check_overtime(record, &config.overtime)?, violations);
        collect("meal_breaks", check_meal_breaks(record, &config.meal_breaks)?, violations);
        collect("rest_breaks", check_rest_breaks(record, &config.rest_breaks)?, violations);
        collect("minimum_wage", check_minimum_wage(record, minimum_wage)?, violations);
        collect(
            "pay_stub",
            check_pay_stub_requirements(fields, &config.pay_stub),
            violations,
        );
        collect(
            "pay_calculation",
            check_pay_calculation(record, &config.pay_calculation)?,
            violations,
        );

        Ok(())
    }
}

fn collect(check: &str, found: Vec<Violation>, violations: &mut Vec<Violation>) {
    debug!(check, violations = found.len(), "Rule check completed");
    violations.extend(found);
}
