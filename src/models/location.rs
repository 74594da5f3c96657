//! Worker location hint.

use serde::{Deserialize, Serialize};

/// Where the work was performed, used to resolve the applicable minimum wage.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::LocationInfo;
///
/// let location = LocationInfo::city("San Francisco");
/// assert_eq!(location.city.as_deref(), Some("San Francisco"));
/// assert_eq!(location.state.as_deref(), Some("CA"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// City name as written on the pay stub or supplied by the user.
    #[serde(default)]
    pub city: Option<String>,
    /// State code, e.g. `"CA"`.
    #[serde(default)]
    pub state: Option<String>,
}

impl LocationInfo {
    /// Creates a California location for the given city.
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            state: Some("CA".to_string()),
        }
    }
}
