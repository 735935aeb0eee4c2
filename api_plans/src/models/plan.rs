use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use common::error::{AppError, Res};
use common::misc::null_as_default;
use serde::{Deserialize, Serialize};

/// Billing period of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanInterval {
    Day,
    Week,
    Month,
    Year,
}

impl PlanInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanInterval::Day => "day",
            PlanInterval::Week => "week",
            PlanInterval::Month => "month",
            PlanInterval::Year => "year",
        }
    }
}

impl fmt::Display for PlanInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanInterval {
    type Err = AppError;

    fn from_str(s: &str) -> Res<Self> {
        match s {
            "day" => Ok(PlanInterval::Day),
            "week" => Ok(PlanInterval::Week),
            "month" => Ok(PlanInterval::Month),
            "year" => Ok(PlanInterval::Year),
            other => Err(AppError::InvalidValue(format!("Unknown plan interval: {}", other))),
        }
    }
}

/// Three-letter currency code, stored lowercase (`usd`, `eur`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Currency(code.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency::new(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plan as returned by the billing API.
///
/// Missing or `null` fields decode to their zero value; fields this type does
/// not know about are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "livemode", deserialize_with = "null_as_default")]
    pub live: bool,
    /// Amount in the smallest currency unit (cents for `usd`).
    #[serde(deserialize_with = "null_as_default")]
    pub amount: u64,
    /// Unix timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: Currency,
    pub interval: Option<PlanInterval>,
    #[serde(deserialize_with = "null_as_default")]
    pub interval_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, String>,
    /// 0 means no trial.
    #[serde(deserialize_with = "null_as_default")]
    pub trial_period_days: u64,
    #[serde(rename = "statement_description", deserialize_with = "null_as_default")]
    pub statement: String,
}

/// One page of plans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanList {
    #[serde(rename = "total_count", deserialize_with = "null_as_default")]
    pub count: u16,
    #[serde(rename = "has_more", deserialize_with = "null_as_default")]
    pub more: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "data", deserialize_with = "null_as_default")]
    pub values: Vec<Plan>,
}

impl PlanList {
    /// Id of the last plan on this page, usable as the next `start` cursor.
    pub fn last_id(&self) -> Option<&str> {
        self.values.last().map(|plan| plan.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_full_plan() {
        let plan: Plan = serde_json::from_value(json!({
            "id": "gold",
            "object": "plan",
            "livemode": true,
            "amount": 1000,
            "created": 1_400_000_000,
            "currency": "usd",
            "interval": "month",
            "interval_count": 3,
            "name": "Gold Plan",
            "metadata": { "tier": "top" },
            "trial_period_days": 14,
            "statement_description": "GOLD"
        }))
        .unwrap();

        assert_eq!(plan.id, "gold");
        assert!(plan.live);
        assert_eq!(plan.amount, 1000);
        assert_eq!(plan.created, 1_400_000_000);
        assert_eq!(plan.currency.as_str(), "usd");
        assert_eq!(plan.interval, Some(PlanInterval::Month));
        assert_eq!(plan.interval_count, 3);
        assert_eq!(plan.name, "Gold Plan");
        assert_eq!(plan.metadata["tier"], "top");
        assert_eq!(plan.trial_period_days, 14);
        assert_eq!(plan.statement, "GOLD");
    }

    #[test]
    fn nulls_and_missing_fields_decode_to_zero_values() {
        let plan: Plan = serde_json::from_value(json!({
            "id": "basic",
            "metadata": null,
            "trial_period_days": null,
            "statement_description": null,
            "interval": null
        }))
        .unwrap();

        assert_eq!(plan.id, "basic");
        assert!(plan.metadata.is_empty());
        assert_eq!(plan.trial_period_days, 0);
        assert_eq!(plan.statement, "");
        assert_eq!(plan.interval, None);
        assert_eq!(plan.amount, 0);
    }

    #[test]
    fn unknown_interval_is_rejected() {
        let result = serde_json::from_value::<Plan>(json!({ "interval": "fortnight" }));
        assert!(result.is_err());
    }

    #[test]
    fn decode_plan_list() {
        let list: PlanList = serde_json::from_value(json!({
            "object": "list",
            "total_count": 2,
            "has_more": true,
            "url": "/v1/plans",
            "data": [{ "id": "gold" }, { "id": "silver" }]
        }))
        .unwrap();

        assert_eq!(list.count, 2);
        assert!(list.more);
        assert_eq!(list.url, "/v1/plans");
        assert_eq!(list.values.len(), 2);
        assert_eq!(list.last_id(), Some("silver"));
    }

    #[test]
    fn interval_parsing() {
        assert_eq!("week".parse::<PlanInterval>().unwrap(), PlanInterval::Week);
        assert_eq!(PlanInterval::Year.to_string(), "year");
        assert!(matches!(
            "hour".parse::<PlanInterval>(),
            Err(AppError::InvalidValue(_))
        ));
    }

    #[test]
    fn currency_is_lowercased() {
        let currency = Currency::from("USD");
        assert_eq!(currency.as_str(), "usd");
        assert_eq!(currency.to_string(), "usd");
    }
}
