use std::collections::HashMap;

use common::{Filters, Form};

use crate::models::plan::{Currency, PlanInterval};

/// Largest page size the API accepts; bigger limits are clamped to it.
pub const MAX_LIST_LIMIT: u64 = 100;

/// Parameters for creating or updating a plan.
///
/// Numeric optionals use 0 for "unset": an explicit zero cannot be sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanParams {
    pub id: String,
    pub name: String,
    pub currency: Currency,
    pub amount: u64,
    pub interval: Option<PlanInterval>,
    pub interval_count: u64,
    pub trial_period_days: u64,
    pub metadata: HashMap<String, String>,
    pub statement: String,
}

impl PlanParams {
    /// Body for `POST /plans`.
    ///
    /// The five required fields are always sent, even when empty, and left for
    /// the API to validate. Optional fields only appear when non-zero.
    pub fn create_form(&self) -> Form {
        let mut body = Form::new();
        body.add("id", self.id.as_str());
        body.add("name", self.name.as_str());
        body.add("amount", self.amount.to_string());
        body.add("currency", self.currency.as_str());
        body.add(
            "interval",
            self.interval.map(|i| i.as_str()).unwrap_or_default(),
        );

        if self.interval_count > 0 {
            body.add("interval_count", self.interval_count.to_string());
        }

        if self.trial_period_days > 0 {
            body.add("trial_period_days", self.trial_period_days.to_string());
        }

        if !self.statement.is_empty() {
            body.add("statement_description", self.statement.as_str());
        }

        self.append_metadata(&mut body);
        body
    }

    /// Body for `POST /plans/{id}`.
    ///
    /// Amount, currency and interval are fixed once a plan exists and are never
    /// sent here.
    pub fn update_form(&self) -> Form {
        let mut body = Form::new();

        if !self.name.is_empty() {
            body.add("name", self.name.as_str());
        }

        if !self.statement.is_empty() {
            body.add("statement_description", self.statement.as_str());
        }

        self.append_metadata(&mut body);
        body
    }

    fn append_metadata(&self, body: &mut Form) {
        for (key, value) in &self.metadata {
            body.add(format!("metadata[{}]", key), value.as_str());
        }
    }
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanListParams {
    pub filters: Filters,
    /// Return plans after this id (`starting_after`).
    pub start: String,
    /// Return plans before this id (`ending_before`).
    pub end: String,
    /// Page size; 0 lets the server pick.
    pub limit: u64,
}

impl PlanListParams {
    /// Body for `GET /plans`.
    pub fn form(&self) -> Form {
        let mut body = Form::new();

        if !self.filters.is_empty() {
            self.filters.append_to(&mut body);
        }

        if !self.start.is_empty() {
            body.add("starting_after", self.start.as_str());
        }

        if !self.end.is_empty() {
            body.add("ending_before", self.end.as_str());
        }

        if self.limit > 0 {
            body.add("limit", self.limit.min(MAX_LIST_LIMIT).to_string());
        }

        body
    }
}
