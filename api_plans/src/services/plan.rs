use common::env_config::Config;
use common::error::Res;
use common::{Api, Form, Method};

use crate::dtos::plan::{PlanListParams, PlanParams};
use crate::models::plan::{Plan, PlanList};

/// Client for the `/plans` resource.
///
/// Holds only the transport and the secret key; every operation is one
/// request and any transport error is returned as is.
pub struct PlanClient<A> {
    api: A,
    token: String,
}

impl<A: Api> PlanClient<A> {
    pub fn new(api: A, token: impl Into<String>) -> Self {
        Self {
            api,
            token: token.into(),
        }
    }

    /// Client authenticated with the configured secret key.
    pub fn from_config(api: A, config: &Config) -> Self {
        Self::new(api, config.stripe_secret_key.as_str())
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Creates a new plan.
    pub async fn create(&self, params: &PlanParams) -> Res<Plan> {
        log::debug!("Creating plan {}", params.id);
        let body = params.create_form();
        self.send(Method::Post, "/plans", Some(&body)).await
    }

    /// Retrieves a plan by id.
    pub async fn get(&self, id: &str) -> Res<Plan> {
        log::debug!("Fetching plan {}", id);
        self.send(Method::Get, &plan_path(id), None).await
    }

    /// Updates name, statement description and metadata of a plan.
    pub async fn update(&self, id: &str, params: &PlanParams) -> Res<Plan> {
        log::debug!("Updating plan {}", id);
        let body = params.update_form();
        self.send(Method::Post, &plan_path(id), Some(&body)).await
    }

    /// Deletes a plan.
    pub async fn delete(&self, id: &str) -> Res<()> {
        log::debug!("Deleting plan {}", id);
        self.api
            .call::<Plan>(Method::Delete, &plan_path(id), &self.token, None, None)
            .await
    }

    /// Lists plans. `None` sends an unfiltered request with server defaults.
    pub async fn list(&self, params: Option<&PlanListParams>) -> Res<PlanList> {
        let body = params.map(PlanListParams::form).unwrap_or_default();
        log::debug!("Listing plans ({} parameters)", body.len());
        self.send(Method::Get, "/plans", Some(&body)).await
    }

    async fn send<T>(&self, method: Method, path: &str, body: Option<&Form>) -> Res<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let mut dest = T::default();
        self.api
            .call(method, path, &self.token, body, Some(&mut dest))
            .await?;
        Ok(dest)
    }
}

fn plan_path(id: &str) -> String {
    format!("/plans/{}", id)
}
