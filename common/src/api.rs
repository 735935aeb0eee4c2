//! Transport seam between resource clients and the billing API.
//!
//! Resource clients only build paths and form bodies; sending the request,
//! authenticating it and decoding the JSON answer is left to an [`Api`]
//! implementation. Tests substitute [`test::FakeApi`].

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::Res;
use crate::form::Form;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport able to perform one authenticated call against the billing API.
///
/// `body` is `None` when the request carries no form body. `dest` is `None`
/// when the caller expects no payload; implementations must not attempt to
/// decode in that case. Any failure is reported through the returned error
/// and callers forward it unchanged.
pub trait Api {
    async fn call<T>(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&Form>,
        dest: Option<&mut T>,
    ) -> Res<()>
    where
        T: DeserializeOwned;
}

impl<A: Api> Api for Arc<A> {
    async fn call<T>(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&Form>,
        dest: Option<&mut T>,
    ) -> Res<()>
    where
        T: DeserializeOwned,
    {
        (**self).call(method, path, token, body, dest).await
    }
}

/// Fake transport for tests.
#[cfg(any(test, feature = "test-api"))]
pub mod test {
    use super::*;
    use crate::error::AppError;
    use serde_json::Value;
    use std::sync::RwLock;

    /// One call seen by [`FakeApi`].
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub method: Method,
        pub path: String,
        pub token: String,
        pub body: Option<Form>,
        /// Whether a decode target was supplied.
        pub decoded: bool,
    }

    /// Records calls and answers them with a canned JSON value or failure.
    #[derive(Default)]
    pub struct FakeApi {
        calls: RwLock<Vec<RecordedCall>>,
        response: RwLock<Option<Value>>,
        failure: RwLock<Option<(u16, String)>>,
    }

    impl FakeApi {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Fake that decodes `response` into every target it is given.
        #[must_use]
        pub fn with_response(response: Value) -> Self {
            let api = Self::new();
            api.respond_with(response);
            api
        }

        /// Fake that rejects every call with an API error.
        #[must_use]
        pub fn with_failure(status: u16, message: impl Into<String>) -> Self {
            let api = Self::new();
            api.fail_with(status, message);
            api
        }

        pub fn respond_with(&self, response: Value) {
            *self.response.write().unwrap() = Some(response);
        }

        pub fn fail_with(&self, status: u16, message: impl Into<String>) {
            *self.failure.write().unwrap() = Some((status, message.into()));
        }

        /// All calls so far (for test assertions).
        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.read().unwrap().clone()
        }

        pub fn last_call(&self) -> Option<RecordedCall> {
            self.calls.read().unwrap().last().cloned()
        }
    }

    impl Api for FakeApi {
        async fn call<T>(
            &self,
            method: Method,
            path: &str,
            token: &str,
            body: Option<&Form>,
            dest: Option<&mut T>,
        ) -> Res<()>
        where
            T: DeserializeOwned,
        {
            self.calls.write().unwrap().push(RecordedCall {
                method,
                path: path.to_string(),
                token: token.to_string(),
                body: body.cloned(),
                decoded: dest.is_some(),
            });

            if let Some((status, message)) = self.failure.read().unwrap().clone() {
                return Err(AppError::Api { status, message });
            }

            if let Some(dest) = dest {
                let response = self
                    .response
                    .read()
                    .unwrap()
                    .clone()
                    .ok_or_else(|| AppError::Transport("no response configured".to_string()))?;
                *dest = serde_json::from_value(response)?;
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test::FakeApi;
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    #[test]
    fn method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[tokio::test]
    async fn fake_decodes_into_target() {
        let api = FakeApi::with_response(json!({ "id": "gold" }));
        let mut dest = serde_json::Value::Null;

        api.call(Method::Get, "/plans/gold", "sk_test", None, Some(&mut dest))
            .await
            .unwrap();

        assert_eq!(dest["id"], "gold");
        let call = api.last_call().unwrap();
        assert_eq!(call.method, Method::Get);
        assert_eq!(call.token, "sk_test");
        assert!(call.decoded);
    }

    #[tokio::test]
    async fn fake_skips_decode_without_target() {
        let api = FakeApi::new();

        api.call::<serde_json::Value>(Method::Delete, "/plans/gold", "sk_test", None, None)
            .await
            .unwrap();

        assert!(!api.last_call().unwrap().decoded);
    }

    #[tokio::test]
    async fn fake_reports_configured_failure() {
        let api = FakeApi::with_failure(402, "card declined");
        let mut dest = serde_json::Value::Null;

        let err = api
            .call(Method::Post, "/plans", "sk_test", None, Some(&mut dest))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Api { status: 402, .. }));
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn shared_transport_through_arc() {
        let api = Arc::new(FakeApi::with_response(json!({})));
        let shared = Arc::clone(&api);
        let mut dest = serde_json::Value::Null;

        shared
            .call(Method::Get, "/plans", "sk_test", None, Some(&mut dest))
            .await
            .unwrap();

        assert_eq!(api.calls().len(), 1);
    }
}
