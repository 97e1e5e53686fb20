// staffhub-client/src/client/graphql.rs
// GraphQL 客户端 - 网络通信

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::graphql::{GraphqlRequest, GraphqlResponse};

use crate::error::{ClientError, ClientResult};

/// GraphQL transport trait
///
/// One call posts one operation. The token, when present, is sent as
/// `authorization: Bearer <token>`; when absent no header is sent.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(
        &self,
        request: &GraphqlRequest,
        token: Option<&str>,
    ) -> ClientResult<GraphqlResponse<Value>>;
}

/// 网络 GraphQL 客户端
#[derive(Debug, Clone)]
pub struct NetworkGraphqlClient {
    client: Client,
    endpoint: String,
}

impl NetworkGraphqlClient {
    /// `timeout` in seconds; `None` leaves requests unbounded.
    pub fn new(endpoint: &str, timeout: Option<u64>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.to_string(),
        })
    }

    /// 获取端点 URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn auth_header(token: Option<&str>) -> Option<String> {
        token.map(|t| format!("Bearer {}", t))
    }

    /// Servers may answer a bad request with a non-2xx status and a
    /// GraphQL error body; the body wins over the status.
    fn handle_response(status: StatusCode, text: &str) -> ClientResult<GraphqlResponse<Value>> {
        let parsed = serde_json::from_str::<GraphqlResponse<Value>>(text);
        if status.is_success() {
            return parsed.map_err(|e| ClientError::InvalidResponse(e.to_string()));
        }
        if let Ok(body) = parsed
            && !body.errors.is_empty()
        {
            return Ok(body);
        }
        // 降级到 HTTP 状态码处理
        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text.to_string())),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(text.to_string())),
            _ => Err(ClientError::Rejected {
                message: format!("HTTP {}: {}", status.as_u16(), text),
                code: None,
            }),
        }
    }
}

#[async_trait]
impl GraphqlTransport for NetworkGraphqlClient {
    async fn execute(
        &self,
        request: &GraphqlRequest,
        token: Option<&str>,
    ) -> ClientResult<GraphqlResponse<Value>> {
        let mut req = self.client.post(&self.endpoint).json(request);
        if let Some(auth) = Self::auth_header(token) {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        tracing::debug!(
            operation = request.operation_name.as_deref().unwrap_or("anonymous"),
            authenticated = token.is_some(),
            "GraphQL request"
        );
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        Self::handle_response(status, &text)
    }
}

/// Pull `data.<field>` out of a response.
///
/// An error list becomes an error (first entry wins); a null field is
/// `Ok(None)` so callers can decide what absence means.
pub(crate) fn extract<T: DeserializeOwned>(
    response: GraphqlResponse<Value>,
    field: &str,
) -> ClientResult<Option<T>> {
    if !response.errors.is_empty() {
        return Err(ClientError::from_graphql(&response.errors));
    }
    let mut data = response
        .data
        .ok_or_else(|| ClientError::InvalidResponse("Missing data".into()))?;
    match data.get_mut(field).map(Value::take) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}
