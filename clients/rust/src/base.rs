use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

const ADMIN_SECRET_HEADER: &str = "tt-reminders-admin-secret";

#[derive(Debug, Clone)]
pub(crate) struct BaseClient {
    client: Client,
    address: String,
    user_token: Option<String>,
    admin_secret: Option<String>,
}

#[derive(Debug)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub status: Option<StatusCode>,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address: address.trim_end_matches('/').to_string(),
            user_token: None,
            admin_secret: None,
        }
    }

    pub fn set_user_token(&mut self, token: String) {
        self.user_token = Some(token);
    }

    pub fn set_admin_secret(&mut self, secret: String) {
        self.admin_secret = Some(secret);
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.address, path)
    }

    fn authorize(&self, mut req: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.user_token {
            req = req.bearer_auth(token);
        }
        if let Some(secret) = &self.admin_secret {
            req = req.header(ADMIN_SECRET_HEADER, secret);
        }
        req
    }

    async fn handle_api_response<T: DeserializeOwned>(
        req: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = req.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            status: None,
            message: e.to_string(),
        })?;

        let status = res.status();
        if status != expected_status_code {
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode,
                status: Some(status),
                message: res.text().await.unwrap_or_default(),
            });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            status: Some(status),
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.authorize(self.client.get(self.url(&path)));
        Self::handle_api_response(req, expected_status_code).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.authorize(self.client.delete(self.url(&path)));
        Self::handle_api_response(req, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.authorize(self.client.post(self.url(&path)).json(&body));
        Self::handle_api_response(req, expected_status_code).await
    }

    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.authorize(self.client.post(self.url(&path)));
        Self::handle_api_response(req, expected_status_code).await
    }
}
