//! HTTP access to the menu server

use serde::Deserialize;
use serde_json::json;
use shared::models::{MenuDoc, MenuSection};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    token: String,
}

/// Thin wrapper around `reqwest::Client` for the menu endpoints.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn menu_url(&self, station: Option<&str>) -> String {
        match station {
            Some(station) => format!("{}/api/menu?station={station}", self.config.base_url),
            None => format!("{}/api/menu", self.config.base_url),
        }
    }

    /// Fetch the menu document for a station. Reads are public.
    pub async fn fetch_menu(&self, station: Option<&str>) -> ClientResult<MenuDoc> {
        let response = self.http.get(self.menu_url(station)).send().await?;
        Self::parse(response).await
    }

    /// Exchange admin credentials for a session token.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<String> {
        let response = self
            .http
            .post(format!("{}/api/auth/login", self.config.base_url))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        let body: LoginBody = Self::parse(response).await?;
        Ok(body.token)
    }

    /// Replace a station's sections wholesale. Requires a session token.
    pub async fn save_menu(
        &self,
        token: &str,
        station: Option<&str>,
        sections: &[MenuSection],
    ) -> ClientResult<()> {
        let response = self
            .http
            .put(self.menu_url(station))
            .bearer_auth(token)
            .json(&json!({ "sections": sections }))
            .send()
            .await?;
        let _: serde_json::Value = Self::parse(response).await?;
        Ok(())
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
