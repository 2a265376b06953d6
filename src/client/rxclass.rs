//! RxClass API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::{RxClassApi, RxClassResponse};
use crate::config::DEFAULT_RXCLASS_BASE_URL;
use crate::error::{ApiError, Result};
use crate::lookup::Category;

/// Request timeout against the RxClass API
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// RxClass REST API client
pub struct RxClassClient {
    http: HttpClient,
    base_url: String,
}

impl RxClassClient {
    /// Create a client against the public RxNav host
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_RXCLASS_BASE_URL)
    }

    /// Create a client against a specific API root (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RxClassApi for RxClassClient {
    async fn classes_by_drug(&self, drug_name: &str, category: Category) -> Result<Vec<String>> {
        let url = format!("{}/rxclass/class/byDrugName.json", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("drugName", drug_name),
                ("relaSource", "ALL"),
                ("relas", category.rela()),
            ])
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!(
                "RxClass returned {status} for drug {drug_name:?} rela {}",
                category.rela()
            );
            return Err(ApiError::Upstream {
                status: status.as_u16(),
            }
            .into());
        }

        // A body that does not match the expected shape means no classes
        // for this category, not a failed lookup.
        let body = response.text().await.map_err(ApiError::from)?;
        let parsed: RxClassResponse = serde_json::from_str(&body).unwrap_or_default();
        let names = parsed.class_names();

        log::debug!(
            "{} classes for drug {drug_name:?} rela {}",
            names.len(),
            category.rela()
        );

        Ok(names)
    }
}
