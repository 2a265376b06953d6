//! Mock RxClass client for testing
//!
//! Configured via builder methods; records call counts so tests can verify
//! cache behavior without a network.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::RxClassApi;
use crate::error::{ApiError, Result};
use crate::lookup::Category;

/// Mock API client returning scripted per-category class lists.
#[derive(Default)]
pub struct MockRxClassClient {
    /// Class names per category; unconfigured categories return empty
    classes: HashMap<Category, Vec<String>>,
    /// Categories whose fetch fails with an upstream error
    failing: Vec<Category>,
    /// Total number of classes_by_drug calls
    calls: Mutex<usize>,
}

impl MockRxClassClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the class list returned for `category`
    pub fn with_classes(mut self, category: Category, names: Vec<String>) -> Self {
        self.classes.insert(category, names);
        self
    }

    /// Make fetches for `category` fail with an upstream 500
    pub fn failing_on(mut self, category: Category) -> Self {
        self.failing.push(category);
        self
    }

    /// Number of classes_by_drug calls made so far
    pub async fn call_count(&self) -> usize {
        *self.calls.lock().await
    }
}

#[async_trait]
impl RxClassApi for MockRxClassClient {
    async fn classes_by_drug(&self, _drug_name: &str, category: Category) -> Result<Vec<String>> {
        *self.calls.lock().await += 1;

        if self.failing.contains(&category) {
            return Err(ApiError::Upstream { status: 500 }.into());
        }

        Ok(self.classes.get(&category).cloned().unwrap_or_default())
    }
}
