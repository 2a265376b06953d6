//! RxClass API client

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::lookup::Category;

#[cfg(test)]
pub mod mock;
pub mod rxclass;

#[cfg(test)]
pub use mock::MockRxClassClient;
pub use rxclass::RxClassClient;

/// RxClass API client trait
#[async_trait]
pub trait RxClassApi: Send + Sync {
    /// Class names related to `drug_name` through `category`, across all
    /// relationship sources. Duplicates may be present; callers deduplicate.
    async fn classes_by_drug(&self, drug_name: &str, category: Category) -> Result<Vec<String>>;
}

/// Response shape of `GET /rxclass/class/byDrugName.json`
#[derive(Debug, Default, Deserialize)]
pub struct RxClassResponse {
    #[serde(rename = "rxclassDrugInfoList")]
    pub drug_info_list: Option<RxClassDrugInfoList>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RxClassDrugInfoList {
    #[serde(rename = "rxclassDrugInfo", default)]
    pub drug_info: Vec<RxClassDrugInfo>,
}

#[derive(Debug, Deserialize)]
pub struct RxClassDrugInfo {
    #[serde(rename = "rxclassMinConceptItem")]
    pub min_concept: RxClassMinConcept,
}

/// Classification concept as returned by RxClass
#[derive(Debug, Deserialize)]
pub struct RxClassMinConcept {
    #[serde(rename = "className")]
    pub class_name: String,
}

impl RxClassResponse {
    /// Class names carried by the response; empty when the expected field
    /// is absent.
    pub fn class_names(self) -> Vec<String> {
        self.drug_info_list
            .map(|list| {
                list.drug_info
                    .into_iter()
                    .map(|info| info.min_concept.class_name)
                    .collect()
            })
            .unwrap_or_default()
    }
}
