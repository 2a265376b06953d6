//! Drug class aggregation
//!
//! The core of the service: for an uncached drug name, query the RxClass API
//! once per relationship category, deduplicate the class names within each
//! category, remap category identifiers to display labels, and cache the
//! assembled result under the raw drug name.

use std::collections::BTreeSet;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cache::ResultStore;
use crate::client::RxClassApi;
use crate::error::Result;

/// RxClass relationship categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CiWith,
    CiMoa,
    CiPe,
    CiChemclass,
    MayTreat,
    HasMoa,
    HasPe,
}

impl Category {
    /// All categories in the order results are presented.
    pub const ALL: [Category; 7] = [
        Category::CiWith,
        Category::CiMoa,
        Category::CiPe,
        Category::CiChemclass,
        Category::MayTreat,
        Category::HasMoa,
        Category::HasPe,
    ];

    /// RxClass `relas` query parameter value
    pub fn rela(&self) -> &'static str {
        match self {
            Category::CiWith => "ci_with",
            Category::CiMoa => "ci_moa",
            Category::CiPe => "ci_pe",
            Category::CiChemclass => "ci_chemclass",
            Category::MayTreat => "may_treat",
            Category::HasMoa => "has_moa",
            Category::HasPe => "has_pe",
        }
    }

    /// Human-readable label used in responses and exports
    pub fn label(&self) -> &'static str {
        match self {
            Category::CiWith => "Contraindications",
            Category::CiMoa => "Contraindications (MoA)",
            Category::CiPe => "Contraindications (Effects)",
            Category::CiChemclass => "Contraindications (Chem)",
            Category::MayTreat => "To Treat",
            Category::HasMoa => "MoA",
            Category::HasPe => "Effects",
        }
    }
}

/// Aggregated classification data for one drug.
///
/// `classes` maps each display label to its deduplicated class list and
/// iterates in `Category::ALL` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub drug_name: String,
    pub classes: IndexMap<String, Vec<String>>,
}

/// Drug class aggregator backed by an RxClass client and a result store.
pub struct DrugClassService<C: RxClassApi> {
    client: Arc<C>,
    store: Arc<dyn ResultStore>,
}

impl<C: RxClassApi> DrugClassService<C> {
    pub fn new(client: Arc<C>, store: Arc<dyn ResultStore>) -> Self {
        Self { client, store }
    }

    /// Look up classification data for `drug_name`.
    ///
    /// A cache hit returns the stored result without touching the upstream
    /// API. On a miss, every category is fetched; if any fetch fails the
    /// whole lookup fails and nothing is cached.
    pub async fn lookup(&self, drug_name: &str) -> Result<LookupResult> {
        if let Some(hit) = self.store.get(drug_name) {
            log::debug!("cache hit for {drug_name:?}");
            return Ok(hit);
        }

        log::debug!("cache miss for {drug_name:?}, querying RxClass");

        let mut classes = IndexMap::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let names = self.client.classes_by_drug(drug_name, category).await?;
            let distinct: BTreeSet<String> = names.into_iter().collect();
            classes.insert(
                category.label().to_string(),
                distinct.into_iter().collect::<Vec<_>>(),
            );
        }

        let result = LookupResult {
            drug_name: drug_name.to_string(),
            classes,
        };
        self.store.put(drug_name, result.clone());

        Ok(result)
    }

    /// Previously fetched result, if any. Never triggers an upstream lookup.
    pub fn cached(&self, drug_name: &str) -> Option<LookupResult> {
        self.store.get(drug_name)
    }
}
