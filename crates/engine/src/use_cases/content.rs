//! Editable site copy.
//!
//! Each scope is a flat key/value map. Reads of a scope that was never
//! written return an empty map; writes merge into what is stored.

use std::sync::Arc;

use paradox_wheel_domain::{validate_entries, ContentEntries, ContentScope};

use crate::infrastructure::ports::ContentRepo;
use crate::use_cases::management::ManagementError;

pub struct ContentOps {
    repo: Arc<dyn ContentRepo>,
}

impl ContentOps {
    pub fn new(repo: Arc<dyn ContentRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, scope: ContentScope) -> Result<ContentEntries, ManagementError> {
        Ok(self.repo.get(scope).await?)
    }

    /// Merges `entries` into the scope and returns the full stored map.
    pub async fn update(
        &self,
        scope: ContentScope,
        entries: ContentEntries,
    ) -> Result<ContentEntries, ManagementError> {
        validate_entries(&entries)?;
        self.repo.upsert(scope, &entries).await?;
        tracing::info!(scope = %scope, keys = entries.len(), "Content updated");
        self.get(scope).await
    }
}
