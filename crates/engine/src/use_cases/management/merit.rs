//! Merit and flaw CRUD operations.

use std::sync::Arc;

use paradox_wheel_domain::{
    EntityName, Merit, MeritCost, MeritFilter, MeritId, MeritKind, MeritType,
};

use crate::infrastructure::ports::MeritRepo;
use crate::use_cases::validation::{require_non_empty_if_present, require_present};

use super::ManagementError;

/// Editable merit fields. `None` leaves a field unchanged on update.
///
/// A missing `max_cost` on create means a fixed cost.
#[derive(Debug, Clone, Default)]
pub struct MeritPatch {
    pub name: Option<String>,
    pub kind: Option<MeritKind>,
    pub merit_type: Option<MeritType>,
    pub min_cost: Option<u8>,
    pub max_cost: Option<u8>,
    pub description: Option<String>,
}

pub struct MeritCrud {
    merit: Arc<dyn MeritRepo>,
}

impl MeritCrud {
    pub fn new(merit: Arc<dyn MeritRepo>) -> Self {
        Self { merit }
    }

    pub async fn list(&self, filter: MeritFilter) -> Result<Vec<Merit>, ManagementError> {
        let merits = self.merit.list().await?;
        Ok(merits.into_iter().filter(|m| filter.matches(m)).collect())
    }

    pub async fn get(&self, id: MeritId) -> Result<Option<Merit>, ManagementError> {
        Ok(self.merit.get(id).await?)
    }

    pub async fn create(&self, patch: MeritPatch) -> Result<Merit, ManagementError> {
        let name = EntityName::new(require_present(patch.name, "name")?)?;
        let kind = require_present(patch.kind, "kind")?;
        let merit_type = require_present(patch.merit_type, "type")?;
        let min_cost = require_present(patch.min_cost, "minCost")?;
        let cost = MeritCost::new(min_cost, patch.max_cost.unwrap_or(min_cost))?;

        let merit = Merit::new(name, kind, merit_type, cost)
            .with_description(patch.description.unwrap_or_default());

        self.merit.save(&merit).await?;
        tracing::info!(id = %merit.id, name = %merit.name, kind = %merit.kind, "Merit created");
        Ok(merit)
    }

    pub async fn update(&self, id: MeritId, patch: MeritPatch) -> Result<Merit, ManagementError> {
        require_non_empty_if_present(&patch.name, "name")?;

        let mut merit = self.merit.get(id).await?.ok_or(ManagementError::NotFound)?;

        if let Some(name) = patch.name {
            merit.name = EntityName::new(name)?;
        }
        if let Some(kind) = patch.kind {
            merit.kind = kind;
        }
        if let Some(merit_type) = patch.merit_type {
            merit.merit_type = merit_type;
        }
        if patch.min_cost.is_some() || patch.max_cost.is_some() {
            merit.cost = MeritCost::new(
                patch.min_cost.unwrap_or(merit.cost.min()),
                patch.max_cost.unwrap_or(merit.cost.max()),
            )?;
        }
        if let Some(description) = patch.description {
            merit.description = description;
        }

        self.merit.save(&merit).await?;
        tracing::info!(id = %merit.id, "Merit updated");
        Ok(merit)
    }

    pub async fn delete(&self, id: MeritId) -> Result<(), ManagementError> {
        self.merit.delete(id).await?;
        tracing::info!(id = %id, "Merit deleted");
        Ok(())
    }
}
