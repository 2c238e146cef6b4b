//! Mage group (tradition encyclopedia) CRUD operations.

use std::sync::Arc;

use paradox_wheel_domain::{EntityName, MageGroup, MageGroupFilter, MageGroupId, MageGroupType};

use crate::infrastructure::ports::MageGroupRepo;
use crate::use_cases::validation::{require_non_empty_if_present, require_present};

use super::ManagementError;

#[derive(Debug, Clone, Default)]
pub struct MageGroupPatch {
    pub name: Option<String>,
    pub group_type: Option<MageGroupType>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

pub struct MageGroupCrud {
    mage_group: Arc<dyn MageGroupRepo>,
}

impl MageGroupCrud {
    pub fn new(mage_group: Arc<dyn MageGroupRepo>) -> Self {
        Self { mage_group }
    }

    pub async fn list(&self, filter: MageGroupFilter) -> Result<Vec<MageGroup>, ManagementError> {
        let groups = self.mage_group.list().await?;
        Ok(groups.into_iter().filter(|g| filter.matches(g)).collect())
    }

    pub async fn get(&self, id: MageGroupId) -> Result<Option<MageGroup>, ManagementError> {
        Ok(self.mage_group.get(id).await?)
    }

    pub async fn create(&self, patch: MageGroupPatch) -> Result<MageGroup, ManagementError> {
        let name = EntityName::new(require_present(patch.name, "name")?)?;
        let group_type = require_present(patch.group_type, "type")?;

        let group = MageGroup::new(name, group_type)
            .with_summary(patch.summary.unwrap_or_default())
            .with_content(patch.content.unwrap_or_default())
            .published(patch.published.unwrap_or(false));

        self.mage_group.save(&group).await?;
        tracing::info!(id = %group.id, name = %group.name, group_type = %group.group_type, "Mage group created");
        Ok(group)
    }

    pub async fn update(
        &self,
        id: MageGroupId,
        patch: MageGroupPatch,
    ) -> Result<MageGroup, ManagementError> {
        require_non_empty_if_present(&patch.name, "name")?;

        let mut group = self
            .mage_group
            .get(id)
            .await?
            .ok_or(ManagementError::NotFound)?;

        if let Some(name) = patch.name {
            group.name = EntityName::new(name)?;
        }
        if let Some(group_type) = patch.group_type {
            group.group_type = group_type;
        }
        if let Some(summary) = patch.summary {
            group.summary = summary;
        }
        if let Some(content) = patch.content {
            group.content = content;
        }
        if let Some(published) = patch.published {
            group.published = published;
        }

        self.mage_group.save(&group).await?;
        tracing::info!(id = %group.id, "Mage group updated");
        Ok(group)
    }

    pub async fn delete(&self, id: MageGroupId) -> Result<(), ManagementError> {
        self.mage_group.delete(id).await?;
        tracing::info!(id = %id, "Mage group deleted");
        Ok(())
    }
}
