//! Resource CRUD operations.

use std::sync::Arc;

use paradox_wheel_domain::{EntityName, Resource, ResourceFilter, ResourceId};

use crate::infrastructure::ports::{ClockPort, ResourceRepo};
use crate::use_cases::validation::{require_non_empty_if_present, require_present};

use super::ManagementError;

#[derive(Debug, Clone, Default)]
pub struct ResourcePatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
}

pub struct ResourceCrud {
    resource: Arc<dyn ResourceRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ResourceCrud {
    pub fn new(resource: Arc<dyn ResourceRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { resource, clock }
    }

    pub async fn list(&self, filter: &ResourceFilter) -> Result<Vec<Resource>, ManagementError> {
        let resources = self.resource.list().await?;
        Ok(resources.into_iter().filter(|r| filter.matches(r)).collect())
    }

    pub async fn get(&self, id: ResourceId) -> Result<Option<Resource>, ManagementError> {
        Ok(self.resource.get(id).await?)
    }

    pub async fn create(&self, patch: ResourcePatch) -> Result<Resource, ManagementError> {
        let title = EntityName::new(require_present(patch.title, "title")?)?;
        let url = require_present(patch.url, "url")?;

        let resource = Resource::new(title, url, self.clock.now())?
            .with_description(patch.description.unwrap_or_default())
            .with_category(patch.category.unwrap_or_default())
            .published(patch.published.unwrap_or(false));

        self.resource.save(&resource).await?;
        tracing::info!(id = %resource.id, title = %resource.title, "Resource created");
        Ok(resource)
    }

    pub async fn update(
        &self,
        id: ResourceId,
        patch: ResourcePatch,
    ) -> Result<Resource, ManagementError> {
        require_non_empty_if_present(&patch.title, "title")?;

        let mut resource = self
            .resource
            .get(id)
            .await?
            .ok_or(ManagementError::NotFound)?;

        if let Some(title) = patch.title {
            resource.title = EntityName::new(title)?;
        }
        if let Some(url) = patch.url {
            resource.set_url(url)?;
        }
        if let Some(description) = patch.description {
            resource.description = description;
        }
        if let Some(category) = patch.category {
            resource.category = category;
        }
        if let Some(published) = patch.published {
            resource.published = published;
        }

        self.resource.save(&resource).await?;
        tracing::info!(id = %resource.id, published = resource.published, "Resource updated");
        Ok(resource)
    }

    pub async fn delete(&self, id: ResourceId) -> Result<(), ManagementError> {
        self.resource.delete(id).await?;
        tracing::info!(id = %id, "Resource deleted");
        Ok(())
    }
}
