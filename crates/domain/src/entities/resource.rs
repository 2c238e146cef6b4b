//! Resource entity - Links to external play aids, published by admins

use chrono::{DateTime, Utc};
use url::Url;

use crate::error::DomainError;
use crate::ids::ResourceId;
use crate::value_objects::EntityName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: ResourceId,
    pub title: EntityName,
    pub url: String,
    pub description: String,
    /// Free-text grouping used by the resource page (e.g. "Sheets", "Tools").
    pub category: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `url` is not an http(s) URL.
    pub fn new(
        title: EntityName,
        url: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let url = url.into();
        validate_url(&url)?;
        Ok(Self {
            id: ResourceId::new(),
            title,
            url: url.trim().to_string(),
            description: String::new(),
            category: String::new(),
            published: false,
            created_at: now,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> Result<(), DomainError> {
        let url = url.into();
        validate_url(&url)?;
        self.url = url.trim().to_string();
        Ok(())
    }
}

fn validate_url(url: &str) -> Result<(), DomainError> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| DomainError::validation(format!("Invalid resource URL {}: {}", url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return Err(DomainError::validation(format!(
            "Resource URL must be http or https: {}",
            url
        )));
    }
    Ok(())
}

/// Listing filter. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub category: Option<String>,
    pub published: Option<bool>,
}

impl ResourceFilter {
    pub fn matches(&self, resource: &Resource) -> bool {
        self.category
            .as_deref()
            .map_or(true, |c| resource.category.eq_ignore_ascii_case(c.trim()))
            && self.published.map_or(true, |p| resource.published == p)
    }
}
