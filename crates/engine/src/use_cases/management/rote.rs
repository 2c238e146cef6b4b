//! Rote CRUD operations and search.

use std::collections::BTreeMap;
use std::sync::Arc;

use paradox_wheel_domain::{EntityName, Rote, RoteFilter, RoteId, Sphere};

use crate::infrastructure::ports::RoteRepo;
use crate::use_cases::validation::{require_non_empty_if_present, require_present};

use super::ManagementError;

/// Editable rote fields. `None` leaves a field unchanged on update.
#[derive(Debug, Clone, Default)]
pub struct RotePatch {
    pub name: Option<String>,
    pub tradition: Option<String>,
    pub description: Option<String>,
    pub spheres: Option<BTreeMap<Sphere, u8>>,
    pub source: Option<String>,
}

pub struct RoteCrud {
    rote: Arc<dyn RoteRepo>,
}

impl RoteCrud {
    pub fn new(rote: Arc<dyn RoteRepo>) -> Self {
        Self { rote }
    }

    /// Rotes matching `filter`, sorted by name.
    pub async fn list(&self, filter: &RoteFilter) -> Result<Vec<Rote>, ManagementError> {
        let rotes = self.rote.list().await?;
        Ok(filter.apply(rotes))
    }

    pub async fn get(&self, id: RoteId) -> Result<Option<Rote>, ManagementError> {
        Ok(self.rote.get(id).await?)
    }

    pub async fn create(&self, patch: RotePatch) -> Result<Rote, ManagementError> {
        let name = EntityName::new(require_present(patch.name, "name")?)?;
        let spheres = require_present(patch.spheres, "spheres")?;

        let rote = Rote::new(name, spheres)?
            .with_tradition(patch.tradition.unwrap_or_default())
            .with_description(patch.description.unwrap_or_default())
            .with_source(patch.source.unwrap_or_default());

        self.rote.save(&rote).await?;
        tracing::info!(id = %rote.id, name = %rote.name, level = rote.level(), "Rote created");
        Ok(rote)
    }

    pub async fn update(&self, id: RoteId, patch: RotePatch) -> Result<Rote, ManagementError> {
        require_non_empty_if_present(&patch.name, "name")?;

        let mut rote = self.rote.get(id).await?.ok_or(ManagementError::NotFound)?;

        if let Some(name) = patch.name {
            rote.name = EntityName::new(name)?;
        }
        if let Some(tradition) = patch.tradition {
            rote.tradition = tradition;
        }
        if let Some(description) = patch.description {
            rote.description = description;
        }
        if let Some(spheres) = patch.spheres {
            rote.set_spheres(spheres)?;
        }
        if let Some(source) = patch.source {
            rote.source = source;
        }

        self.rote.save(&rote).await?;
        tracing::info!(id = %rote.id, "Rote updated");
        Ok(rote)
    }

    pub async fn delete(&self, id: RoteId) -> Result<(), ManagementError> {
        self.rote.delete(id).await?;
        tracing::info!(id = %id, "Rote deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockRoteRepo;

    fn rote(name: &str, tradition: &str, spheres: &[(Sphere, u8)]) -> Rote {
        Rote::new(
            EntityName::new(name).unwrap(),
            spheres.iter().copied().collect(),
        )
        .unwrap()
        .with_tradition(tradition)
    }

    fn library() -> Vec<Rote> {
        vec![
            rote("Wind Walker", "Verbena", &[(Sphere::Forces, 2), (Sphere::Correspondence, 2)]),
            rote("Call Lightning", "Verbena", &[(Sphere::Forces, 3), (Sphere::Matter, 1)]),
            rote("Mind Shield", "Akashic Brotherhood", &[(Sphere::Mind, 1)]),
        ]
    }

    #[tokio::test]
    async fn list_filters_and_sorts() {
        let mut repo = MockRoteRepo::new();
        repo.expect_list().returning(|| Ok(library()));

        let crud = RoteCrud::new(Arc::new(repo));
        let filter = RoteFilter {
            tradition: Some("verbena".to_string()),
            sphere: Some(Sphere::Forces),
            max_level: Some(3),
            ..RoteFilter::default()
        };
        let names: Vec<String> = crud
            .list(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["Call Lightning", "Wind Walker"]);
    }

    #[tokio::test]
    async fn create_requires_spheres() {
        let mut repo = MockRoteRepo::new();
        repo.expect_save().never();
        let crud = RoteCrud::new(Arc::new(repo));

        let err = crud
            .create(RotePatch {
                name: Some("Nothing".to_string()),
                ..RotePatch::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::InvalidInput(_)));

        let err = crud
            .create(RotePatch {
                name: Some("Nothing".to_string()),
                spheres: Some(BTreeMap::new()),
                ..RotePatch::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::Domain(_)));
    }

    #[tokio::test]
    async fn update_replaces_spheres() {
        let existing = rote("Call Lightning", "Verbena", &[(Sphere::Forces, 3)]);
        let id = existing.id;
        let mut repo = MockRoteRepo::new();
        repo.expect_get()
            .withf(move |got| *got == id)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save()
            .withf(|r| r.level() == 4)
            .returning(|_| Ok(()));

        let updated = RoteCrud::new(Arc::new(repo))
            .update(
                id,
                RotePatch {
                    spheres: Some([(Sphere::Forces, 4)].into_iter().collect()),
                    ..RotePatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.tradition, "Verbena");
        assert_eq!(updated.level(), 4);
    }

    #[tokio::test]
    async fn update_rejects_blank_name() {
        let mut repo = MockRoteRepo::new();
        repo.expect_get().never();

        let err = RoteCrud::new(Arc::new(repo))
            .update(
                RoteId::new(),
                RotePatch {
                    name: Some("  ".to_string()),
                    ..RotePatch::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::InvalidInput(_)));
    }
}
