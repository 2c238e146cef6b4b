//! Character CRUD operations and rote assignments.

use std::sync::Arc;

use paradox_wheel_domain::{validate_ratings, Character, CharacterId, CharacterName, RoteId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, RoteRepo};
use crate::use_cases::validation::{require_non_empty_if_present, require_present};

use super::ManagementError;

/// Editable character fields. `None` leaves a field unchanged on update.
#[derive(Debug, Clone, Default)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub faction: Option<String>,
    pub concept: Option<String>,
    pub arete: Option<u8>,
    pub avatar: Option<u8>,
    pub essence: Option<String>,
}

pub struct CharacterCrud {
    character: Arc<dyn CharacterRepo>,
    rote: Arc<dyn RoteRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CharacterCrud {
    pub fn new(
        character: Arc<dyn CharacterRepo>,
        rote: Arc<dyn RoteRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            character,
            rote,
            clock,
        }
    }

    pub async fn list(&self) -> Result<Vec<Character>, ManagementError> {
        Ok(self.character.list().await?)
    }

    pub async fn get(&self, id: CharacterId) -> Result<Option<Character>, ManagementError> {
        Ok(self.character.get(id).await?)
    }

    /// The character together with the rotes assigned to it.
    pub async fn get_with_rotes(
        &self,
        id: CharacterId,
    ) -> Result<Option<(Character, Vec<RoteId>)>, ManagementError> {
        let Some(character) = self.character.get(id).await? else {
            return Ok(None);
        };
        let rote_ids = self.character.list_rote_ids(id).await?;
        Ok(Some((character, rote_ids)))
    }

    pub async fn create(&self, patch: CharacterPatch) -> Result<Character, ManagementError> {
        let name = CharacterName::new(require_present(patch.name, "name")?)?;

        let character = Character::new(name, self.clock.now())
            .with_faction(patch.faction.unwrap_or_default())
            .with_concept(patch.concept.unwrap_or_default())
            .with_essence(patch.essence.unwrap_or_default())
            .with_ratings(patch.arete.unwrap_or(1), patch.avatar.unwrap_or(0))?;

        self.character.save(&character).await?;
        tracing::info!(id = %character.id, name = %character.name, "Character created");
        Ok(character)
    }

    pub async fn update(
        &self,
        id: CharacterId,
        patch: CharacterPatch,
    ) -> Result<Character, ManagementError> {
        require_non_empty_if_present(&patch.name, "name")?;

        let mut character = self
            .character
            .get(id)
            .await?
            .ok_or(ManagementError::NotFound)?;

        if let Some(name) = patch.name {
            character.name = CharacterName::new(name)?;
        }
        if let Some(faction) = patch.faction {
            character.faction = faction;
        }
        if let Some(concept) = patch.concept {
            character.concept = concept;
        }
        if let Some(essence) = patch.essence {
            character.essence = essence;
        }
        let arete = patch.arete.unwrap_or(character.arete);
        let avatar = patch.avatar.unwrap_or(character.avatar);
        validate_ratings(arete, avatar)?;
        character.arete = arete;
        character.avatar = avatar;

        character.touch(self.clock.now());
        self.character.save(&character).await?;
        tracing::info!(id = %character.id, "Character updated");
        Ok(character)
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), ManagementError> {
        self.character.delete(id).await?;
        tracing::info!(id = %id, "Character deleted");
        Ok(())
    }

    /// Assigns a rote; both the character and the rote must exist.
    pub async fn assign_rote(
        &self,
        id: CharacterId,
        rote_id: RoteId,
    ) -> Result<Vec<RoteId>, ManagementError> {
        if self.character.get(id).await?.is_none() {
            return Err(ManagementError::NotFound);
        }
        if self.rote.get(rote_id).await?.is_none() {
            return Err(ManagementError::NotFound);
        }
        self.character.add_rote(id, rote_id).await?;
        tracing::info!(id = %id, rote_id = %rote_id, "Rote assigned");
        Ok(self.character.list_rote_ids(id).await?)
    }

    pub async fn unassign_rote(
        &self,
        id: CharacterId,
        rote_id: RoteId,
    ) -> Result<Vec<RoteId>, ManagementError> {
        self.character.remove_rote(id, rote_id).await?;
        tracing::info!(id = %id, rote_id = %rote_id, "Rote unassigned");
        Ok(self.character.list_rote_ids(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockCharacterRepo, MockRoteRepo, RepoError};
    use chrono::{DateTime, TimeZone, Utc};
    use paradox_wheel_domain::{EntityName, Rote, Sphere};

    fn created_at() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn later() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_900, 0).unwrap()
    }

    fn crud(character: MockCharacterRepo, rote: MockRoteRepo) -> CharacterCrud {
        CharacterCrud::new(
            Arc::new(character),
            Arc::new(rote),
            Arc::new(FixedClock(later())),
        )
    }

    fn dante() -> Character {
        Character::new(CharacterName::new("Dante").unwrap(), created_at())
    }

    #[tokio::test]
    async fn create_requires_a_name() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save().never();

        let err = crud(repo, MockRoteRepo::new())
            .create(CharacterPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn create_defaults_ratings_and_saves() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save()
            .withf(|c| c.name.as_str() == "Dante" && c.arete == 1 && c.avatar == 0)
            .returning(|_| Ok(()));

        let character = crud(repo, MockRoteRepo::new())
            .create(CharacterPatch {
                name: Some("Dante".to_string()),
                faction: Some("Virtual Adepts".to_string()),
                ..CharacterPatch::default()
            })
            .await
            .unwrap();
        assert_eq!(character.faction, "Virtual Adepts");
        assert_eq!(character.created_at, later());
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_arete() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save().never();

        let err = crud(repo, MockRoteRepo::new())
            .create(CharacterPatch {
                name: Some("Dante".to_string()),
                arete: Some(11),
                ..CharacterPatch::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::Domain(_)));
    }

    #[tokio::test]
    async fn update_changes_given_fields_and_touches() {
        let existing = dante();
        let id = existing.id;
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .withf(move |got| *got == id)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save()
            .withf(|c| c.concept == "Hacker" && c.name.as_str() == "Dante")
            .returning(|_| Ok(()));

        let updated = crud(repo, MockRoteRepo::new())
            .update(
                id,
                CharacterPatch {
                    concept: Some("Hacker".to_string()),
                    arete: Some(3),
                    ..CharacterPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.arete, 3);
        assert_eq!(updated.created_at, created_at());
        assert_eq!(updated.updated_at, later());
    }

    #[tokio::test]
    async fn update_missing_character_is_not_found() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let err = crud(repo, MockRoteRepo::new())
            .update(CharacterId::new(), CharacterPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::NotFound));
    }

    #[tokio::test]
    async fn assigning_an_unknown_rote_is_not_found() {
        let character = dante();
        let id = character.id;
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(move |_| Ok(Some(character.clone())));
        repo.expect_add_rote().never();
        let mut rotes = MockRoteRepo::new();
        rotes.expect_get().returning(|_| Ok(None));

        let err = crud(repo, rotes)
            .assign_rote(id, RoteId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::NotFound));
    }

    #[tokio::test]
    async fn assigning_a_rote_returns_the_new_list() {
        let character = dante();
        let id = character.id;
        let rote = Rote::new(
            EntityName::new("Mind Shield").unwrap(),
            [(Sphere::Mind, 1)].into_iter().collect(),
        )
        .unwrap();
        let rote_id = rote.id;

        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(move |_| Ok(Some(character.clone())));
        repo.expect_add_rote()
            .withf(move |c, r| *c == id && *r == rote_id)
            .returning(|_, _| Ok(()));
        repo.expect_list_rote_ids()
            .returning(move |_| Ok(vec![rote_id]));
        let mut rotes = MockRoteRepo::new();
        rotes.expect_get().returning(move |_| Ok(Some(rote.clone())));

        let ids = crud(repo, rotes).assign_rote(id, rote_id).await.unwrap();
        assert_eq!(ids, vec![rote_id]);
    }

    #[tokio::test]
    async fn unassigning_propagates_not_found() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_remove_rote()
            .returning(|_, r| Err(RepoError::not_found("Character rote", r)));

        let err = crud(repo, MockRoteRepo::new())
            .unassign_rote(CharacterId::new(), RoteId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::Repo(e) if e.is_not_found()));
    }
}
