//! HTTP routes.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use paradox_wheel_domain::{
    CharacterBuildState, CharacterId, ContentEntries, ContentScope, DomainError, MageGroupFilter,
    MageGroupId, MeritFilter, MeritId, ResourceFilter, ResourceId, RoteFilter, RoteId, Sphere,
};
use paradox_wheel_shared::{
    BuildCommandRequest, BuildCommandResponse, CharacterDetailResponse, CharacterResponse,
    CharacterRoteRequest, CharacterRotesResponse, CreateCharacterRequest, CreateMageGroupRequest,
    CreateMeritRequest, CreateResourceRequest, CreateRoteRequest, ErrorResponse,
    MageGroupQuery, MageGroupResponse, MeritQuery, MeritResponse, ResourceQuery,
    ResourceResponse, RoteQuery, RoteResponse, UpdateCharacterRequest, UpdateMageGroupRequest,
    UpdateMeritRequest, UpdateResourceRequest, UpdateRoteRequest,
};

use super::auth::AdminGuard;
use super::extract::{JsonBody, QueryParams};
use crate::app::App;
use crate::use_cases::management::{
    CharacterPatch, MageGroupPatch, ManagementError, MeritPatch, ResourcePatch, RotePatch,
};
use crate::use_cases::validation::{parse_keyword, ValidationError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        // Characters
        .route("/api/characters", get(list_characters).post(create_character))
        .route(
            "/api/characters/{id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .route(
            "/api/characters/{id}/rotes",
            post(assign_character_rote).delete(unassign_character_rote),
        )
        // Reference data
        .route("/api/rotes", get(list_rotes).post(create_rote))
        .route(
            "/api/rotes/{id}",
            get(get_rote).put(update_rote).delete(delete_rote),
        )
        .route("/api/merits", get(list_merits).post(create_merit))
        .route(
            "/api/merits/{id}",
            get(get_merit).put(update_merit).delete(delete_merit),
        )
        .route("/api/resources", get(list_resources).post(create_resource))
        .route(
            "/api/resources/{id}",
            get(get_resource).put(update_resource).delete(delete_resource),
        )
        .route(
            "/api/mage-groups",
            get(list_mage_groups).post(create_mage_group),
        )
        .route(
            "/api/mage-groups/{id}",
            get(get_mage_group)
                .put(update_mage_group)
                .delete(delete_mage_group),
        )
        // Character builds
        .route("/api/character-builds/commands", post(run_build_command))
        .route("/api/character-builds/finalize", post(finalize_build))
        .merge(content_routes())
}

/// One GET/PUT pair per content scope, at `/api/{scope}`.
fn content_routes() -> Router<Arc<App>> {
    ContentScope::ALL
        .into_iter()
        .fold(Router::new(), |router, scope| {
            router.route(
                &format!("/api/{}", scope.as_str()),
                get(move |State(app): State<Arc<App>>| get_content(app, scope)).put(
                    move |_admin: AdminGuard,
                          State(app): State<Arc<App>>,
                          JsonBody(entries): JsonBody<ContentEntries>| {
                        update_content(app, scope, entries)
                    },
                ),
            )
        })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn parse_id<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    raw.parse()
        .map_err(|e: DomainError| ApiError::BadRequest(e.to_string()))
}

// =============================================================================
// Characters
// =============================================================================

async fn list_characters(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<CharacterResponse>>, ApiError> {
    let characters = app.use_cases.management.character.list().await?;
    Ok(Json(characters.iter().map(CharacterResponse::from).collect()))
}

async fn create_character(
    State(app): State<Arc<App>>,
    JsonBody(req): JsonBody<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<CharacterResponse>), ApiError> {
    let character = app
        .use_cases
        .management
        .character
        .create(CharacterPatch {
            name: Some(req.name),
            faction: Some(req.faction),
            concept: Some(req.concept),
            arete: req.arete,
            avatar: req.avatar,
            essence: Some(req.essence),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CharacterResponse::from(&character))))
}

async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterDetailResponse>, ApiError> {
    let (character, rote_ids) = app
        .use_cases
        .management
        .character
        .get_with_rotes(parse_id::<CharacterId>(&id)?)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(CharacterDetailResponse {
        character: CharacterResponse::from(&character),
        rote_ids: rote_ids.into_iter().map(RoteId::to_uuid).collect(),
    }))
}

async fn update_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateCharacterRequest>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let character = app
        .use_cases
        .management
        .character
        .update(
            parse_id(&id)?,
            CharacterPatch {
                name: req.name,
                faction: req.faction,
                concept: req.concept,
                arete: req.arete,
                avatar: req.avatar,
                essence: req.essence,
            },
        )
        .await?;
    Ok(Json(CharacterResponse::from(&character)))
}

async fn delete_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .management
        .character
        .delete(parse_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn assign_character_rote(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<CharacterRoteRequest>,
) -> Result<Json<CharacterRotesResponse>, ApiError> {
    let character_id: CharacterId = parse_id(&id)?;
    let rote_ids = app
        .use_cases
        .management
        .character
        .assign_rote(character_id, RoteId::from_uuid(req.rote_id))
        .await?;
    Ok(Json(rotes_response(character_id, rote_ids)))
}

async fn unassign_character_rote(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<CharacterRoteRequest>,
) -> Result<Json<CharacterRotesResponse>, ApiError> {
    let character_id: CharacterId = parse_id(&id)?;
    let rote_ids = app
        .use_cases
        .management
        .character
        .unassign_rote(character_id, RoteId::from_uuid(req.rote_id))
        .await?;
    Ok(Json(rotes_response(character_id, rote_ids)))
}

fn rotes_response(character_id: CharacterId, rote_ids: Vec<RoteId>) -> CharacterRotesResponse {
    CharacterRotesResponse {
        character_id: character_id.to_uuid(),
        rote_ids: rote_ids.into_iter().map(RoteId::to_uuid).collect(),
    }
}

// =============================================================================
// Rotes
// =============================================================================

async fn list_rotes(
    State(app): State<Arc<App>>,
    QueryParams(query): QueryParams<RoteQuery>,
) -> Result<Json<Vec<RoteResponse>>, ApiError> {
    let sphere = query
        .sphere
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_keyword::<Sphere>(s, "sphere"))
        .transpose()?;
    let filter = RoteFilter {
        query: query.query,
        tradition: query.tradition,
        sphere,
        max_level: query.max_level,
    };

    let rotes = app.use_cases.management.rote.list(&filter).await?;
    Ok(Json(rotes.iter().map(RoteResponse::from).collect()))
}

async fn get_rote(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<RoteResponse>, ApiError> {
    let rote = app
        .use_cases
        .management
        .rote
        .get(parse_id::<RoteId>(&id)?)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(RoteResponse::from(&rote)))
}

async fn create_rote(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    JsonBody(req): JsonBody<CreateRoteRequest>,
) -> Result<(StatusCode, Json<RoteResponse>), ApiError> {
    let rote = app
        .use_cases
        .management
        .rote
        .create(RotePatch {
            name: Some(req.name),
            tradition: Some(req.tradition),
            description: Some(req.description),
            spheres: Some(req.spheres),
            source: Some(req.source),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(RoteResponse::from(&rote))))
}

async fn update_rote(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateRoteRequest>,
) -> Result<Json<RoteResponse>, ApiError> {
    let rote = app
        .use_cases
        .management
        .rote
        .update(
            parse_id(&id)?,
            RotePatch {
                name: req.name,
                tradition: req.tradition,
                description: req.description,
                spheres: req.spheres,
                source: req.source,
            },
        )
        .await?;
    Ok(Json(RoteResponse::from(&rote)))
}

async fn delete_rote(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.management.rote.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Merits & flaws
// =============================================================================

async fn list_merits(
    State(app): State<Arc<App>>,
    QueryParams(query): QueryParams<MeritQuery>,
) -> Result<Json<Vec<MeritResponse>>, ApiError> {
    let filter = MeritFilter {
        kind: query
            .kind
            .as_deref()
            .map(|k| parse_keyword(k, "kind"))
            .transpose()?,
        merit_type: query
            .merit_type
            .as_deref()
            .map(|t| parse_keyword(t, "type"))
            .transpose()?,
    };

    let merits = app.use_cases.management.merit.list(filter).await?;
    Ok(Json(merits.iter().map(MeritResponse::from).collect()))
}

async fn get_merit(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MeritResponse>, ApiError> {
    let merit = app
        .use_cases
        .management
        .merit
        .get(parse_id::<MeritId>(&id)?)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(MeritResponse::from(&merit)))
}

async fn create_merit(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    JsonBody(req): JsonBody<CreateMeritRequest>,
) -> Result<(StatusCode, Json<MeritResponse>), ApiError> {
    let merit = app
        .use_cases
        .management
        .merit
        .create(MeritPatch {
            name: Some(req.name),
            kind: Some(req.kind),
            merit_type: Some(req.merit_type),
            min_cost: Some(req.min_cost),
            max_cost: req.max_cost,
            description: Some(req.description),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(MeritResponse::from(&merit))))
}

async fn update_merit(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateMeritRequest>,
) -> Result<Json<MeritResponse>, ApiError> {
    let merit = app
        .use_cases
        .management
        .merit
        .update(
            parse_id(&id)?,
            MeritPatch {
                name: req.name,
                kind: req.kind,
                merit_type: req.merit_type,
                min_cost: req.min_cost,
                max_cost: req.max_cost,
                description: req.description,
            },
        )
        .await?;
    Ok(Json(MeritResponse::from(&merit)))
}

async fn delete_merit(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.management.merit.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Resources
// =============================================================================

async fn list_resources(
    State(app): State<Arc<App>>,
    QueryParams(query): QueryParams<ResourceQuery>,
) -> Result<Json<Vec<ResourceResponse>>, ApiError> {
    let filter = ResourceFilter {
        category: query.category,
        published: query.published,
    };
    let resources = app.use_cases.management.resource.list(&filter).await?;
    Ok(Json(resources.iter().map(ResourceResponse::from).collect()))
}

async fn get_resource(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let resource = app
        .use_cases
        .management
        .resource
        .get(parse_id::<ResourceId>(&id)?)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(ResourceResponse::from(&resource)))
}

async fn create_resource(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    JsonBody(req): JsonBody<CreateResourceRequest>,
) -> Result<(StatusCode, Json<ResourceResponse>), ApiError> {
    let resource = app
        .use_cases
        .management
        .resource
        .create(ResourcePatch {
            title: Some(req.title),
            url: Some(req.url),
            description: Some(req.description),
            category: Some(req.category),
            published: Some(req.published),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ResourceResponse::from(&resource))))
}

async fn update_resource(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateResourceRequest>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let resource = app
        .use_cases
        .management
        .resource
        .update(
            parse_id(&id)?,
            ResourcePatch {
                title: req.title,
                url: req.url,
                description: req.description,
                category: req.category,
                published: req.published,
            },
        )
        .await?;
    Ok(Json(ResourceResponse::from(&resource)))
}

async fn delete_resource(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .management
        .resource
        .delete(parse_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Mage groups
// =============================================================================

async fn list_mage_groups(
    State(app): State<Arc<App>>,
    QueryParams(query): QueryParams<MageGroupQuery>,
) -> Result<Json<Vec<MageGroupResponse>>, ApiError> {
    let filter = MageGroupFilter {
        group_type: query
            .group_type
            .as_deref()
            .map(|t| parse_keyword(t, "type"))
            .transpose()?,
        published: query.published,
    };
    let groups = app.use_cases.management.mage_group.list(filter).await?;
    Ok(Json(groups.iter().map(MageGroupResponse::from).collect()))
}

async fn get_mage_group(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MageGroupResponse>, ApiError> {
    let group = app
        .use_cases
        .management
        .mage_group
        .get(parse_id::<MageGroupId>(&id)?)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(MageGroupResponse::from(&group)))
}

async fn create_mage_group(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    JsonBody(req): JsonBody<CreateMageGroupRequest>,
) -> Result<(StatusCode, Json<MageGroupResponse>), ApiError> {
    let group = app
        .use_cases
        .management
        .mage_group
        .create(MageGroupPatch {
            name: Some(req.name),
            group_type: Some(req.group_type),
            summary: Some(req.summary),
            content: Some(req.content),
            published: Some(req.published),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(MageGroupResponse::from(&group))))
}

async fn update_mage_group(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateMageGroupRequest>,
) -> Result<Json<MageGroupResponse>, ApiError> {
    let group = app
        .use_cases
        .management
        .mage_group
        .update(
            parse_id(&id)?,
            MageGroupPatch {
                name: req.name,
                group_type: req.group_type,
                summary: req.summary,
                content: req.content,
                published: req.published,
            },
        )
        .await?;
    Ok(Json(MageGroupResponse::from(&group)))
}

async fn delete_mage_group(
    _admin: AdminGuard,
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .management
        .mage_group
        .delete(parse_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Content
// =============================================================================

async fn get_content(
    app: Arc<App>,
    scope: ContentScope,
) -> Result<Json<ContentEntries>, ApiError> {
    Ok(Json(app.use_cases.content.get(scope).await?))
}

async fn update_content(
    app: Arc<App>,
    scope: ContentScope,
    entries: ContentEntries,
) -> Result<Json<ContentEntries>, ApiError> {
    Ok(Json(app.use_cases.content.update(scope, entries).await?))
}

// =============================================================================
// Character builds
// =============================================================================

async fn run_build_command(
    State(app): State<Arc<App>>,
    JsonBody(req): JsonBody<BuildCommandRequest>,
) -> Result<Json<BuildCommandResponse>, ApiError> {
    let (state, outcome) = app.use_cases.build.run_command(req.state, req.command)?;
    Ok(Json(BuildCommandResponse::new(state, outcome)))
}

async fn finalize_build(
    State(app): State<Arc<App>>,
    JsonBody(state): JsonBody<CharacterBuildState>,
) -> Result<(StatusCode, Json<CharacterResponse>), ApiError> {
    let character = app.use_cases.build.finalize(&state).await?;
    Ok((StatusCode::CREATED, Json(CharacterResponse::from(&character))))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Unauthorized(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::NotFound => ApiError::NotFound,
            ManagementError::InvalidInput(msg) | ManagementError::Domain(msg) => {
                ApiError::BadRequest(msg)
            }
            ManagementError::Repo(e) if e.is_not_found() => ApiError::NotFound,
            ManagementError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
