use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::LanguageResult;
use crate::models::{CreateLanguage, Language, UpdateLanguage};
use crate::repository::LanguageRepository;
use crate::service::LanguageService;

/// OpenAPI documentation for the Languages API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_language,
        list_languages,
        get_language,
        get_language_by_code,
        languages_by_country,
        update_language,
        delete_language,
    ),
    components(
        schemas(Language, CreateLanguage, UpdateLanguage),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Languages", description = "Language reference data endpoints")
    )
)]
pub struct ApiDoc;

/// Create the languages router with all HTTP endpoints
pub fn router<R: LanguageRepository + 'static>(service: LanguageService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_languages).post(create_language))
        .route("/code/{code}", get(get_language_by_code))
        .route("/country/{country_code}", get(languages_by_country))
        .route(
            "/{id}",
            get(get_language).patch(update_language).delete(delete_language),
        )
        .with_state(shared_service)
}

/// Admin: register a language
#[utoipa::path(
    post,
    path = "",
    tag = "Languages",
    request_body = CreateLanguage,
    responses(
        (status = 201, description = "Language registered", body = Language),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_language<R: LanguageRepository>(
    State(service): State<Arc<LanguageService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateLanguage>,
) -> LanguageResult<impl IntoResponse> {
    let language = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(language)))
}

/// Every language, sorted by label
#[utoipa::path(
    get,
    path = "",
    tag = "Languages",
    responses(
        (status = 200, description = "All languages", body = Vec<Language>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_languages<R: LanguageRepository>(
    State(service): State<Arc<LanguageService<R>>>,
) -> LanguageResult<Json<Vec<Language>>> {
    let languages = service.list().await?;
    Ok(Json(languages))
}

/// Get a language by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Languages",
    params(
        ("id" = Uuid, Path, description = "Language ID")
    ),
    responses(
        (status = 200, description = "Language found", body = Language),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_language<R: LanguageRepository>(
    State(service): State<Arc<LanguageService<R>>>,
    Path(id): Path<Uuid>,
) -> LanguageResult<Json<Language>> {
    let language = service.get(id).await?;
    Ok(Json(language))
}

/// Get a language by code (case-insensitive)
#[utoipa::path(
    get,
    path = "/code/{code}",
    tag = "Languages",
    params(
        ("code" = String, Path, description = "Language code, e.g. bn")
    ),
    responses(
        (status = 200, description = "Language found", body = Language),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_language_by_code<R: LanguageRepository>(
    State(service): State<Arc<LanguageService<R>>>,
    Path(code): Path<String>,
) -> LanguageResult<Json<Language>> {
    let language = service.get_by_code(&code).await?;
    Ok(Json(language))
}

/// Languages spoken in one country (case-insensitive)
#[utoipa::path(
    get,
    path = "/country/{country_code}",
    tag = "Languages",
    params(
        ("country_code" = String, Path, description = "Country code, e.g. BD")
    ),
    responses(
        (status = 200, description = "Matching languages", body = Vec<Language>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn languages_by_country<R: LanguageRepository>(
    State(service): State<Arc<LanguageService<R>>>,
    Path(country_code): Path<String>,
) -> LanguageResult<Json<Vec<Language>>> {
    let languages = service.by_country(&country_code).await?;
    Ok(Json(languages))
}

/// Admin: update a language
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Languages",
    params(
        ("id" = Uuid, Path, description = "Language ID")
    ),
    request_body = UpdateLanguage,
    responses(
        (status = 200, description = "Language updated", body = Language),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_language<R: LanguageRepository>(
    State(service): State<Arc<LanguageService<R>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateLanguage>,
) -> LanguageResult<Json<Language>> {
    let language = service.update(id, input).await?;
    Ok(Json(language))
}

/// Admin: delete a language
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Languages",
    params(
        ("id" = Uuid, Path, description = "Language ID")
    ),
    responses(
        (status = 204, description = "Language deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_language<R: LanguageRepository>(
    State(service): State<Arc<LanguageService<R>>>,
    Path(id): Path<Uuid>,
) -> LanguageResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
