use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        NotFoundResponse, UpstreamErrorResponse,
    },
    Paginated, Pagination, ValidatedJson,
};
use media_store::MediaStore;
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{MediaError, MediaResult};
use crate::models::{Media, MediaCount, MediaFilter, MediaPurpose, RemoteUpload};
use crate::repository::MediaRepository;
use crate::service::MediaService;

/// OpenAPI documentation for the Media API
#[derive(OpenApi)]
#[openapi(
    paths(
        upload_media,
        upload_remote,
        list_media,
        list_all_media,
        count_media,
        media_by_ref,
        get_media,
        delete_media,
    ),
    components(
        schemas(Media, MediaPurpose, MediaCount, RemoteUpload, MediaFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            UpstreamErrorResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Media", description = "Media library endpoints (object storage + MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the media router with all HTTP endpoints
pub fn router<R, S>(service: MediaService<R, S>) -> Router
where
    R: MediaRepository + 'static,
    S: MediaStore + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/upload", post(upload_media))
        .route("/remote", post(upload_remote))
        .route("/", get(list_media))
        .route("/all", get(list_all_media))
        .route("/count", get(count_media))
        .route("/ref/{ref_id}", get(media_by_ref))
        .route("/{id}", get(get_media).delete(delete_media))
        .with_state(shared_service)
}

/// Upload a file into the media library
#[utoipa::path(
    post,
    path = "/upload",
    tag = "Media",
    request_body(content_type = "multipart/form-data", description = "file (binary), purpose (text), refId (text, optional), name (text, optional)"),
    responses(
        (status = 201, description = "Media uploaded and recorded", body = Media),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 502, response = UpstreamErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upload_media<R: MediaRepository, S: MediaStore>(
    State(service): State<Arc<MediaService<R, S>>>,
    mut multipart: Multipart,
) -> MediaResult<impl IntoResponse> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut purpose = MediaPurpose::default();
    let mut ref_id: Option<String> = None;
    let mut name_override: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| MediaError::Validation(e.to_string()))?
    {
        let field_name = field.name().map(ToString::to_string);
        match field_name.as_deref() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "upload".to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| MediaError::Validation(e.to_string()))?;
                file = Some((file_name, bytes.to_vec()));
            }
            Some("purpose") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| MediaError::Validation(e.to_string()))?;
                purpose = value
                    .parse()
                    .map_err(|_| MediaError::Validation(format!("Unknown purpose '{}'", value)))?;
            }
            Some("refId") => {
                ref_id = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| MediaError::Validation(e.to_string()))?,
                );
            }
            Some("name") => {
                name_override = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| MediaError::Validation(e.to_string()))?,
                );
            }
            _ => continue,
        }
    }

    let (file_name, bytes) = file.ok_or_else(|| {
        MediaError::Validation("No file provided in the request".to_string())
    })?;

    let media = service
        .upload_buffer(name_override.unwrap_or(file_name), bytes, purpose, ref_id)
        .await?;
    Ok((StatusCode::CREATED, Json(media)))
}

/// Register a remote asset by URL
#[utoipa::path(
    post,
    path = "/remote",
    tag = "Media",
    request_body = RemoteUpload,
    responses(
        (status = 201, description = "Remote asset fetched and recorded", body = Media),
        (status = 400, response = BadRequestValidationResponse),
        (status = 502, response = UpstreamErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upload_remote<R: MediaRepository, S: MediaStore>(
    State(service): State<Arc<MediaService<R, S>>>,
    ValidatedJson(input): ValidatedJson<RemoteUpload>,
) -> MediaResult<impl IntoResponse> {
    let media = service.upload_remote(input).await?;
    Ok((StatusCode::CREATED, Json(media)))
}

/// List media records, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Media",
    params(MediaFilter, Pagination),
    responses(
        (status = 200, description = "One page of media records", body = Paginated<Media>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_media<R: MediaRepository, S: MediaStore>(
    State(service): State<Arc<MediaService<R, S>>>,
    Query(filter): Query<MediaFilter>,
    Query(pagination): Query<Pagination>,
) -> MediaResult<Json<Paginated<Media>>> {
    let page = service.list(filter.purpose, pagination).await?;
    Ok(Json(page))
}

/// List every media record, newest first
#[utoipa::path(
    get,
    path = "/all",
    tag = "Media",
    params(MediaFilter),
    responses(
        (status = 200, description = "All media records", body = Vec<Media>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_all_media<R: MediaRepository, S: MediaStore>(
    State(service): State<Arc<MediaService<R, S>>>,
    Query(filter): Query<MediaFilter>,
) -> MediaResult<Json<Vec<Media>>> {
    let items = service.list_all(filter.purpose).await?;
    Ok(Json(items))
}

/// Count media records
#[utoipa::path(
    get,
    path = "/count",
    tag = "Media",
    params(MediaFilter),
    responses(
        (status = 200, description = "Record count", body = MediaCount),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_media<R: MediaRepository, S: MediaStore>(
    State(service): State<Arc<MediaService<R, S>>>,
    Query(filter): Query<MediaFilter>,
) -> MediaResult<Json<MediaCount>> {
    let count = service.count(filter.purpose).await?;
    Ok(Json(count))
}

/// Media records back-referencing one owning entity
#[utoipa::path(
    get,
    path = "/ref/{ref_id}",
    tag = "Media",
    params(
        ("ref_id" = String, Path, description = "Owning entity reference")
    ),
    responses(
        (status = 200, description = "Matching media records", body = Vec<Media>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn media_by_ref<R: MediaRepository, S: MediaStore>(
    State(service): State<Arc<MediaService<R, S>>>,
    Path(ref_id): Path<String>,
) -> MediaResult<Json<Vec<Media>>> {
    let items = service.by_ref(&ref_id).await?;
    Ok(Json(items))
}

/// Get a media record by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Media",
    params(
        ("id" = Uuid, Path, description = "Media record ID")
    ),
    responses(
        (status = 200, description = "Media record found", body = Media),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_media<R: MediaRepository, S: MediaStore>(
    State(service): State<Arc<MediaService<R, S>>>,
    Path(id): Path<Uuid>,
) -> MediaResult<Json<Media>> {
    let media = service.get(id).await?;
    Ok(Json(media))
}

/// Delete a media record and its stored asset
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Media",
    params(
        ("id" = Uuid, Path, description = "Media record ID")
    ),
    responses(
        (status = 200, description = "Media deleted", body = Media),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = UpstreamErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_media<R: MediaRepository, S: MediaStore>(
    State(service): State<Arc<MediaService<R, S>>>,
    Path(id): Path<Uuid>,
) -> MediaResult<Json<Media>> {
    let media = service.delete(id).await?;
    Ok(Json(media))
}
