use std::collections::BTreeMap;

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

use crate::error::PageResult;
use crate::models::{CreatePage, Page, PageView, Seo, SeoView, UpdatePage};
use crate::repository::PageRepository;
use crate::service::PageService;

/// OpenAPI documentation for the Pages API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_page,
        get_registry,
        get_page_view,
        list_pages,
        get_page,
        update_page,
        delete_page,
    ),
    components(
        schemas(Page, PageView, Seo, SeoView, CreatePage, UpdatePage),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Pages", description = "Static page registry endpoints")
    )
)]
pub struct ApiDoc;

/// Create the pages router with all HTTP endpoints
pub fn router<R: PageRepository + 'static>(service: PageService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_pages).post(create_page))
        .route("/registry/{lang}", get(get_registry))
        .route("/view/{lang}/{key}", get(get_page_view))
        .route(
            "/{key}",
            get(get_page).patch(update_page).delete(delete_page),
        )
        .with_state(shared_service)
}

/// Admin: create a page
#[utoipa::path(
    post,
    path = "",
    tag = "Pages",
    request_body = CreatePage,
    responses(
        (status = 201, description = "Page created", body = Page),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_page<R: PageRepository>(
    State(service): State<Arc<PageService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePage>,
) -> PageResult<impl IntoResponse> {
    let page = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// Public: every page resolved into the requested language, keyed by page key
#[utoipa::path(
    get,
    path = "/registry/{lang}",
    tag = "Pages",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en or bn")
    ),
    responses(
        (status = 200, description = "Registry of resolved pages", body = BTreeMap<String, PageView>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_registry<R: PageRepository>(
    State(service): State<Arc<PageService<R>>>,
    Path(lang): Path<String>,
) -> PageResult<Json<BTreeMap<String, PageView>>> {
    let registry = service.registry(&lang).await?;
    Ok(Json(registry))
}

/// Public: one page resolved into the requested language
#[utoipa::path(
    get,
    path = "/view/{lang}/{key}",
    tag = "Pages",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en or bn"),
        ("key" = String, Path, description = "Stable page key")
    ),
    responses(
        (status = 200, description = "The resolved page", body = PageView),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_page_view<R: PageRepository>(
    State(service): State<Arc<PageService<R>>>,
    Path((lang, key)): Path<(String, String)>,
) -> PageResult<Json<PageView>> {
    let view = service.view(&key, &lang).await?;
    Ok(Json(view))
}

/// Admin: every page, raw
#[utoipa::path(
    get,
    path = "",
    tag = "Pages",
    responses(
        (status = 200, description = "All pages", body = Vec<Page>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_pages<R: PageRepository>(
    State(service): State<Arc<PageService<R>>>,
) -> PageResult<Json<Vec<Page>>> {
    let pages = service.list_all().await?;
    Ok(Json(pages))
}

/// Admin: raw page by key
#[utoipa::path(
    get,
    path = "/{key}",
    tag = "Pages",
    params(
        ("key" = String, Path, description = "Stable page key")
    ),
    responses(
        (status = 200, description = "Page found", body = Page),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_page<R: PageRepository>(
    State(service): State<Arc<PageService<R>>>,
    Path(key): Path<String>,
) -> PageResult<Json<Page>> {
    let page = service.get(&key).await?;
    Ok(Json(page))
}

/// Admin: update a page (the key itself is immutable)
#[utoipa::path(
    patch,
    path = "/{key}",
    tag = "Pages",
    params(
        ("key" = String, Path, description = "Stable page key")
    ),
    request_body = UpdatePage,
    responses(
        (status = 200, description = "Page updated", body = Page),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_page<R: PageRepository>(
    State(service): State<Arc<PageService<R>>>,
    Path(key): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdatePage>,
) -> PageResult<Json<Page>> {
    let page = service.update(&key, input).await?;
    Ok(Json(page))
}

/// Admin: delete a page
#[utoipa::path(
    delete,
    path = "/{key}",
    tag = "Pages",
    params(
        ("key" = String, Path, description = "Stable page key")
    ),
    responses(
        (status = 204, description = "Page deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_page<R: PageRepository>(
    State(service): State<Arc<PageService<R>>>,
    Path(key): Path<String>,
) -> PageResult<impl IntoResponse> {
    service.delete(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}
