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

use crate::error::FaqResult;
use crate::models::{CreateFaq, Faq, FaqView, UpdateFaq};
use crate::repository::FaqRepository;
use crate::service::FaqService;

/// OpenAPI documentation for the FAQs API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_faq,
        list_faqs,
        list_faqs_by_lang,
        get_faq_by_lang,
        get_faq,
        get_faq_by_short_id,
        update_faq,
        delete_faq,
    ),
    components(
        schemas(Faq, FaqView, CreateFaq, UpdateFaq),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "FAQs", description = "Multilingual FAQ endpoints")
    )
)]
pub struct ApiDoc;

/// Create the FAQs router with all HTTP endpoints
pub fn router<R: FaqRepository + 'static>(service: FaqService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_faqs).post(create_faq))
        .route("/lang/{lang}", get(list_faqs_by_lang))
        .route("/lang/{lang}/{short_id}", get(get_faq_by_lang))
        .route("/short/{short_id}", get(get_faq_by_short_id))
        .route(
            "/{id}",
            get(get_faq).patch(update_faq).delete(delete_faq),
        )
        .with_state(shared_service)
}

/// Admin: create an FAQ
#[utoipa::path(
    post,
    path = "",
    tag = "FAQs",
    request_body = CreateFaq,
    responses(
        (status = 201, description = "FAQ created", body = Faq),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_faq<R: FaqRepository>(
    State(service): State<Arc<FaqService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateFaq>,
) -> FaqResult<impl IntoResponse> {
    let faq = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

/// Admin: every FAQ, raw, position ascending
#[utoipa::path(
    get,
    path = "",
    tag = "FAQs",
    responses(
        (status = 200, description = "All FAQs", body = Vec<Faq>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_faqs<R: FaqRepository>(
    State(service): State<Arc<FaqService<R>>>,
) -> FaqResult<Json<Vec<Faq>>> {
    let faqs = service.list_all().await?;
    Ok(Json(faqs))
}

/// Public: visible FAQs resolved into the requested language
#[utoipa::path(
    get,
    path = "/lang/{lang}",
    tag = "FAQs",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en or bn")
    ),
    responses(
        (status = 200, description = "Visible FAQs in the requested language", body = Vec<FaqView>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_faqs_by_lang<R: FaqRepository>(
    State(service): State<Arc<FaqService<R>>>,
    Path(lang): Path<String>,
) -> FaqResult<Json<Vec<FaqView>>> {
    let views = service.list_by_lang(&lang).await?;
    Ok(Json(views))
}

/// Public: one visible FAQ by public identifier
#[utoipa::path(
    get,
    path = "/lang/{lang}/{short_id}",
    tag = "FAQs",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en or bn"),
        ("short_id" = String, Path, description = "Public identifier")
    ),
    responses(
        (status = 200, description = "The FAQ in the requested language", body = FaqView),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_faq_by_lang<R: FaqRepository>(
    State(service): State<Arc<FaqService<R>>>,
    Path((lang, short_id)): Path<(String, String)>,
) -> FaqResult<Json<FaqView>> {
    let view = service.get_by_lang_and_short_id(&lang, &short_id).await?;
    Ok(Json(view))
}

/// Admin: raw document by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "FAQs",
    params(
        ("id" = Uuid, Path, description = "FAQ ID")
    ),
    responses(
        (status = 200, description = "FAQ found", body = Faq),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_faq<R: FaqRepository>(
    State(service): State<Arc<FaqService<R>>>,
    Path(id): Path<Uuid>,
) -> FaqResult<Json<Faq>> {
    let faq = service.get(id).await?;
    Ok(Json(faq))
}

/// Admin: raw document by public identifier
#[utoipa::path(
    get,
    path = "/short/{short_id}",
    tag = "FAQs",
    params(
        ("short_id" = String, Path, description = "Public identifier")
    ),
    responses(
        (status = 200, description = "FAQ found", body = Faq),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_faq_by_short_id<R: FaqRepository>(
    State(service): State<Arc<FaqService<R>>>,
    Path(short_id): Path<String>,
) -> FaqResult<Json<Faq>> {
    let faq = service.get_by_short_id(&short_id).await?;
    Ok(Json(faq))
}

/// Admin: update an FAQ (a position change mints a fresh public identifier)
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "FAQs",
    params(
        ("id" = Uuid, Path, description = "FAQ ID")
    ),
    request_body = UpdateFaq,
    responses(
        (status = 200, description = "FAQ updated", body = Faq),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_faq<R: FaqRepository>(
    State(service): State<Arc<FaqService<R>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateFaq>,
) -> FaqResult<Json<Faq>> {
    let faq = service.update(id, input).await?;
    Ok(Json(faq))
}

/// Admin: delete an FAQ
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "FAQs",
    params(
        ("id" = Uuid, Path, description = "FAQ ID")
    ),
    responses(
        (status = 204, description = "FAQ deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_faq<R: FaqRepository>(
    State(service): State<Arc<FaqService<R>>>,
    Path(id): Path<Uuid>,
) -> FaqResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
