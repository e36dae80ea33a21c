use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
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
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CatalogStats, Category, CreateProduct, Logistics, MediaOrder, MenuQuery, Product,
    ProductMedia, SearchQuery, UnitKey, UpdateProduct, UploadedFile,
};
use crate::projection::{ProductCard, ProductDetail, ProductDetails};
use crate::repository::ProductRepository;
use crate::service::{MediaUploadOutcome, ProductService, UploadFailure, MAX_GALLERY_FILES};

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_product,
        get_menu,
        search_products,
        get_detail,
        admin_raw,
        get_stats,
        update_product,
        delete_product,
        upload_media,
        reorder_media,
    ),
    components(
        schemas(
            Product,
            CreateProduct,
            UpdateProduct,
            Category,
            UnitKey,
            Logistics,
            ProductMedia,
            ProductCard,
            ProductDetail,
            ProductDetails,
            CatalogStats,
            MediaOrder,
            MediaUploadOutcome,
            UploadFailure,
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            UpstreamErrorResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Multilingual product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R, S>(service: ProductService<R, S>) -> Router
where
    R: ProductRepository + 'static,
    S: MediaStore + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_product))
        .route("/menu/{lang}", get(get_menu))
        .route("/search/{lang}", get(search_products))
        .route("/detail/{lang}/{short_id}", get(get_detail))
        .route("/admin/raw", get(admin_raw))
        .route("/stats/count", get(get_stats))
        .route("/{id}", patch(update_product).delete(delete_product))
        .route("/{id}/media", patch(upload_media))
        .route("/{id}/media/reorder", patch(reorder_media))
        .with_state(shared_service)
}

/// Admin: create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Public: one page of menu cards in the requested language
#[utoipa::path(
    get,
    path = "/menu/{lang}",
    tag = "Products",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en or bn"),
        MenuQuery,
        Pagination
    ),
    responses(
        (status = 200, description = "One page of menu cards", body = Paginated<ProductCard>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_menu<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
    Path(lang): Path<String>,
    Query(menu): Query<MenuQuery>,
    Query(pagination): Query<Pagination>,
) -> CatalogResult<Json<Paginated<ProductCard>>> {
    let page = service.menu_cards(&lang, menu.cat, pagination).await?;
    Ok(Json(page))
}

/// Public: search the catalog in the requested language
#[utoipa::path(
    get,
    path = "/search/{lang}",
    tag = "Products",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en or bn"),
        SearchQuery,
        Pagination
    ),
    responses(
        (status = 200, description = "Matching menu cards", body = Paginated<ProductCard>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
    Path(lang): Path<String>,
    Query(search): Query<SearchQuery>,
    Query(pagination): Query<Pagination>,
) -> CatalogResult<Json<Paginated<ProductCard>>> {
    search
        .validate()
        .map_err(|e| CatalogError::Validation(e.to_string()))?;

    let page = service
        .search_cards(&lang, &search.q, search.cat, pagination)
        .await?;
    Ok(Json(page))
}

/// Public: full detail view by public identifier
#[utoipa::path(
    get,
    path = "/detail/{lang}/{short_id}",
    tag = "Products",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en or bn"),
        ("short_id" = String, Path, description = "Public identifier")
    ),
    responses(
        (status = 200, description = "Product detail", body = ProductDetail),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_detail<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
    Path((lang, short_id)): Path<(String, String)>,
) -> CatalogResult<Json<ProductDetail>> {
    let detail = service.detail(&short_id, &lang).await?;
    Ok(Json(detail))
}

/// Admin: one page of raw documents
#[utoipa::path(
    get,
    path = "/admin/raw",
    tag = "Products",
    params(Pagination),
    responses(
        (status = 200, description = "One page of raw products", body = Paginated<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn admin_raw<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
    Query(pagination): Query<Pagination>,
) -> CatalogResult<Json<Paginated<Product>>> {
    let page = service.admin_page(pagination).await?;
    Ok(Json(page))
}

/// System: catalog statistics
#[utoipa::path(
    get,
    path = "/stats/count",
    tag = "Products",
    responses(
        (status = 200, description = "Catalog statistics", body = CatalogStats),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_stats<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
) -> CatalogResult<Json<CatalogStats>> {
    let stats = service.stats().await?;
    Ok(Json(stats))
}

/// Admin: update a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> CatalogResult<Json<Product>> {
    let product = service.update(id, input).await?;
    Ok(Json(product))
}

/// Admin: delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Admin: upload product images (one `thumbnail`, up to 10 `gallery` files)
#[utoipa::path(
    patch,
    path = "/{id}/media",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body(content_type = "multipart/form-data", description = "thumbnail (binary, optional), gallery (binary, repeated)"),
    responses(
        (status = 200, description = "Media uploaded; any failure is reported alongside the updated product", body = MediaUploadOutcome),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upload_media<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> CatalogResult<Json<MediaUploadOutcome>> {
    let mut thumbnail: Option<UploadedFile> = None;
    let mut gallery: Vec<UploadedFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CatalogError::Validation(e.to_string()))?
    {
        let target = match field.name() {
            Some("thumbnail") => "thumbnail",
            Some("gallery") => "gallery",
            _ => continue,
        };

        let name = field
            .file_name()
            .map(ToString::to_string)
            .unwrap_or_else(|| target.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| CatalogError::Validation(e.to_string()))?
            .to_vec();

        let file = UploadedFile { name, bytes };
        if target == "thumbnail" {
            thumbnail = Some(file);
        } else {
            if gallery.len() >= MAX_GALLERY_FILES {
                return Err(CatalogError::Validation(format!(
                    "At most {} gallery files per request",
                    MAX_GALLERY_FILES
                )));
            }
            gallery.push(file);
        }
    }

    let outcome = service.upload_media(id, thumbnail, gallery).await?;
    Ok(Json(outcome))
}

/// Admin: reorder the gallery or swap the thumbnail
#[utoipa::path(
    patch,
    path = "/{id}/media/reorder",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = MediaOrder,
    responses(
        (status = 200, description = "Media rearranged", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn reorder_media<R: ProductRepository, S: MediaStore>(
    State(service): State<Arc<ProductService<R, S>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(order): ValidatedJson<MediaOrder>,
) -> CatalogResult<Json<Product>> {
    let product = service.reorder_media(id, order).await?;
    Ok(Json(product))
}
