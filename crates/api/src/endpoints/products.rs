//! Product endpoints.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use menuboard_common::AppResult;
use menuboard_core::{CreateProductInput, UpdateProductInput};

use crate::{
    extractors::{AuthUser, FormData, IdParam},
    middleware::AppState,
    response::ProductResponse,
};

const POSITION_MESSAGE: &str = "Position must be number";
const PRICE_MESSAGE: &str = "Price must be number";
const SUB_CATEGORY_ID_MESSAGE: &str = "SubCategory ID must be number";

/// Create product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state.product_service.list().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

async fn get_product(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<ProductResponse>> {
    let product = state.product_service.get(id).await?;
    Ok(Json(product.into()))
}

async fn create_product(
    State(state): State<AppState>,
    _user: AuthUser,
    mut form: FormData,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let input = CreateProductInput {
        title_en: form.text_or_default("titleEN"),
        title_az: form.text_or_default("titleAZ"),
        desc_en: form.text_or_default("descEN"),
        desc_az: form.text_or_default("descAZ"),
        price: form.required_number("price", PRICE_MESSAGE)?,
        gram: form.text_or_default("gram"),
        is_combo: form.boolean("isCombo")?.unwrap_or(false),
        ingridients_en: form.list("ingridientsEN").unwrap_or_default(),
        ingridients_az: form.list("ingridientsAZ").unwrap_or_default(),
        position: form.int("position", POSITION_MESSAGE)?,
        sub_category_id: form.required_int("subCategoryId", SUB_CATEGORY_ID_MESSAGE)?,
    };

    let product = state
        .product_service
        .create(input, form.take_file("image"))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

async fn update_product(
    State(state): State<AppState>,
    _user: AuthUser,
    IdParam(id): IdParam,
    mut form: FormData,
) -> AppResult<Json<ProductResponse>> {
    let input = UpdateProductInput {
        title_en: form.string("titleEN"),
        title_az: form.string("titleAZ"),
        desc_en: form.string("descEN"),
        desc_az: form.string("descAZ"),
        price: form.number("price", PRICE_MESSAGE)?,
        gram: form.string("gram"),
        is_combo: form.boolean("isCombo")?,
        ingridients_en: form.list("ingridientsEN"),
        ingridients_az: form.list("ingridientsAZ"),
        position: form.int("position", POSITION_MESSAGE)?,
        sub_category_id: form.int("subCategoryId", SUB_CATEGORY_ID_MESSAGE)?,
    };

    let product = state
        .product_service
        .update(id, input, form.take_file("image"))
        .await?;

    Ok(Json(product.into()))
}

async fn delete_product(
    State(state): State<AppState>,
    _user: AuthUser,
    IdParam(id): IdParam,
) -> AppResult<StatusCode> {
    state.product_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
