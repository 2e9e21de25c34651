//! Category endpoints.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use menuboard_common::AppResult;
use menuboard_core::{CreateCategoryInput, UpdateCategoryInput};

use crate::{
    extractors::{AuthUser, FormData, IdParam},
    middleware::AppState,
    response::CategoryResponse,
};

const POSITION_MESSAGE: &str = "Position must be number";

/// Create category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

/// List categories with their subcategories.
async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryResponse>>> {
    let categories = state.category_service.list().await?;
    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// Get a category.
async fn get_category(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<CategoryResponse>> {
    let category = state.category_service.get(id).await?;
    Ok(Json(category.into()))
}

/// Create a category.
async fn create_category(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    mut form: FormData,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    let input = CreateCategoryInput {
        title_en: form.text_or_default("titleEN"),
        title_az: form.text_or_default("titleAZ"),
        position: form.required_int("position", POSITION_MESSAGE)?,
    };

    let category = state
        .category_service
        .create(input, form.take_file("image"))
        .await?;
    tracing::debug!(user_id = user.sub, category_id = category.id, "Category created via API");

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Update a category.
async fn update_category(
    State(state): State<AppState>,
    _user: AuthUser,
    IdParam(id): IdParam,
    mut form: FormData,
) -> AppResult<Json<CategoryResponse>> {
    let input = UpdateCategoryInput {
        title_en: form.string("titleEN"),
        title_az: form.string("titleAZ"),
        position: form.int("position", POSITION_MESSAGE)?,
    };

    let category = state
        .category_service
        .update(id, input, form.take_file("image"))
        .await?;

    Ok(Json(category.into()))
}

/// Delete a category with everything underneath it.
async fn delete_category(
    State(state): State<AppState>,
    _user: AuthUser,
    IdParam(id): IdParam,
) -> AppResult<StatusCode> {
    state.category_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
