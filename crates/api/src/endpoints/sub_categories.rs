//! Subcategory endpoints.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use menuboard_common::AppResult;
use menuboard_core::{CreateSubCategoryInput, UpdateSubCategoryInput};

use crate::{
    extractors::{AuthUser, FormData, IdParam},
    middleware::AppState,
    response::SubCategoryResponse,
};

const POSITION_MESSAGE: &str = "Position must be number";
const CATEGORY_ID_MESSAGE: &str = "Category ID must be number";

/// Create subcategory router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sub_categories).post(create_sub_category))
        .route(
            "/{id}",
            get(get_sub_category)
                .put(update_sub_category)
                .delete(delete_sub_category),
        )
}

async fn list_sub_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SubCategoryResponse>>> {
    let sub_categories = state.sub_category_service.list().await?;
    Ok(Json(
        sub_categories
            .into_iter()
            .map(SubCategoryResponse::from)
            .collect(),
    ))
}

async fn get_sub_category(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<SubCategoryResponse>> {
    let sub_category = state.sub_category_service.get(id).await?;
    Ok(Json(sub_category.into()))
}

async fn create_sub_category(
    State(state): State<AppState>,
    _user: AuthUser,
    form: FormData,
) -> AppResult<(StatusCode, Json<SubCategoryResponse>)> {
    let input = CreateSubCategoryInput {
        title_en: form.text_or_default("titleEN"),
        title_az: form.text_or_default("titleAZ"),
        position: form.required_int("position", POSITION_MESSAGE)?,
        category_id: form.required_int("categoryId", CATEGORY_ID_MESSAGE)?,
    };

    let sub_category = state.sub_category_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(sub_category.into())))
}

async fn update_sub_category(
    State(state): State<AppState>,
    _user: AuthUser,
    IdParam(id): IdParam,
    form: FormData,
) -> AppResult<Json<SubCategoryResponse>> {
    let input = UpdateSubCategoryInput {
        title_en: form.string("titleEN"),
        title_az: form.string("titleAZ"),
        position: form.int("position", POSITION_MESSAGE)?,
        category_id: form.int("categoryId", CATEGORY_ID_MESSAGE)?,
    };

    let sub_category = state.sub_category_service.update(id, input).await?;
    Ok(Json(sub_category.into()))
}

async fn delete_sub_category(
    State(state): State<AppState>,
    _user: AuthUser,
    IdParam(id): IdParam,
) -> AppResult<StatusCode> {
    state.sub_category_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
