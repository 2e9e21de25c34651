//! Site info endpoints.

use axum::{Json, Router, extract::State, routing::get};
use menuboard_common::AppResult;
use menuboard_core::{InfoImages, UpdateInfoInput};

use crate::{
    extractors::{AuthUser, FormData},
    middleware::AppState,
    response::InfoResponse,
};

/// Create info router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_info).put(update_info))
}

/// Get the site info. Public.
async fn get_info(State(state): State<AppState>) -> AppResult<Json<InfoResponse>> {
    let info = state.info_service.get().await?;
    Ok(Json(info.into()))
}

/// Update the site info.
async fn update_info(
    State(state): State<AppState>,
    _user: AuthUser,
    mut form: FormData,
) -> AppResult<Json<InfoResponse>> {
    let input = UpdateInfoInput {
        title_en: form.string("titleEN"),
        title_az: form.string("titleAZ"),
        phone_numbers: form.list("phoneNumbers"),
        email: form.string("email"),
        address_en: form.string("addressEN"),
        address_az: form.string("addressAZ"),
        instagram: form.string("instagram"),
        facebook: form.string("facebook"),
        whatsapp: form.string("whatsapp"),
    };
    let images = InfoImages {
        logo: form.take_file("logo"),
        background_image: form.take_file("backgroundImage"),
    };

    let info = state.info_service.update(input, images).await?;
    Ok(Json(info.into()))
}
