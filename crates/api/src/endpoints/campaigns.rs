//! Campaign endpoints.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use menuboard_common::AppResult;
use menuboard_core::{CreateCampaignInput, UpdateCampaignInput};

use crate::{
    extractors::{AuthUser, FormData, IdParam},
    middleware::AppState,
    response::CampaignResponse,
};

/// Create campaign router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_campaigns).post(create_campaign))
        .route(
            "/{id}",
            get(get_campaign)
                .put(update_campaign)
                .delete(delete_campaign),
        )
}

async fn list_campaigns(State(state): State<AppState>) -> AppResult<Json<Vec<CampaignResponse>>> {
    let campaigns = state.campaign_service.list().await?;
    Ok(Json(campaigns.into_iter().map(CampaignResponse::from).collect()))
}

async fn get_campaign(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<CampaignResponse>> {
    let campaign = state.campaign_service.get(id).await?;
    Ok(Json(campaign.into()))
}

async fn create_campaign(
    State(state): State<AppState>,
    _user: AuthUser,
    mut form: FormData,
) -> AppResult<(StatusCode, Json<CampaignResponse>)> {
    let input = CreateCampaignInput {
        title_en: form.text_or_default("titleEN"),
        title_az: form.text_or_default("titleAZ"),
        text_en: form.text_or_default("textEN"),
        text_az: form.text_or_default("textAZ"),
    };

    let campaign = state
        .campaign_service
        .create(input, form.take_file("image"))
        .await?;

    Ok((StatusCode::CREATED, Json(campaign.into())))
}

async fn update_campaign(
    State(state): State<AppState>,
    _user: AuthUser,
    IdParam(id): IdParam,
    mut form: FormData,
) -> AppResult<Json<CampaignResponse>> {
    let input = UpdateCampaignInput {
        title_en: form.string("titleEN"),
        title_az: form.string("titleAZ"),
        text_en: form.string("textEN"),
        text_az: form.string("textAZ"),
    };

    let campaign = state
        .campaign_service
        .update(id, input, form.take_file("image"))
        .await?;

    Ok(Json(campaign.into()))
}

async fn delete_campaign(
    State(state): State<AppState>,
    _user: AuthUser,
    IdParam(id): IdParam,
) -> AppResult<StatusCode> {
    state.campaign_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
