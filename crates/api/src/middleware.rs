//! API middleware.

#![allow(missing_docs)]

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use menuboard_common::{Config, StorageService};
use menuboard_core::{
    AuthService, CampaignService, CategoryService, InfoService, ProductService,
    SubCategoryService, TokenIssuer,
};
use menuboard_db::repositories::{
    CampaignRepository, CategoryRepository, InfoRepository, ProductRepository,
    SubCategoryRepository, UserRepository,
};
use sea_orm::DatabaseConnection;

use crate::extractors::InvalidToken;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub category_service: CategoryService,
    pub sub_category_service: SubCategoryService,
    pub product_service: ProductService,
    pub campaign_service: CampaignService,
    pub info_service: InfoService,
}

impl AppState {
    /// Wire repositories and services over one connection pool.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>, storage: StorageService, config: &Config) -> Self {
        let user_repo = UserRepository::new(Arc::clone(&db));
        let category_repo = CategoryRepository::new(Arc::clone(&db));
        let sub_category_repo = SubCategoryRepository::new(Arc::clone(&db));
        let product_repo = ProductRepository::new(Arc::clone(&db));
        let campaign_repo = CampaignRepository::new(Arc::clone(&db));
        let info_repo = InfoRepository::new(db);

        Self {
            auth_service: AuthService::new(
                user_repo,
                TokenIssuer::from_config(&config.auth),
                config.auth.registration_enabled,
            ),
            category_service: CategoryService::new(
                category_repo.clone(),
                sub_category_repo.clone(),
                product_repo.clone(),
                Arc::clone(&storage),
            ),
            sub_category_service: SubCategoryService::new(
                sub_category_repo.clone(),
                category_repo,
                product_repo.clone(),
                Arc::clone(&storage),
            ),
            product_service: ProductService::new(
                product_repo,
                sub_category_repo,
                Arc::clone(&storage),
            ),
            campaign_service: CampaignService::new(campaign_repo, Arc::clone(&storage)),
            info_service: InfoService::new(info_repo, storage),
        }
    }
}

/// Authentication middleware.
///
/// Verifies a bearer token when one is sent and leaves either the claims or
/// an [`InvalidToken`] marker in the request extensions. Routes decide
/// whether authentication is required through the `AuthUser` extractor.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split_whitespace().nth(1))
        .map(ToString::to_string);

    if let Some(token) = token {
        match state.auth_service.tokens().verify(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(_) => {
                req.extensions_mut().insert(InvalidToken);
            }
        }
    }

    next.run(req).await
}
