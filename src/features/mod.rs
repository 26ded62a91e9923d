pub mod demo;
pub mod health;
pub mod languages;
pub mod phonemes;
pub mod response;
pub mod views;

use crate::AppState;
use axum::Router;

/// Every route the server answers, composed from the feature routers.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(health::health_router())
        .merge(languages::languages_router())
        .merge(phonemes::phonemes_router())
        .merge(demo::demo_router())
        .merge(views::views_router())
}
