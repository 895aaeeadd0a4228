use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    controller::beer::{get_all_beer, get_beer, remove_beer, store_beer, update_beer},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/beer", get(get_all_beer))
        .route("/v1/beer", post(store_beer))
        .route("/v1/beer/{id}", get(get_beer))
        .route("/v1/beer/{id}", put(update_beer))
        .route("/v1/beer/{id}", delete(remove_beer))
        .layer(CorsLayer::permissive())
}
