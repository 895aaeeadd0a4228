use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::beer::{Beer, CreateBeerDto, UpdateBeerDto},
    state::AppState,
};

/// GET /v1/beer
///
/// Returns all stored beers as a JSON array.
pub async fn get_all_beer(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let beers = state.beer.get_all().await?;

    Ok((StatusCode::OK, Json(beers)))
}

/// GET /v1/beer/{id}
///
/// Returns a single beer by id. A non-integer id is rejected by the path
/// extractor with 400; a missing row yields 404.
pub async fn get_beer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let beer = state.beer.get(id).await?;

    Ok((StatusCode::OK, Json(beer)))
}

/// POST /v1/beer
///
/// Creates a beer from the request body. Validation failures return 400 with
/// the full message list; success returns 201 with an empty body.
pub async fn store_beer(
    State(state): State<AppState>,
    payload: Result<Json<CreateBeerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let beer = Beer {
        id: 0,
        name: dto.name,
        kind: dto.kind,
        style: dto.style,
    };

    beer.validate().map_err(AppError::Validation)?;

    state.beer.store(&beer).await?;

    Ok(StatusCode::CREATED)
}

/// PUT /v1/beer/{id}
///
/// Updates a beer. The body may be partial; omitted fields keep their stored
/// values. The merged beer is re-validated before the overwrite.
pub async fn update_beer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateBeerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let mut beer = state.beer.get(id).await?;

    if let Some(name) = dto.name {
        beer.name = name;
    }
    if let Some(kind) = dto.kind {
        beer.kind = kind;
    }
    if let Some(style) = dto.style {
        beer.style = style;
    }

    beer.validate().map_err(AppError::Validation)?;

    state.beer.update(&beer).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/beer/{id}
///
/// Removes a beer by id. Removing an id that never existed is still 204.
pub async fn remove_beer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.beer.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
