use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use sea_orm::DbErr;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{
    error::AppError,
    model::beer::{Beer, BeerStyle, BeerType},
    router,
    service::beer::BeerService,
    state::AppState,
};

mod get_all;
mod remove;

/// In-memory fake implementing the beer capability set.
///
/// Mirrors the repository's observable semantics: store-assigned ids, a
/// unique-name constraint surfaced as a storage error, zero-id guards, a
/// no-op remove for missing ids. `failing` forces every operation to return
/// a storage error for the 500 paths.
#[derive(Default)]
struct FakeBeerService {
    beers: Mutex<Vec<Beer>>,
    next_id: AtomicI64,
    failing: bool,
}

impl FakeBeerService {
    fn new() -> Self {
        Self {
            beers: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            failing: false,
        }
    }

    fn with_beers(beers: Vec<Beer>) -> Self {
        let next = beers.iter().map(|beer| beer.id).max().unwrap_or(0) + 1;
        Self {
            beers: Mutex::new(beers),
            next_id: AtomicI64::new(next),
            failing: false,
        }
    }

    fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    fn storage_error(&self) -> AppError {
        AppError::DbErr(DbErr::Custom("storage unavailable".to_string()))
    }
}

#[async_trait]
impl BeerService for FakeBeerService {
    async fn get_all(&self) -> Result<Vec<Beer>, AppError> {
        if self.failing {
            return Err(self.storage_error());
        }

        Ok(self.beers.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<Beer, AppError> {
        if self.failing {
            return Err(self.storage_error());
        }

        self.beers
            .lock()
            .unwrap()
            .iter()
            .find(|beer| beer.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("beer {} not found", id)))
    }

    async fn store(&self, beer: &Beer) -> Result<i64, AppError> {
        if self.failing {
            return Err(self.storage_error());
        }

        let mut beers = self.beers.lock().unwrap();
        if beers.iter().any(|existing| existing.name == beer.name) {
            return Err(AppError::DbErr(DbErr::Custom(
                "UNIQUE constraint failed: beer.name".to_string(),
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        beers.push(Beer { id, ..beer.clone() });

        Ok(id)
    }

    async fn update(&self, beer: &Beer) -> Result<(), AppError> {
        if self.failing {
            return Err(self.storage_error());
        }

        if beer.id == 0 {
            return Err(AppError::BadRequest("invalid beer id".to_string()));
        }

        let mut beers = self.beers.lock().unwrap();
        let existing = beers
            .iter_mut()
            .find(|existing| existing.id == beer.id)
            .ok_or_else(|| AppError::NotFound(format!("beer {} not found", beer.id)))?;

        *existing = beer.clone();

        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<(), AppError> {
        if self.failing {
            return Err(self.storage_error());
        }

        if id == 0 {
            return Err(AppError::BadRequest("invalid beer id".to_string()));
        }

        self.beers.lock().unwrap().retain(|beer| beer.id != id);

        Ok(())
    }
}

fn app(service: Arc<FakeBeerService>) -> Router {
    router::router().with_state(AppState::new(service))
}

fn sample_beer(id: i64, name: &str) -> Beer {
    Beer {
        id,
        name: name.to_string(),
        kind: BeerType::LAGER,
        style: BeerStyle::PALE,
    }
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
