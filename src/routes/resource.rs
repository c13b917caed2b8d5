//! Resource CRUD routes: one collection and one member path per entity under `/avengers`.

use crate::entity::{CrimeEvent, Hero, InventoryItem, Resource, Villain};
use crate::handlers::resource::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const API_PREFIX: &str = "/avengers";

/// `GET|POST /avengers/{path}` and `GET|PUT|DELETE /avengers/{path}/:id` for one resource.
fn resource_router<E: Resource>() -> Router<AppState> {
    let collection = format!("{}/{}", API_PREFIX, E::PATH);
    let member = format!("{}/:id", collection);
    Router::new()
        .route(&collection, get(list::<E>).post(create::<E>))
        .route(&member, get(read::<E>).put(update::<E>).delete(delete::<E>))
}

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_router::<Hero>())
        .merge(resource_router::<Villain>())
        .merge(resource_router::<CrimeEvent>())
        .merge(resource_router::<InventoryItem>())
        .with_state(state)
}
