//! Avengers API: CRUD REST backend for heroes, villains, crime events and inventory items.

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use entity::{decode_record, CrimeEvent, Hero, IdAssignment, InventoryItem, Resource, Villain};
pub use error::{AppError, ConfigError};
pub use routes::{build_router, common_routes, resource_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_tables};
