//! HTTP route handlers for the back office.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Health check (in main)
//!
//! # Auth
//! POST /api/auth/login             - Admin login
//! POST /api/auth/logout            - Admin logout
//!
//! # Everything below requires an authenticated admin
//! GET  /api/dashboard              - Entity counts
//! GET/POST /api/artworks           - List / create artworks
//! DELETE   /api/artworks/{id}      - Delete artwork
//! GET/POST /api/categories         - List / create categories
//! DELETE   /api/categories/{id}    - Delete category
//! GET/POST /api/artists            - List / create artists
//! PUT/DELETE /api/artists/{id}     - Update / delete artist
//! GET  /api/orders                 - All orders, newest first
//! GET/PUT /api/settings            - Site-settings singleton
//! POST /api/media                  - Multipart image upload
//! ```

pub mod artists;
pub mod artworks;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod media;
pub mod orders;
pub mod settings;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create all routes for the back office.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/dashboard", get(dashboard::overview))
        .route(
            "/api/artworks",
            get(artworks::list).post(artworks::create),
        )
        .route("/api/artworks/{id}", axum::routing::delete(artworks::delete))
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/api/categories/{id}",
            axum::routing::delete(categories::delete),
        )
        .route("/api/artists", get(artists::list).post(artists::create))
        .route(
            "/api/artists/{id}",
            put(artists::update).delete(artists::delete),
        )
        .route("/api/orders", get(orders::list))
        .route("/api/settings", get(settings::show).put(settings::update))
        .route("/api/media", post(media::upload))
}
