//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Health check (in main)
//!
//! # Catalog
//! GET  /api/catalog                 - Filtered/sorted/searched gallery
//! GET  /api/artworks/{id}           - Single artwork
//! POST /api/artworks                - Submit artwork (requires auth)
//! POST   /api/artworks/{id}/like    - Like
//! DELETE /api/artworks/{id}/like    - Unlike
//!
//! # Site data
//! GET  /api/categories              - Category list
//! GET  /api/artists                 - Featured artists
//! GET  /api/settings                - Site-settings singleton (cached)
//!
//! # Checkout
//! POST /api/create-order            - Raw payment-intent endpoint
//! POST /api/checkout/{id}           - Submit shipping address
//! POST /api/checkout/{id}/confirm   - Provider confirmation callback
//! POST /api/checkout/{id}/dismiss   - Provider surface dismissed
//!
//! # Auth
//! POST /api/auth/register           - Create shopper account
//! POST /api/auth/login              - Login
//! POST /api/auth/logout             - Logout
//! GET  /api/auth/me                 - Current shopper, if any
//! ```

pub mod artworks;
pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod meta;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", post(checkout::submit))
        .route("/{id}/confirm", post(checkout::confirm))
        .route("/{id}/dismiss", post(checkout::dismiss))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/catalog", get(catalog::index))
        .route("/api/artworks", post(artworks::submit))
        .route("/api/artworks/{id}", get(catalog::show))
        .route(
            "/api/artworks/{id}/like",
            post(artworks::like).delete(artworks::unlike),
        )
        .route("/api/categories", get(meta::categories))
        .route("/api/artists", get(meta::artists))
        .route("/api/settings", get(meta::settings))
        .route("/api/create-order", post(checkout::create_order))
        .nest("/api/checkout", checkout_routes())
        .nest("/api/auth", auth_routes())
}
