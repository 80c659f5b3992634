//! # HTTP Surface
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/villas` | 200 + list |
//! | GET | `/villas/{id}` | 200 + item |
//! | POST | `/villas` | 201 + item, `Location` |
//! | PUT | `/villas/{id}` | 204 |
//! | PATCH | `/villas/{id}` | 204 |
//! | DELETE | `/villas/{id}` | 204 |
//! | GET | `/villa-numbers` | 200 + envelope |
//! | GET | `/villa-numbers/{id}` | 200 + envelope |
//! | POST | `/villa-numbers` | 201 + envelope, `Location` |
//! | PUT | `/villa-numbers/{id}` | 200 + envelope |
//! | DELETE | `/villa-numbers/{id}` | 200 + envelope |
//!
//! Failures from either resource come back as a failed [`ApiResponse`].

pub mod body;
pub mod envelope;
pub mod error;
pub mod villa_numbers;
pub mod villas;

pub use envelope::ApiResponse;

use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::clients::{VillaClient, VillaNumberClient};

/// Builds the application router over the given resource clients.
pub fn router(villa_client: VillaClient, villa_number_client: VillaNumberClient) -> Router {
    Router::new()
        .route(
            "/villas",
            get(villas::list_villas).post(villas::create_villa),
        )
        .route(
            "/villas/{id}",
            get(villas::get_villa)
                .put(villas::update_villa)
                .patch(villas::patch_villa)
                .delete(villas::delete_villa),
        )
        .route(
            "/villa-numbers",
            get(villa_numbers::list_villa_numbers).post(villa_numbers::create_villa_number),
        )
        .route(
            "/villa-numbers/{id}",
            get(villa_numbers::get_villa_number)
                .put(villa_numbers::update_villa_number)
                .delete(villa_numbers::delete_villa_number),
        )
        .layer(Extension(villa_client))
        .layer(Extension(villa_number_client))
        .layer(TraceLayer::new_for_http())
}
