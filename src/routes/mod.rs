// Route exports
pub mod directions;

use actix_web::web;

use crate::services::PharmacySearch;

pub use directions::AppState;

pub fn configure_routes<S: PharmacySearch + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(directions::configure::<S>),
    );
}
