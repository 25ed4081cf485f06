use actix_web::web;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate-horoscope", web::post().to(handlers::generate_horoscope))
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check));
}
