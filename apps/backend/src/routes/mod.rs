use actix_web::web;

use crate::middleware::jwt_extract::JwtExtract;

pub mod health;
pub mod players;
pub mod team;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both exercise the same auth wiring.
///
/// `/health` is public; everything under `/api` requires a Bearer token.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);

    cfg.service(
        web::scope("/api")
            .wrap(JwtExtract)
            .configure(players::configure_routes)
            .configure(team::configure_routes),
    );
}

/// RFC 3339 rendering for response timestamps.
pub(crate) fn rfc3339(ts: time::OffsetDateTime) -> String {
    ts.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| ts.to_string())
}
