use actix_web::{web, App, HttpServer};
use db_infra::config::db::RuntimeEnv;
use fantasy_backend::config::server::ServerConfig;
use fantasy_backend::infra::state::build_state;
use fantasy_backend::middleware::cors::cors_middleware;
use fantasy_backend::middleware::request_trace::RequestTrace;
use fantasy_backend::middleware::structured_logger::StructuredLogger;
use fantasy_backend::middleware::trace_span::TraceSpan;
use fantasy_backend::routes;
use fantasy_backend::state::security_config::SecurityConfig;
use fantasy_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, db_kind = ?config.db_kind, "starting fantasy backend");

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(config.db_kind)
        .with_security(SecurityConfig::new(config.jwt_secret.as_bytes()))
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
