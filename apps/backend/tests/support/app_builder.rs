use actix_http::Request;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use fantasy_backend::middleware::cors::cors_for_origins;
use fantasy_backend::middleware::request_trace::RequestTrace;
use fantasy_backend::middleware::structured_logger::StructuredLogger;
use fantasy_backend::middleware::trace_span::TraceSpan;
use fantasy_backend::routes;
use fantasy_backend::state::app_state::AppState;

type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Wires test services the way `main.rs` does. CORS is opt-in through
/// [`TestAppBuilder::build_with_cors`] because it changes the body type.
pub struct TestAppBuilder {
    state: AppState,
    route_config: Option<RouteConfigFn>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            route_config: None,
        }
    }

    /// The production route table, `/api` auth gate included.
    pub fn with_prod_routes(self) -> Self {
        self.with_routes(routes::configure)
    }

    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Some(Box::new(config_fn));
        self
    }

    fn into_parts(self) -> (web::Data<AppState>, impl FnOnce(&mut web::ServiceConfig)) {
        let route_config = self.route_config;
        let configure = move |cfg: &mut web::ServiceConfig| {
            if let Some(config_fn) = &route_config {
                config_fn(cfg);
            }
        };
        (web::Data::new(self.state), configure)
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let (data, configure) = self.into_parts();
        test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(configure),
        )
        .await
    }

    /// Same stack with the CORS layer from `main.rs`, limited to `origins`.
    pub async fn build_with_cors(
        self,
        origins: &[&str],
    ) -> impl Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error> {
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        let (data, configure) = self.into_parts();
        test::init_service(
            App::new()
                .wrap(cors_for_origins(&origins))
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(configure),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
