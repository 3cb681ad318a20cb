//! Server assembly: configuration, repository selection, app factory.
//!
//! The factory builds the exact `App` served in production so
//! integration tests exercise the same routing, middleware, and error
//! mapping as a deployment.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{InMemoryUserRepository, UserRepository};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;
use crate::middleware::Trace;
use crate::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string; `None` selects the in-memory
    /// repository.
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Resolve configuration from `BIND_ADDR` and `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error when `BIND_ADDR` is set but not a valid socket
    /// address.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".into())
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid BIND_ADDR: {err}")))?;
        let database_url = std::env::var("DATABASE_URL").ok();
        Ok(Self {
            bind_addr,
            database_url,
        })
    }
}

/// Select the repository implementation for this process.
///
/// A configured database URL yields the Diesel adapter; otherwise the
/// registry runs on the in-memory repository, which does not survive a
/// restart.
pub async fn build_repository(
    database_url: Option<&str>,
) -> std::io::Result<Arc<dyn UserRepository>> {
    match database_url {
        Some(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|err| std::io::Error::other(err.to_string()))?;
            info!("using PostgreSQL-backed user repository");
            Ok(Arc::new(DieselUserRepository::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set; falling back to the in-memory repository");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// Build the application served by [`run`].
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
> {
    #[cfg_attr(not(debug_assertions), allow(unused_mut))]
    let mut app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(Trace)
        .configure(users::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Assemble dependencies and serve until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let repository = build_repository(config.database_url.as_deref()).await?;
    let http_state = web::Data::new(HttpState::new(repository));
    let health_state = web::Data::new(HealthState::new());

    let server_http_state = http_state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_http_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr)?;

    info!(addr = %config.bind_addr, "user registry listening");
    health_state.mark_ready();
    server.run().await
}
