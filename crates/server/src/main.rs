mod config;
mod middlewares;
mod routes;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    http::{header, StatusCode},
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};

use crate::config::AncestryServerConfig;
use crate::middlewares::not_found;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = Arc::new(AncestryServerConfig::new().map_err(fatal)?);

    // connect to the database
    let pool = ancestrydb::init_pool(
        server_config.get_database_url(),
        *server_config.get_db_pool_max_size(),
    )
    .map_err(fatal)?;

    // Startup hook: runs once, before any request is accepted
    ancestrydb::create_db_and_tables(&pool).map_err(fatal)?;

    log::info!(
        "starting HTTP server at http://{}:{}",
        &server_config.get_bind_address(),
        &server_config.get_port()
    );

    let bind = (
        server_config.get_bind_address().clone(),
        *server_config.get_port(),
    );
    let workers = *server_config.get_workers();

    HttpServer::new(move || {
        let origins_config = server_config.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                origins_config.is_allowed_origin(origin.to_str().unwrap_or(""))
            })
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            // store db pool as Data object
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure)
            .wrap(cors)
            .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found::handler_fn))
            .wrap(Logger::default())
    })
    .bind(bind)?
    .workers(workers)
    .run()
    .await
}

/// Startup failures are logged and abort the process.
fn fatal<E: std::fmt::Display>(err: E) -> std::io::Error {
    log::error!("{}", err);
    std::io::Error::other(err.to_string())
}
