use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use sqlx::{Pool, Postgres};
use tracing::info;

mod api;
mod cli;
mod config;
mod db;
mod shutdown;
mod telemetry;

use crate::api::{
    health::health_config,
    job_role::{JobRolesController, JobRolesService, handlers::job_role_config},
    validation,
};
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::db::PgJobRoleRepository;
use crate::shutdown::ShutdownCoordinator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let command = Cli::parse().command();

    // Load configuration from environment
    let config = Config::from_env().map_err(std::io::Error::other)?;

    telemetry::init(&config.log_dir)?;

    let pool = db::connection::get_connection(&config.database_url, config.max_db_connections)
        .await
        .map_err(std::io::Error::other)?;
    info!("Database connection pool established");

    db::migrations::run_migrations(&pool)
        .await
        .map_err(std::io::Error::other)?;

    match command {
        Command::Migrate => {
            pool.close().await;
            Ok(())
        }
        Command::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.host.clone());
            let port = port.unwrap_or(config.port);
            serve(config, pool, host, port).await
        }
    }
}

async fn serve(
    config: Config,
    pool: Pool<Postgres>,
    host: String,
    port: u16,
) -> std::io::Result<()> {
    info!("Starting job-roles-api");
    info!("  - Runtime mode: {:?}", config.mode);
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Max database connections: {}", config.max_db_connections);

    let repository = Arc::new(PgJobRoleRepository::new(pool.clone()));
    let controller = web::Data::new(JobRolesController::new(
        JobRolesService::new(repository),
        config.mode,
    ));

    let server_pool = pool.clone();
    let max_payload_size = config.max_payload_size;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(server_pool.clone()))
            .app_data(controller.clone())
            .app_data(web::PayloadConfig::default().limit(max_payload_size))
            .app_data(validation::json_config(max_payload_size))
            .configure(health_config)
            .configure(job_role_config)
    });

    info!("Server starting on http://{}:{}", host, port);

    // Signals are handled by the shutdown coordinator
    let server = server
        .disable_signals()
        .bind((host.as_str(), port))?
        .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task, pool)
        .wait_for_shutdown()
        .await
}
