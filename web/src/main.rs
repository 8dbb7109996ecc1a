#![warn(clippy::all)]

use std::env;
use std::io;
use std::time::Duration;

use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;

use db::{
    build_pool, establish_connection, run_migrations, Devotion, Devotionable,
    SqliteConnectionPool,
};

use crate::controllers::{admin, api, cron};

/// Pause between backfill items when BACKFILL_DELAY_MS is unset.
const DEFAULT_BACKFILL_DELAY: Duration = Duration::from_millis(2000);

/// Represents the [server data](actix_web.web.Data.html) for the application.
pub struct ServerData {
    pub db: SqliteConnectionPool,
    pub config: AppConfig,
}

/// Runtime configuration read from the environment.
///
/// Secrets stay `None` when unset; the authorization check treats that
/// as locked rather than open.
#[derive(Clone)]
pub struct AppConfig {
    pub admin_secret: Option<String>,
    pub cron_secret: Option<String>,
    pub replicate_api_token: Option<String>,
    pub backfill_delay: Duration,
}

impl AppConfig {
    fn from_env() -> Self {
        let backfill_delay = env::var("BACKFILL_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_BACKFILL_DELAY);

        Self {
            admin_secret: env::var("ADMIN_SECRET_KEY").ok(),
            cron_secret: env::var("CRON_SECRET").ok(),
            replicate_api_token: env::var("REPLICATE_API_TOKEN").ok(),
            backfill_delay,
        }
    }
}

/// Registers every route the JSON API serves.
///
/// Generic over the store implementation so tests can swap in a
/// stand-in.
pub fn routes<D>(cfg: &mut web::ServiceConfig)
where
    D: Devotionable + 'static,
{
    cfg.service(web::resource("api/scripture/today").route(web::get().to(api::today::<D>)))
        .service(web::resource("api/scripture").route(web::get().to(api::rotation_status::<D>)))
        .service(
            web::resource("api/comments/create").route(web::post().to(api::create_comment::<D>)),
        )
        .service(
            web::resource("api/comments/{scripture_id}").route(web::get().to(api::comments::<D>)),
        )
        .service(
            web::resource("api/admin/comments")
                .route(web::get().to(admin::pending_comments::<D>))
                .route(web::patch().to(admin::moderate_comment::<D>)),
        )
        .service(
            web::resource("api/admin/scriptures")
                .route(web::get().to(admin::all_scriptures::<D>))
                .route(web::post().to(admin::add_scripture::<D>)),
        )
        .service(
            web::resource("api/cron/generate-backgrounds")
                .route(web::get().to(cron::generate_backgrounds::<D>)),
        );
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    // Set up logging
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    // Get env configuration
    let url = env::var("DATABASE_URL").unwrap_or_else(|_| "/tmp/gathering.db".to_string());
    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let config = AppConfig::from_env();

    // Run DB migrations for a new SQLite database
    run_migrations(&mut establish_connection(&url)).expect("Error running migrations");

    let pool = build_pool(&url);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(ServerData {
                db: pool.clone(),
                config: config.clone(),
            }))
            .configure(routes::<Devotion>)
            .default_service(web::route().to(HttpResponse::NotFound))
    })
    .bind(bind_address)?
    .run()
    .await
}

mod auth;
mod controllers;
mod error;
mod images;
#[cfg(test)]
mod test;
