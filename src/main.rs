use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use async_inn::config::Config;
use async_inn::db::{self, SqliteStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;

    log::info!("Connecting to database at {}...", config.database_url);
    let pool = db::get_db_pool(&config.database_url, config.max_connections)
        .await
        .map_err(std::io::Error::other)?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let store = web::Data::new(SqliteStore::new(pool));

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(middleware::Logger::default())
            .configure(async_inn::configure::<SqliteStore>)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
