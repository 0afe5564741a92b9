use actix_web::{App, HttpServer, web};
use anyhow::Context;
use config::{Config, Environment, File};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use tablebook::db::establish_connection_pool;
use tablebook::models::config::ServerConfig;
use tablebook::repository::DieselRepository;
use tablebook::routes::health;
use tablebook::routes::reservations::reserve_table;
use tablebook::routes::restaurants::{
    create_restaurant, list_restaurants, populate_restaurants, search_restaurants,
};
use tablebook::services::booking::BookingLocks;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config: ServerConfig = Config::builder()
        .set_default("database_url", "tablebook.db")?
        .set_default("bind_address", "127.0.0.1")?
        .set_default("port", 9000)?
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?
        .try_deserialize()?;

    let pool = establish_connection_pool(&config.database_url)
        .context("Failed to establish SQLite connection pool")?;

    let mut conn = pool.get().context("Failed to get SQLite connection")?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;
    drop(conn);

    let repo = DieselRepository::new(pool);
    let locks = web::Data::new(BookingLocks::new());

    log::info!(
        "Starting server on {}:{}",
        config.bind_address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(locks.clone())
            .service(health)
            .service(create_restaurant)
            .service(list_restaurants)
            .service(search_restaurants)
            .service(populate_restaurants)
            .service(reserve_table)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
