use actix_web::{App, HttpServer, middleware, web};

use syndic_survey::config::Config;
use syndic_survey::models::opinion::ListingCache;
use syndic_survey::{db, routes, session_middleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(std::io::Error::other)?;
    db::run_migrations(&pool).await.map_err(std::io::Error::other)?;

    let cache = web::Data::new(ListingCache::new());
    let site = web::Data::new(config.site());
    let pool = web::Data::new(pool);
    let secret_key = config.session_key.clone();

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(pool.clone())
            .app_data(cache.clone())
            .app_data(site.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
