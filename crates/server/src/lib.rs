//! Statistics Backend Server
//!
//! Serves static pages, JSON views of the team statistics table, and the
//! points prediction endpoint from a single actix-web server.
//!
//! ## Submodules
//!
//! - [`stats`] — Table queries (`/variable`, `/api/...`, `/health`)
//! - [`predict`] — Point prediction (`/ml/points/...`)
//! - [`pages`] — Static HTML pages
pub mod pages;
pub mod predict;
pub mod reply;
pub mod stats;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use nfl_core::Config;
use nfl_stats::API;

/// Registers every route. Handlers expect `web::Data<API>` and
/// `web::Data<Config>` to be present as app data.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    for (route, file) in pages::PAGES {
        cfg.route(route, web::get().to(move |config: web::Data<Config>| pages::serve(config, file)));
    }
    cfg
        .route("/health",                                      web::get().to(stats::handlers::health))
        .route("/variable",                                    web::get().to(stats::handlers::variable))
        .route("/api/all",                                     web::get().to(stats::handlers::all))
        .route("/api/team/{name}",                             web::get().to(stats::handlers::team))
        .route("/api/teamList",                                web::get().to(stats::handlers::team_list))
        .route("/ml/points/{stat1}/{stat2}/{stat3}/{stat4}/{stat5}", web::get().to(predict::handlers::points));
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let db = nfl_database::db(&config.db)?;
    let api = web::Data::new(API::from(db));
    let bind = config.bind.clone();
    let config = web::Data::new(config);
    log::info!("starting server on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(api.clone())
            .app_data(config.clone())
            .configure(routes)
    })
    .bind(bind.as_str())?
    .run()
    .await?;
    Ok(())
}
