use super::handlers;
use crate::equity::Engine;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

/// Default listen address when `BIND_ADDR` is unset.
const BIND_ADDR: &str = "127.0.0.1:8080";

pub struct Server;

impl Server {
    pub async fn run() -> Result<(), std::io::Error> {
        let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| BIND_ADDR.to_string());
        log::info!("starting equity server on {}", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .configure(Self::routes)
        })
        .workers(4)
        .bind(addr)?
        .run()
        .await
    }

    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(Engine))
            .route("/health", web::get().to(handlers::health))
            .route("/equity", web::post().to(handlers::equity));
    }
}
