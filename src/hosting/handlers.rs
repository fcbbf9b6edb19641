use super::EquityBody;
use crate::equity::Engine;
use crate::equity::EquityRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn equity(engine: web::Data<Engine>, body: web::Json<EquityBody>) -> impl Responder {
    match EquityRequest::try_from(body.into_inner()) {
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
        Ok(request) => {
            let engine = **engine;
            match web::block(move || engine.simulate(&request)).await {
                Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
                Ok(estimate) => HttpResponse::Ok().json(estimate),
            }
        }
    }
}
