use crate::reply;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use nfl_core::*;
use nfl_dto::Stats;

pub async fn points(config: web::Data<Config>, path: web::Path<Stats>) -> impl Responder {
    let stats = path.into_inner();
    match web::block(move || nfl_predict::predict_points(&config.model, stats.as_array())).await {
        Err(e) => reply::blocking(e),
        Ok(Err(e)) => reply::failure(e),
        Ok(Ok(sentence)) => HttpResponse::Ok().json(sentence),
    }
}
