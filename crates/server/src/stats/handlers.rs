use crate::reply;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use nfl_core::*;
use nfl_stats::API;

pub async fn variable(api: web::Data<API>) -> impl Responder {
    match web::block(move || api.variables()).await {
        Err(e) => reply::blocking(e),
        Ok(Err(e)) => reply::failure(e),
        Ok(Ok(names)) => HttpResponse::Ok().json(names),
    }
}
pub async fn all(api: web::Data<API>) -> impl Responder {
    match web::block(move || api.all()).await {
        Err(e) => reply::blocking(e),
        Ok(Err(e)) => reply::failure(e),
        Ok(Ok(frame)) => HttpResponse::Ok().json(frame),
    }
}
pub async fn team(
    api: web::Data<API>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> impl Responder {
    let name = path.into_inner();
    let lookup = name.clone();
    match web::block(move || api.team(&lookup)).await {
        Err(e) => reply::blocking(e),
        Ok(Err(e)) => reply::failure(e),
        Ok(Ok(frame)) if frame.is_empty() && config.strict => {
            reply::failure(Error::NotFound(format!("team {:?}", name)))
        }
        Ok(Ok(frame)) => HttpResponse::Ok().json(frame),
    }
}
pub async fn team_list(api: web::Data<API>) -> impl Responder {
    match web::block(move || api.teams()).await {
        Err(e) => reply::blocking(e),
        Ok(Err(e)) => reply::failure(e),
        Ok(Ok(teams)) => HttpResponse::Ok().json(teams),
    }
}
pub async fn health(api: web::Data<API>) -> impl Responder {
    match web::block(move || api.ping()).await {
        Ok(Ok(())) => HttpResponse::Ok().body("ok"),
        Ok(Err(e)) => {
            log::error!("health check failed: {}", e);
            HttpResponse::ServiceUnavailable().body("database unavailable")
        }
        Err(e) => reply::blocking(e),
    }
}
