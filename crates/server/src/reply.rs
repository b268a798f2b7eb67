//! Mapping from domain failures onto HTTP responses.
use actix_web::HttpResponse;
use actix_web::error::BlockingError;
use nfl_core::Error;

pub fn failure(e: Error) -> HttpResponse {
    match e {
        Error::NotFound(_) => {
            log::warn!("{}", e);
            HttpResponse::NotFound().body(e.to_string())
        }
        Error::Validation { .. } => {
            log::warn!("{}", e);
            HttpResponse::BadRequest().body(e.to_string())
        }
        Error::Unavailable(_) => {
            log::error!("{}", e);
            HttpResponse::ServiceUnavailable().body(e.to_string())
        }
        Error::Integrity(_) | Error::Database(_) => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

pub fn blocking(e: BlockingError) -> HttpResponse {
    log::error!("blocking task failed: {}", e);
    HttpResponse::InternalServerError().body("worker pool unavailable")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn statuses() {
        let cases = [
            (Error::NotFound("x".into()), StatusCode::NOT_FOUND),
            (Error::validation("a", "b"), StatusCode::BAD_REQUEST),
            (Error::Unavailable("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (Error::Integrity("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (Error::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (e, status) in cases {
            assert_eq!(failure(e).status(), status);
        }
    }
}
