//! Static HTML pages, served verbatim from the configured directory.
use crate::reply;
use actix_web::HttpResponse;
use actix_web::web;
use nfl_core::*;

/// Route → file name under `PAGES_DIR`.
#[rustfmt::skip]
pub const PAGES: [(&str, &str); 8] = [
    ("/",                   "index.html"),
    ("/index.html",         "index.html"),
    ("/contact.html",       "contact.html"),
    ("/left-sidebar.html",  "left-sidebar.html"),
    ("/right-sidebar.html", "right-sidebar.html"),
    ("/no-sidebar.html",    "no-sidebar.html"),
    ("/sidebar-two.html",   "sidebar-two.html"),
    ("/api",                "apidocumentation.html"),
];

pub async fn serve(config: web::Data<Config>, file: &'static str) -> HttpResponse {
    let path = config.pages.join(file);
    match web::block(move || std::fs::read_to_string(path)).await {
        Err(e) => reply::blocking(e),
        Ok(Err(e)) => reply::failure(Error::NotFound(format!("page {}: {}", file, e))),
        Ok(Ok(html)) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
    }
}
