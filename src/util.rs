use actix_web::HttpResponse;

// Return 500 with the error preserved
pub fn e500<T: std::fmt::Display + std::fmt::Debug + 'static>(e: T) -> actix_web::Error {
    actix_web::error::ErrorInternalServerError(e)
}

pub fn redirect_to(path: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, path))
        .finish()
}
