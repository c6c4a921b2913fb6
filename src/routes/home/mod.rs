use actix_web::HttpResponse;

#[tracing::instrument(name = "Show the landing page")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(actix_web::http::header::ContentType::html())
        .body(include_str!("index.html"))
}
