mod form;
mod get;
mod post;

pub use form::*;
pub use get::*;
pub use post::*;

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use actix_web_flash_messages::IncomingFlashMessages;

fn render_form(
    form: &SubscriptionForm,
    csrf_token: &str,
    flash_messages: Option<&IncomingFlashMessages>,
) -> HttpResponse {
    let messages_html: String = flash_messages
        .into_iter()
        .flat_map(|messages| messages.iter())
        .map(|m| {
            format!(
                "<p class=\"message\"><i>{}</i></p>",
                htmlescape::encode_minimal(m.content())
            )
        })
        .collect();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(form.render(csrf_token, &messages_html))
}
