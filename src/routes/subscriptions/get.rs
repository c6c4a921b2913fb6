use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;

use super::{SubscriptionForm, render_form};
use crate::session_state::TypedSession;
use crate::util::e500;

#[tracing::instrument(name = "Show the subscription form", skip(session, flash_messages))]
pub async fn subscription_form(
    session: TypedSession,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let csrf_token = session.get_or_insert_csrf_token().map_err(e500)?;
    Ok(render_form(
        &SubscriptionForm::unbound(),
        &csrf_token,
        Some(&flash_messages),
    ))
}
