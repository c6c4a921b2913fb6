use actix_web::http::StatusCode;
use actix_web::web::{self, Form};
use actix_web::{HttpResponse, ResponseError};
use actix_web_flash_messages::FlashMessage;
use anyhow::Context;

use super::{FormData, SubscriptionForm, render_form};
use crate::domain::NewSubscriber;
use crate::email_client::EmailClient;
use crate::routes::error_chain_fmt;
use crate::session_state::{TypedSession, tokens_match};
use crate::util::redirect_to;

const CONFIRMATION_SUBJECT: &str = "Confirmação da Inscrição";
const SUCCESS_MESSAGE: &str = "Inscrição Realizada.";

#[tracing::instrument(
    name = "Submit a subscription",
    skip(pairs, session, email_client),
    fields(subscriber_email = tracing::field::Empty, subscriber_name = tracing::field::Empty)
)]
pub async fn subscribe(
    Form(pairs): Form<Vec<(String, String)>>,
    session: TypedSession,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubscribeError> {
    let form = FormData::from_pairs(pairs);
    verify_csrf_token(&session, form.csrf_token())?;

    let subscriber = match SubscriptionForm::bind(form).validate() {
        Ok(subscriber) => subscriber,
        Err(form) => {
            let invalid_fields: Vec<&str> = form.errors().iter().map(|(f, _)| f.name()).collect();
            tracing::info!(?invalid_fields, "Rejected an invalid subscription");
            let csrf_token = session
                .get_or_insert_csrf_token()
                .context("Failed to read the CSRF token from the session")?;
            return Ok(render_form(&form, &csrf_token, None));
        }
    };

    let subscriber_name: &str = subscriber.name.as_ref();
    tracing::Span::current()
        .record("subscriber_email", tracing::field::display(&subscriber.email))
        .record("subscriber_name", subscriber_name);

    send_confirmation_email(&email_client, &subscriber)
        .await
        .context("Failed to send a subscription confirmation email")?;

    FlashMessage::success(SUCCESS_MESSAGE).send();
    Ok(redirect_to("/inscricao/"))
}

fn verify_csrf_token(session: &TypedSession, submitted: Option<&str>) -> Result<(), SubscribeError> {
    let expected = session
        .get_csrf_token()
        .context("Failed to read the CSRF token from the session")?;

    match (expected, submitted) {
        (Some(expected), Some(submitted)) if tokens_match(&expected, submitted) => Ok(()),
        _ => Err(SubscribeError::CsrfError),
    }
}

/// Sends one message to both the organisers and the new subscriber.
#[tracing::instrument(name = "Send subscription confirmation email", skip_all)]
async fn send_confirmation_email(
    email_client: &EmailClient,
    subscriber: &NewSubscriber,
) -> Result<(), reqwest::Error> {
    let text_body = format!(
        include_str!("subscription_email.txt"),
        name = subscriber.name.as_ref(),
        cpf = subscriber.cpf.as_ref(),
        email = subscriber.email.as_ref(),
        phone = subscriber.phone.as_ref(),
    );
    let html_body = htmlescape::encode_minimal(&text_body).replace('\n', "<br />\n");

    email_client
        .send_email(
            &[email_client.sender(), &subscriber.email],
            CONFIRMATION_SUBJECT,
            &html_body,
            &text_body,
        )
        .await
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("CSRF verification failed. Request aborted.")]
    CsrfError,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::CsrfError => StatusCode::FORBIDDEN,
            SubscribeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
