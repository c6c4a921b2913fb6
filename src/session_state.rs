use actix_session::{Session, SessionExt, SessionGetError};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use rand::{Rng, distributions::Alphanumeric};
use std::future::{Ready, ready};

pub struct TypedSession(Session);

impl TypedSession {
    const CSRF_TOKEN_KEY: &'static str = "csrf_token";

    pub fn get_csrf_token(&self) -> Result<Option<String>, SessionGetError> {
        self.0.get(Self::CSRF_TOKEN_KEY)
    }

    /// Returns the anti-forgery token bound to this session, issuing a fresh
    /// one on the first visit.
    pub fn get_or_insert_csrf_token(&self) -> Result<String, anyhow::Error> {
        if let Some(token) = self.get_csrf_token()? {
            return Ok(token);
        }
        let token = generate_csrf_token();
        self.0.insert(Self::CSRF_TOKEN_KEY, &token)?;
        Ok(token)
    }
}

fn generate_csrf_token() -> String {
    let mut rng = rand::thread_rng();
    std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .map(char::from)
        .take(32)
        .collect()
}

/// Compares two tokens in time that depends only on their length.
pub fn tokens_match(expected: &str, submitted: &str) -> bool {
    let (expected, submitted) = (expected.as_bytes(), submitted.as_bytes());
    expected.len() == submitted.len()
        && expected
            .iter()
            .zip(submitted)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

impl FromRequest for TypedSession {
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
