use validator::ValidateEmail;

#[derive(Debug)]
pub struct SubscriberEmail(String);

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl SubscriberEmail {
    pub fn parse(email: impl ToString) -> Result<Self, String> {
        let email = email.to_string();
        if !ValidateEmail::validate_email(&email) {
            return Err("Informe um endereço de email válido.".to_string());
        }
        Ok(Self(email))
    }
}
