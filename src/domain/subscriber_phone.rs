#[derive(Debug)]
pub struct SubscriberPhone(String);

impl AsRef<str> for SubscriberPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SubscriberPhone {
    pub fn parse(phone: impl ToString) -> Result<Self, String> {
        let phone = phone.to_string();

        const SEPARATORS: [char; 5] = [' ', '-', '(', ')', '+'];

        let length = phone.chars().count();
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        let illegal_chars = phone
            .chars()
            .any(|c| !c.is_ascii_digit() && !SEPARATORS.contains(&c));

        if !(8..=20).contains(&length) || digits < 8 || illegal_chars {
            Err("Informe um telefone válido.".to_string())
        } else {
            Ok(Self(phone))
        }
    }
}
