use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct SubscriberName(String);

impl AsRef<str> for SubscriberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SubscriberName {
    pub fn parse(name: impl ToString) -> Result<Self, String> {
        let name = name.to_string();
        let empty = name.trim().is_empty();

        let too_long = name.graphemes(true).count() > 256;

        const FORBIDDEN_CHARS: [char; 9] = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];

        let illegal_chars = name.chars().any(|c| FORBIDDEN_CHARS.contains(&c));

        if empty || too_long || illegal_chars {
            Err("Informe um nome válido.".to_string())
        } else {
            Ok(Self(name))
        }
    }
}
