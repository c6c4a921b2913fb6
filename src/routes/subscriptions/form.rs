use crate::domain::{
    NewSubscriber, SubscriberCpf, SubscriberEmail, SubscriberName, SubscriberPhone,
};

const REQUIRED: &str = "Este campo é obrigatório.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Cpf,
    Email,
    Phone,
}

impl Field {
    /// Render and validation order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Cpf, Field::Email, Field::Phone];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Cpf => "cpf",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Cpf => "CPF",
            Field::Email => "Email",
            Field::Phone => "Telefone",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }
}

/// Raw submission. Every field is optional so that missing ones surface as
/// form errors instead of an extractor rejection.
#[derive(Default, Debug)]
pub struct FormData {
    name: Option<String>,
    cpf: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    csrfmiddlewaretoken: Option<String>,
}

impl FormData {
    /// A repeated key keeps its last value. Unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut data = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut data.name,
                "cpf" => &mut data.cpf,
                "email" => &mut data.email,
                "phone" => &mut data.phone,
                "csrfmiddlewaretoken" => &mut data.csrfmiddlewaretoken,
                _ => continue,
            };
            *slot = Some(value);
        }
        data
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrfmiddlewaretoken.as_deref()
    }

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Cpf => self.cpf.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
        }
    }
}

/// The registration form, either blank or bound to a submission.
#[derive(Debug)]
pub struct SubscriptionForm {
    data: Option<FormData>,
    errors: Vec<(Field, String)>,
}

impl SubscriptionForm {
    pub fn unbound() -> Self {
        Self {
            data: None,
            errors: Vec::new(),
        }
    }

    pub fn bind(data: FormData) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn fields(&self) -> Vec<&'static str> {
        Field::ALL.iter().map(|f| f.name()).collect()
    }

    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    pub fn errors(&self) -> &[(Field, String)] {
        &self.errors
    }

    /// Checks every field, collecting one error per invalid field. On failure
    /// the form comes back with its errors attached, ready to be re-rendered.
    pub fn validate(mut self) -> Result<NewSubscriber, Self> {
        let name = self.clean(Field::Name, |v| SubscriberName::parse(v));
        let cpf = self.clean(Field::Cpf, |v| SubscriberCpf::parse(v));
        let email = self.clean(Field::Email, |v| SubscriberEmail::parse(v));
        let phone = self.clean(Field::Phone, |v| SubscriberPhone::parse(v));

        match (name, cpf, email, phone) {
            (Some(name), Some(cpf), Some(email), Some(phone)) => Ok(NewSubscriber {
                name,
                cpf,
                email,
                phone,
            }),
            _ => Err(self),
        }
    }

    fn clean<T>(
        &mut self,
        field: Field,
        parse: impl FnOnce(&str) -> Result<T, String>,
    ) -> Option<T> {
        let value = self
            .data
            .as_ref()
            .and_then(|data| data.value(field))
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let outcome = match value {
            Some(value) => parse(value),
            None => Err(REQUIRED.to_string()),
        };

        match outcome {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                self.errors.push((field, e));
                None
            }
        }
    }

    /// Renders `subscriptions/subscription_form.html`. `messages_html` is
    /// inserted verbatim above the form.
    pub fn render(&self, csrf_token: &str, messages_html: &str) -> String {
        let fields_html: String = Field::ALL.iter().map(|f| self.render_field(*f)).collect();
        format!(
            include_str!("subscription_form.html"),
            messages_html,
            htmlescape::encode_minimal(csrf_token),
            fields_html
        )
    }

    fn render_field(&self, field: Field) -> String {
        let value = self
            .data
            .as_ref()
            .and_then(|data| data.value(field))
            .map(htmlescape::encode_minimal)
            .unwrap_or_default();

        let errors: String = self
            .errors
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, e)| format!("<li>{}</li>", htmlescape::encode_minimal(e)))
            .collect();
        let errors = if errors.is_empty() {
            errors
        } else {
            format!("\n        <ul class=\"errorlist\">{errors}</ul>")
        };

        format!(
            r#"      <div class="field">
        <label for="id_{name}">{label}</label>
        <input type="{input_type}" name="{name}" id="id_{name}" value="{value}">{errors}
      </div>
"#,
            name = field.name(),
            label = field.label(),
            input_type = field.input_type(),
        )
    }
}
