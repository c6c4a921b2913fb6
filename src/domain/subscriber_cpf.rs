/// Brazilian taxpayer identifier, kept as the eleven digits the visitor typed.
#[derive(Debug)]
pub struct SubscriberCpf(String);

impl AsRef<str> for SubscriberCpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SubscriberCpf {
    const LENGTH: usize = 11;

    pub fn parse(cpf: impl ToString) -> Result<Self, String> {
        let cpf = cpf.to_string();

        if cpf.len() != Self::LENGTH || !cpf.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!(
                "O CPF deve ter {} dígitos numéricos.",
                Self::LENGTH
            ));
        }
        Ok(Self(cpf))
    }
}
