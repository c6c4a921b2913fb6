use crate::domain::{SubscriberCpf, SubscriberEmail, SubscriberName, SubscriberPhone};

/// A registration that passed validation. It lives only for the duration of
/// the request that produced it.
#[derive(Debug)]
pub struct NewSubscriber {
    pub name: SubscriberName,
    pub cpf: SubscriberCpf,
    pub email: SubscriberEmail,
    pub phone: SubscriberPhone,
}
