mod new_subscriber;
mod subscriber_cpf;
mod subscriber_email;
mod subscriber_name;
mod subscriber_phone;

pub use new_subscriber::NewSubscriber;
pub use subscriber_cpf::SubscriberCpf;
pub use subscriber_email::SubscriberEmail;
pub use subscriber_name::SubscriberName;
pub use subscriber_phone::SubscriberPhone;
