use std::net::TcpListener;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::{
    App, HttpServer,
    dev::Server,
    web::{self, Data},
};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::routes::{health_check, home, subscribe, subscription_form};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration.email_client.client()?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();

        let server = run(listener, email_client, configuration.application.secret_key)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    secret_key: Secret<String>,
) -> Result<Server, anyhow::Error> {
    let email_client = Data::new(email_client);

    let secret_key = Key::try_from(secret_key.expose_secret().as_bytes())
        .context("The secret key must be at least 64 bytes long")?;
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/inscricao/", web::get().to(subscription_form))
            .route("/inscricao/", web::post().to(subscribe))
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
