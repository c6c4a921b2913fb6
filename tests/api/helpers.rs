use eventex::configuration::get_configuration;
use eventex::startup::Application;
use eventex::telemetry;
use eventex::telemetry::init_subscriber;
use once_cell::sync::Lazy;
use reqwest::Response;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_home(&self) -> Response {
        self.api_client
            .get(format!("{}/", self.address))
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn get_health_check(&self) -> Response {
        self.api_client
            .get(format!("{}/health_check", self.address))
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn get_subscription_form(&self) -> Response {
        self.api_client
            .get(format!("{}/inscricao/", self.address))
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn get_subscription_form_html(&self) -> String {
        self.get_subscription_form().await.text().await.unwrap()
    }

    /// Loads the form first so the session holds a CSRF token, then submits
    /// `form` together with that token.
    pub async fn post_subscription<T: serde::Serialize + ?Sized>(&self, form: &T) -> Response {
        let html = self.get_subscription_form_html().await;
        let token = extract_csrf_token(&html);

        let mut body = serde_urlencoded::to_string(form).unwrap();
        if !body.is_empty() {
            body.push('&');
        }
        body.push_str(&format!("csrfmiddlewaretoken={token}"));

        self.post_subscription_body(body).await
    }

    pub async fn post_subscription_body(&self, body: String) -> Response {
        self.api_client
            .post(format!("{}/inscricao/", self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute Request")
    }
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", application.port());

    _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address,
        email_server,
        api_client,
    }
}

pub fn extract_csrf_token(html: &str) -> String {
    let marker = r#"name="csrfmiddlewaretoken" value=""#;
    let start = html.find(marker).expect("No CSRF token in the page") + marker.len();
    let end = html[start..].find('"').unwrap() + start;
    html[start..end].to_owned()
}

pub fn assert_is_redirect_to(response: &Response, location: &str) {
    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(response.headers()["Location"], location);
}
