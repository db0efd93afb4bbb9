use codedocs_service::config::CodedocsConfig;
use codedocs_service::startup::Application;

pub struct TestApp {
    pub address: String,
    #[allow(dead_code)]
    pub port: u16,
}

impl TestApp {
    /// Spawn an app pointing at the real completion API default. Only
    /// useful for endpoints that never invoke the provider.
    #[allow(dead_code)]
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn an app whose completion calls go to `api_base` (usually a
    /// wiremock server standing in for the OpenAI API).
    #[allow(dead_code)]
    pub async fn spawn_with_api_base(api_base: &str) -> Self {
        let api_base = api_base.to_string();
        Self::spawn_with(move |config| {
            config.openai.api_base = api_base.clone();
        })
        .await
    }

    async fn spawn_with(customize: impl FnOnce(&mut CodedocsConfig)) -> Self {
        std::env::set_var("OPENAI_API_KEY", "test-key");

        let mut config = CodedocsConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        customize(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the HTTP server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
