use dotenvy;

#[derive(Debug)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub bounty_store_url: String,
    pub withdrawal_service_url: String,
    pub is_development: bool,
    pub listen_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let jwt_secret = std::env::var("JWT_SECRET").expect("Missing JWT_SECRET in env");

        let bounty_store_url =
            std::env::var("BOUNTY_STORE_URL").expect("Missing BOUNTY_STORE_URL in env");
        let withdrawal_service_url = std::env::var("WITHDRAWAL_SERVICE_URL")
            .expect("Missing WITHDRAWAL_SERVICE_URL in env");

        let is_development = std::env::var("DEVELOPMENT")
            .expect("set DEVELOPMENT env var")
            .eq("true");

        let listen_port = std::env::var("LISTEN_PORT")
            .unwrap_or("8080".to_string())
            .parse()
            .expect("LISTEN_PORT should be number");

        Self {
            jwt_secret,
            bounty_store_url,
            withdrawal_service_url,
            is_development,
            listen_port,
        }
    }
}
