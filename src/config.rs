use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub admin_token: String,
    pub seed_demo_flights: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let admin_token = env::var("ADMIN_TOKEN")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let seed_demo_flights = env::var("SEED_DEMO_FLIGHTS")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);
        Ok(Self {
            host,
            port,
            admin_token,
            seed_demo_flights,
        })
    }
}
