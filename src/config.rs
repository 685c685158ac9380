use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub port: u16,
    pub max_connections: u32,
    pub api_url: String,
}

impl Config {
    pub fn init() -> Config {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let port = env::var("PORT")
            .ok()
            .map(|port| {
                port.parse::<u16>()
                    .unwrap_or_else(|_| panic!("🔒 PORT must be a valid port number, got {port}"))
            })
            .unwrap_or(8080);

        let max_connections = env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|max| max.parse::<u32>().ok())
            .unwrap_or(10);

        let api_url =
            env::var("API_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));

        Config {
            database_url,
            port,
            max_connections,
            api_url,
        }
    }
}
