use std::env;

pub struct Config {
    pub bind_host: String,
    pub port: u16,
    pub transcript_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let bind_host = env::var("MUSEBOT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("MUSEBOT_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;
        let transcript_path =
            env::var("MUSEBOT_TRANSCRIPT").unwrap_or_else(|_| "musebot.log".to_string());

        Ok(Self {
            bind_host,
            port,
            transcript_path,
        })
    }
}
