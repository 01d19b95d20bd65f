use std::env::var;

use dotenvy::dotenv;

const DEFAULT_PACHCA_BASE_URL: &str = "https://api.pachca.com/api/shared/v1";
const DEFAULT_DISCUSSION_ID: i64 = 144223;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub pachca_token: String,
    pub pachca_base_url: String,
    pub discussion_id: i64,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            port: var("PORT")
                .map_err(|_| "An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: var("SCHEME").map_err(|_| "An error occured while getting SCHEME env param")?,
            host: var("HOST").map_err(|_| "An error occured while getting HOST env param")?,
            pachca_token: var("PACHCA_API_TOKEN")
                .map_err(|_| "An error occured while getting PACHCA_API_TOKEN env param")?,
            pachca_base_url: var("PACHCA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PACHCA_BASE_URL.to_string()),
            discussion_id: match var("DISCUSSION_ID") {
                Ok(raw) => raw
                    .parse::<i64>()
                    .map_err(|_| "An error occured while parsing DISCUSSION_ID env param")?,
                Err(_) => DEFAULT_DISCUSSION_ID,
            },
        })
    }
}
