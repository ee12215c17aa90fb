use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with_profile(None)
    }

    /// `profile` wins over the `PROFILE` variable when given (e.g. from `--profile`)
    pub fn from_env_with_profile(profile: Option<String>) -> Self {
        let profile = profile
            .or_else(|| env::var("PROFILE").ok())
            .unwrap_or_else(|| "default".to_string());

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url(&profile));

        Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| parse_origins(&s))
                .unwrap_or_default(),
            seed_demo: env::var("SEED_DEMO").is_ok(),
            profile,
        }
    }
}

fn default_database_url(profile: &str) -> String {
    if profile == "default" {
        "sqlite://pet_store.db?mode=rwc".to_string()
    } else {
        format!("sqlite://pet_store_{}.db?mode=rwc", profile)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_file_is_named_after_the_profile() {
        assert_eq!(default_database_url("default"), "sqlite://pet_store.db?mode=rwc");
        assert_eq!(
            default_database_url("staging"),
            "sqlite://pet_store_staging.db?mode=rwc"
        );
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:3000 ,,https://shop.example "),
            vec!["http://localhost:3000", "https://shop.example"]
        );
    }
}
