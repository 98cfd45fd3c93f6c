use serde::Deserialize;

pub const DEFAULT_NEWS_SOURCES: [&str; 4] = ["bloomberg", "reuters", "financial-times", "cnbc"];
pub const DEFAULT_NEWS_DOMAINS: [&str; 4] = ["bloomberg.com", "reuters.com", "ft.com", "cnbc.com"];
pub const DEFAULT_TRACK_KEYWORDS: [&str; 8] = [
    "$SPY",
    "$QQQ",
    "$BTC",
    "stock market",
    "bull market",
    "bear market",
    "Fed",
    "inflation",
];
pub const MARKET_WATCH_URL: &str = "https://www.marketwatch.com/investing";

/// Flat view of the environment. Every variable is optional; missing ones
/// deserialize as empty strings and are reported by `missing_required`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEnv {
    #[serde(default)]
    pub news_api_key: String,
    #[serde(default)]
    pub twitter_api_key: String,
    #[serde(default)]
    pub twitter_api_secret: String,
    #[serde(default)]
    pub twitter_access_token: String,
    #[serde(default)]
    pub twitter_access_secret: String,
    #[serde(default)]
    pub alpha_vantage_key: String,
    #[serde(default)]
    pub finnhub_key: String,
    #[serde(default)]
    pub firebase_project_id: String,
    #[serde(default)]
    pub google_application_credentials: String,
    #[serde(default)]
    pub firebase_database_url: String,
}

#[derive(Debug, Clone)]
pub struct NewsSettings {
    pub api_key: String,
    pub sources: Vec<String>,
    pub domains: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SocialSettings {
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
    pub access_secret: String,
    pub track_keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FinancialSettings {
    pub alpha_vantage_key: String,
    pub finnhub_key: String,
    pub market_watch_url: String,
}

#[derive(Debug, Clone)]
pub struct FirebaseSettings {
    pub project_id: String,
    pub credentials_path: String,
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub update_interval_hours: u64,
    pub min_training_samples: usize,
    pub sentiment_threshold: f64,
    pub retrain_on_failure: bool,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            update_interval_hours: 6,
            min_training_samples: 1000,
            sentiment_threshold: 0.3,
            retrain_on_failure: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub news: NewsSettings,
    pub social: SocialSettings,
    pub financial: FinancialSettings,
    pub firebase: FirebaseSettings,
    pub model: ModelSettings,
}

impl Settings {
    /// Load settings from the environment. Missing credentials never fail
    /// construction; they surface as one aggregated warning.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let c = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;
        let raw: RawEnv = c.try_deserialize()?;
        let settings = Self::from_raw(raw);

        let missing = settings.missing_required();
        if !missing.is_empty() {
            tracing::warn!("Missing configuration: {}", missing.join(", "));
        }

        Ok(settings)
    }

    pub(crate) fn from_raw(raw: RawEnv) -> Self {
        Self {
            news: NewsSettings {
                api_key: raw.news_api_key,
                sources: DEFAULT_NEWS_SOURCES.iter().map(|s| s.to_string()).collect(),
                domains: DEFAULT_NEWS_DOMAINS.iter().map(|s| s.to_string()).collect(),
            },
            social: SocialSettings {
                api_key: raw.twitter_api_key,
                api_secret: raw.twitter_api_secret,
                access_token: raw.twitter_access_token,
                access_secret: raw.twitter_access_secret,
                track_keywords: DEFAULT_TRACK_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            },
            financial: FinancialSettings {
                alpha_vantage_key: raw.alpha_vantage_key,
                finnhub_key: raw.finnhub_key,
                market_watch_url: MARKET_WATCH_URL.to_string(),
            },
            firebase: FirebaseSettings {
                project_id: raw.firebase_project_id,
                credentials_path: raw.google_application_credentials,
                database_url: raw.firebase_database_url,
            },
            model: ModelSettings::default(),
        }
    }

    /// Required variables that are empty, in reporting order. Only these four
    /// gate the startup warning; the remaining credentials are optional.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = vec![];
        if self.news.api_key.is_empty() {
            missing.push("NEWS_API_KEY");
        }
        if self.social.api_key.is_empty() {
            missing.push("TWITTER_API_KEY");
        }
        if self.financial.alpha_vantage_key.is_empty() {
            missing.push("ALPHA_VANTAGE_KEY");
        }
        if self.firebase.project_id.is_empty() {
            missing.push("FIREBASE_PROJECT_ID");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_env_reports_all_required_in_order() {
        let settings = Settings::from_raw(RawEnv::default());
        assert_eq!(
            settings.missing_required(),
            vec![
                "NEWS_API_KEY",
                "TWITTER_API_KEY",
                "ALPHA_VANTAGE_KEY",
                "FIREBASE_PROJECT_ID"
            ]
        );
    }

    #[test]
    fn list_fields_get_fixed_defaults() {
        let settings = Settings::from_raw(RawEnv::default());
        assert_eq!(
            settings.news.sources,
            vec!["bloomberg", "reuters", "financial-times", "cnbc"]
        );
        assert_eq!(
            settings.news.domains,
            vec!["bloomberg.com", "reuters.com", "ft.com", "cnbc.com"]
        );
        assert_eq!(
            settings.social.track_keywords,
            vec![
                "$SPY",
                "$QQQ",
                "$BTC",
                "stock market",
                "bull market",
                "bear market",
                "Fed",
                "inflation"
            ]
        );
    }

    #[test]
    fn only_project_id_set() {
        let raw = RawEnv {
            firebase_project_id: "proj1".into(),
            ..RawEnv::default()
        };
        let settings = Settings::from_raw(raw);
        assert_eq!(settings.firebase.project_id, "proj1");
        assert_eq!(settings.news.api_key, "");
        assert_eq!(
            settings.missing_required(),
            vec!["NEWS_API_KEY", "TWITTER_API_KEY", "ALPHA_VANTAGE_KEY"]
        );
    }

    #[test]
    fn fixed_values_and_model_defaults() {
        let settings = Settings::from_raw(RawEnv::default());
        assert_eq!(
            settings.financial.market_watch_url,
            "https://www.marketwatch.com/investing"
        );
        assert_eq!(settings.model.sentiment_threshold, 0.3);
        assert_eq!(settings.model.update_interval_hours, 6);
        assert_eq!(settings.model.min_training_samples, 1000);
        assert!(settings.model.retrain_on_failure);
    }

    #[test]
    fn from_env_picks_up_process_environment() {
        // Only test that touches the process env; guard anyway since cargo
        // runs tests in parallel.
        static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var("FIREBASE_PROJECT_ID", "proj-env");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.firebase.project_id, "proj-env");
        assert!(!settings.missing_required().contains(&"FIREBASE_PROJECT_ID"));
        std::env::remove_var("FIREBASE_PROJECT_ID");
    }
}
