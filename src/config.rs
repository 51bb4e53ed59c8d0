use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/eco_quest.json";
const DEFAULT_FEED_LIMIT: usize = 20;
const DEFAULT_FEED_MAX: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub feed_default_limit: usize,
    pub feed_max_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            feed_default_limit: DEFAULT_FEED_LIMIT,
            feed_max_limit: DEFAULT_FEED_MAX,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let feed_max_limit = lookup("FEED_MAX_LIMIT")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|max| *max > 0)
            .unwrap_or(defaults.feed_max_limit);

        let feed_default_limit = lookup("FEED_DEFAULT_LIMIT")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(defaults.feed_default_limit)
            .min(feed_max_limit);

        Self {
            port,
            data_path,
            feed_default_limit,
            feed_max_limit,
        }
    }

    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.feed_default_limit)
            .min(self.feed_max_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/eco_quest.json"));
        assert_eq!(config.feed_default_limit, 20);
        assert_eq!(config.feed_max_limit, 100);
    }

    #[test]
    fn reads_values_and_ignores_garbage_port() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("APP_DATA_PATH", "/tmp/eco.json"),
            ("FEED_DEFAULT_LIMIT", "500"),
            ("FEED_MAX_LIMIT", "50"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("/tmp/eco.json"));
        assert_eq!(config.feed_max_limit, 50);
        assert_eq!(config.feed_default_limit, 50);
    }

    #[test]
    fn clamp_limit_bounds_requests() {
        let config = Config::default();
        assert_eq!(config.clamp_limit(None), 20);
        assert_eq!(config.clamp_limit(Some(5)), 5);
        assert_eq!(config.clamp_limit(Some(10_000)), 100);
        assert_eq!(config.clamp_limit(Some(0)), 0);
    }
}
