use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub ui: UiConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки бэкенда бронирований
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL prepended to every `/api/...` path. Empty means same origin.
    pub base_url: String,
}

// Тайминги и параметры UI
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub alert_dismiss_ms: u64,
    pub search_debounce_ms: u64,
    pub aos_duration_ms: u64,
    pub aos_once: bool,
    pub aos_offset: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin_bottom: f64,
}

impl UiConfig {
    pub fn alert_dismiss(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5000,
            search_debounce_ms: 300,
            aos_duration_ms: 1000,
            aos_once: true,
            aos_offset: 100,
            reveal_threshold: 0.1,
            reveal_root_margin_bottom: -50.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Reads `name` from the environment, falling back to `default` when unset.
fn env_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let ui_defaults = UiConfig::default();

        Ok(Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env_or("PORT", 8000)?,
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "bus_seat_client=debug,tower_http=debug".to_string()),
            },
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            },
            ui: UiConfig {
                alert_dismiss_ms: env_or("UI_ALERT_DISMISS_MS", ui_defaults.alert_dismiss_ms)?,
                search_debounce_ms: env_or("UI_SEARCH_DEBOUNCE_MS", ui_defaults.search_debounce_ms)?,
                aos_duration_ms: env_or("UI_AOS_DURATION_MS", ui_defaults.aos_duration_ms)?,
                aos_once: env_or("UI_AOS_ONCE", ui_defaults.aos_once)?,
                aos_offset: env_or("UI_AOS_OFFSET", ui_defaults.aos_offset)?,
                reveal_threshold: env_or("UI_REVEAL_THRESHOLD", ui_defaults.reveal_threshold)?,
                reveal_root_margin_bottom: env_or(
                    "UI_REVEAL_ROOT_MARGIN_BOTTOM",
                    ui_defaults.reveal_root_margin_bottom,
                )?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_defaults_match_page_behaviour() {
        let ui = UiConfig::default();
        assert_eq!(ui.alert_dismiss(), Duration::from_secs(5));
        assert_eq!(ui.aos_duration_ms, 1000);
        assert!(ui.aos_once);
        assert_eq!(ui.aos_offset, 100);
    }

    #[test]
    fn env_or_rejects_garbage() {
        env::set_var("BUS_SEAT_CLIENT_TEST_PORT", "not-a-port");
        let res: Result<u16, _> = env_or("BUS_SEAT_CLIENT_TEST_PORT", 1);
        assert!(matches!(res, Err(ConfigError::Invalid { name: "BUS_SEAT_CLIENT_TEST_PORT", .. })));
        env::remove_var("BUS_SEAT_CLIENT_TEST_PORT");

        let res: Result<u16, _> = env_or("BUS_SEAT_CLIENT_TEST_PORT_UNSET", 42);
        assert_eq!(res.unwrap(), 42);
    }
}
