use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Parsing config tables")?;
    let mut config = AppConfig::from(tables);
    clamp_config(&mut config);
    Ok(config)
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("Serializing config tables")
}

fn clamp_config(config: &mut AppConfig) {
    config.text_size = config.text_size.clamp(8, 72);
    config.tick_interval_ms = config.tick_interval_ms.clamp(10, 1000);
    config.annotation_fade_ms = config.annotation_fade_ms.min(2000);
    if !config.window_width.is_finite() || config.window_width < 320.0 {
        config.window_width = crate::config::defaults::default_window_width();
    }
    if !config.window_height.is_finite() || config.window_height < 240.0 {
        config.window_height = crate::config::defaults::default_window_height();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, Screen, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_sectioned_tables() {
        let config = parse_config(
            r#"
            [appearance]
            theme = "day"
            text_size = 24

            [ui]
            start_screen = "questions"

            [logging]
            log_level = "warn"

            [sources]
            questions = "https://example.org/qna.json"
            responses = "conf/responses.toml"

            [playback]
            tick_interval_ms = 100
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.text_size, 24);
        assert_eq!(config.start_screen, Screen::Questions);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.questions_source, "https://example.org/qna.json");
        assert_eq!(config.responses_path.as_deref(), Some("conf/responses.toml"));
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.manifest_source, "data/video.json");
    }

    #[test]
    fn clamps_out_of_range_values() {
        let config = parse_config("[playback]\ntick_interval_ms = 0\n[appearance]\ntext_size = 500\n")
            .unwrap();
        assert_eq!(config.tick_interval_ms, 10);
        assert_eq!(config.text_size, 72);
    }

    #[test]
    fn rejects_unknown_enum_values() {
        assert!(parse_config("[ui]\nstart_screen = \"settings\"\n").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.start_screen = Screen::Responses;
        config.responses_path = Some("conf/responses.toml".into());
        let text = serialize_config(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_falls_back() {
        let config = load_config(Path::new("/definitely/missing/config.toml"));
        assert_eq!(config, AppConfig::default());
    }
}
