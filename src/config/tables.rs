use super::defaults;
use super::models::{AppConfig, LogLevel, Screen, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    sources: SourcesConfig,
    #[serde(default)]
    playback: PlaybackConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            text_size: tables.appearance.text_size,
            window_width: tables.ui.window_width,
            window_height: tables.ui.window_height,
            start_screen: tables.ui.start_screen,
            log_level: tables.logging.log_level,
            manifest_source: tables.sources.manifest,
            questions_source: tables.sources.questions,
            responses_path: tables.sources.responses,
            tick_interval_ms: tables.playback.tick_interval_ms,
            annotation_fade_ms: tables.playback.annotation_fade_ms,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                text_size: config.text_size,
            },
            ui: UiConfig {
                window_width: config.window_width,
                window_height: config.window_height,
                start_screen: config.start_screen,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            sources: SourcesConfig {
                manifest: config.manifest_source.clone(),
                questions: config.questions_source.clone(),
                responses: config.responses_path.clone(),
            },
            playback: PlaybackConfig {
                tick_interval_ms: config.tick_interval_ms,
                annotation_fade_ms: config.annotation_fade_ms,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_text_size")]
    text_size: u32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            text_size: defaults::default_text_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default)]
    start_screen: Screen,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            start_screen: Screen::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SourcesConfig {
    #[serde(default = "defaults::default_manifest_source")]
    manifest: String,
    #[serde(default = "defaults::default_questions_source")]
    questions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responses: Option<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            manifest: defaults::default_manifest_source(),
            questions: defaults::default_questions_source(),
            responses: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PlaybackConfig {
    #[serde(default = "defaults::default_tick_interval_ms")]
    tick_interval_ms: u64,
    #[serde(default = "defaults::default_annotation_fade_ms")]
    annotation_fade_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: defaults::default_tick_interval_ms(),
            annotation_fade_ms: defaults::default_annotation_fade_ms(),
        }
    }
}
