use serde::Deserialize;

/// High-level app configuration; built from the sectioned TOML tables.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    /// Body text size at zoom 1.0.
    #[serde(default = "crate::config::defaults::default_text_size")]
    pub text_size: u32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub start_screen: Screen,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_manifest_source")]
    pub manifest_source: String,
    #[serde(default = "crate::config::defaults::default_questions_source")]
    pub questions_source: String,
    /// TOML response table; the built-in table is used when unset.
    #[serde(default)]
    pub responses_path: Option<String>,
    #[serde(default = "crate::config::defaults::default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "crate::config::defaults::default_annotation_fade_ms")]
    pub annotation_fade_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            text_size: crate::config::defaults::default_text_size(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            start_screen: Screen::Video,
            log_level: crate::config::defaults::default_log_level(),
            manifest_source: crate::config::defaults::default_manifest_source(),
            questions_source: crate::config::defaults::default_questions_source(),
            responses_path: None,
            tick_interval_ms: crate::config::defaults::default_tick_interval_ms(),
            annotation_fade_ms: crate::config::defaults::default_annotation_fade_ms(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Top-level screens of the viewer.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Video,
    Questions,
    Responses,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Video, Screen::Questions, Screen::Responses];

    pub fn parse(raw: &str) -> Option<Screen> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "video" => Some(Screen::Video),
            "questions" | "qa" => Some(Screen::Questions),
            "responses" | "fixed" => Some(Screen::Responses),
            _ => None,
        }
    }

    pub fn is_flashcards(self) -> bool {
        matches!(self, Screen::Questions | Screen::Responses)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Screen::Video => "Video",
            Screen::Questions => "Guest Q&A",
            Screen::Responses => "Fixed Responses",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
