pub(crate) fn default_text_size() -> u32 {
    20
}

pub(crate) fn default_window_width() -> f32 {
    1200.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_manifest_source() -> String {
    "data/video.json".to_string()
}

pub(crate) fn default_questions_source() -> String {
    "data/qna/borgo-batone.json".to_string()
}

pub(crate) fn default_tick_interval_ms() -> u64 {
    50
}

pub(crate) fn default_annotation_fade_ms() -> u64 {
    250
}
