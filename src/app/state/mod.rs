mod constants;
mod flashcards;
mod video;

use crate::config::{AppConfig, Screen};
use iced::Task;
use std::path::Path;
use strategix_core::{QuestionDataset, ResponseTable, load_response_table};
use tracing::{info, warn};

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;
pub(in crate::app) use flashcards::FlashcardState;
pub(in crate::app) use video::VideoState;

/// Core application state composed of per-screen sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) screen: Screen,
    pub(super) video: VideoState,
    pub(super) questions: FlashcardState<QuestionDataset>,
    pub(super) responses: FlashcardState<ResponseTable>,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig) -> (App, Task<Message>) {
        let responses = load_responses(config.responses_path.as_deref());
        let mut app = App {
            screen: config.start_screen,
            video: VideoState::new(),
            questions: FlashcardState::loading(),
            responses: FlashcardState::ready(responses),
            config,
        };
        info!(screen = %app.screen, "Viewer ready");

        let effects = vec![Effect::LoadManifest, Effect::LoadQuestions];
        let init_task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
        (app, init_task)
    }

    /// Text size for flashcard content at the deck's current zoom.
    pub(super) fn scaled_size(&self, zoom: f32, factor: f32) -> f32 {
        self.config.text_size as f32 * factor * zoom
    }
}

fn load_responses(path: Option<&str>) -> ResponseTable {
    let Some(path) = path else {
        return ResponseTable::builtin();
    };
    match load_response_table(Path::new(path)) {
        Ok(table) => table,
        Err(err) => {
            warn!(path, "Using built-in response table: {err:#}");
            ResponseTable::builtin()
        }
    }
}

#[cfg(test)]
pub(in crate::app) fn test_app(config: AppConfig) -> App {
    App {
        screen: config.start_screen,
        video: VideoState::new(),
        questions: FlashcardState::loading(),
        responses: FlashcardState::ready(ResponseTable::builtin()),
        config,
    }
}
