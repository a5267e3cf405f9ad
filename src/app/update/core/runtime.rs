use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;
use strategix_core::{load_manifest, load_question_dataset_or_default};
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadManifest => {
                let source = self.config.manifest_source.clone();
                Task::perform(
                    async move {
                        match load_manifest(&source) {
                            Ok(manifest) => Message::ManifestLoaded(manifest),
                            Err(err) => Message::ManifestLoadFailed(format!("{err:#}")),
                        }
                    },
                    |message| message,
                )
            }
            Effect::LoadQuestions => {
                let source = self.config.questions_source.clone();
                Task::perform(
                    async move { load_question_dataset_or_default(&source) },
                    Message::QuestionsLoaded,
                )
            }
            Effect::ResolveDuration(known) => {
                // Metadata arrives asynchronously; report it back as its own message.
                Task::perform(async move { known }, Message::DurationResolved)
            }
            Effect::CopyToClipboard(contents) => {
                debug!(chars = contents.chars().count(), "Copying answer to clipboard");
                iced::clipboard::write(contents)
            }
            Effect::QuitSafely => {
                info!("Shutting down viewer");
                self.stop_playback();
                iced::exit()
            }
        }
    }
}

pub(super) fn flashcard_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

pub(super) fn video_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if super::shortcuts::is_play_pause(&key, modifiers) {
                Some(Message::TogglePlayPause)
            } else if super::shortcuts::is_safe_quit(&key, modifiers) {
                Some(Message::SafeQuit)
            } else {
                None
            }
        }
        _ => None,
    }
}
