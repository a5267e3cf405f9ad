mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, SIGNAL_POLL_INTERVAL};
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::{Duration, Instant};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![time::every(SIGNAL_POLL_INTERVAL).map(|_| Message::PollSystemSignals)];

        // Each screen owns its key listener; switching screens drops the old one.
        if app.screen.is_flashcards() {
            subscriptions.push(event::listen_with(runtime::flashcard_event_to_message));
        } else {
            subscriptions.push(event::listen_with(runtime::video_event_to_message));
        }

        if app.needs_ticks(Instant::now()) {
            let interval = Duration::from_millis(app.config.tick_interval_ms);
            subscriptions.push(time::every(interval).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
