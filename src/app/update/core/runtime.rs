use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                self.save_config();
                Task::none()
            }
            Effect::SaveProgress => {
                self.persist_position();
                Task::none()
            }
            Effect::SaveMarkers => {
                self.persist_markers();
                Task::none()
            }
            Effect::SaveHistory => {
                self.persist_history();
                Task::none()
            }
            // Delivered on the next update cycle, after the current frame's view.
            Effect::ScheduleLabelLayout(generation) => {
                Task::done(Message::CommitLabelLayout(generation))
            }
            Effect::QuitSafely => {
                info!(position = %self.reader.position, "Saving reading state before quit");
                self.save_config();
                self.persist_position();
                self.persist_markers();
                self.persist_history();
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(iced::window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(iced::window::Event::Moved(position)) => Some(Message::WindowMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
