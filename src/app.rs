// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use iced::widget::{button, column, container, text};
use iced::{Alignment, Length, Task};
use roomview_core::source::RoomSource;
use roomview_utils::styling::SQUAREBUTTONXY;

use crate::fl;
use crate::screen::{RoomView, Screen, rooms};

pub struct RoomViewer {
    source: Arc<dyn RoomSource>,
    screen: Screen,
}

#[derive(Debug, Clone)]
pub enum Message {
    Rooms(rooms::Message),
    OpenRooms,
}

impl RoomViewer {
    /// Boots straight into the room list
    pub fn new(source: Arc<dyn RoomSource>) -> (Self, Task<Message>) {
        let (rooms, task) = RoomView::new(source.clone());

        (
            Self {
                source,
                screen: Screen::Rooms(rooms),
            },
            task.map(Message::Rooms),
        )
    }

    pub fn title(&self) -> String {
        fl!("app-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Rooms(message) => {
                let Screen::Rooms(rooms) = &mut self.screen else {
                    tracing::debug!(?message, "room view is not shown, dropping message");
                    return Task::none();
                };

                match rooms.update(message) {
                    rooms::Action::None => {}
                    rooms::Action::Back => self.screen = Screen::Welcome,
                }
            }
            Message::OpenRooms => {
                let (rooms, task) = RoomView::new(self.source.clone());
                self.screen = Screen::Rooms(rooms);
                return task.map(Message::Rooms);
            }
        }

        Task::none()
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        match &self.screen {
            Screen::Welcome => self.welcome_view(),
            Screen::Rooms(rooms) => rooms.view().map(Message::Rooms),
        }
    }

    pub fn theme(&self) -> iced::Theme {
        iced::Theme::GruvboxLight
    }

    fn welcome_view(&self) -> iced::Element<'_, Message> {
        let rooms_button = button(text(fl!("rooms")).center())
            .width(SQUAREBUTTONXY)
            .height(SQUAREBUTTONXY)
            .on_press(Message::OpenRooms);

        let app_text = text(format!("roomview {}", env!("CARGO_PKG_VERSION")))
            .align_x(Alignment::End)
            .width(Length::Fill);

        column![container(rooms_button).center(Length::Fill), app_text]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
