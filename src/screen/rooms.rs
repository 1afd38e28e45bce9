// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use iced::task;
use iced::widget::{button, column, container, keyed_column, row, scrollable, text};
use iced::{Alignment, Element, Length, Task};
use roomview_core::error::FetchFailure;
use roomview_core::models::room::{Room, RoomCollection, RoomId};
use roomview_core::source::RoomSource;
use roomview_utils::styling::*;

use crate::fl;

/// Identifies a single lifetime of a [`RoomView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountId(u64);

impl MountId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Fetches the rooms once when mounted and lists them
pub struct RoomView {
    mount: MountId,
    state: State,
    // Aborts the fetch on drop so a torn down view never receives its result
    _fetch: Option<task::Handle>,
}

enum State {
    Empty,
    Populated { rooms: RoomCollection },
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Asks the parent to go back (tears the view down)
    Back,
    /// Callback of the fetch issued on mount
    RoomsFetched {
        mount: MountId,
        result: Result<RoomCollection, FetchFailure>,
    },
}

pub enum Action {
    None,
    Back,
}

impl RoomView {
    pub fn new(source: Arc<dyn RoomSource>) -> (Self, Task<Message>) {
        let (mut view, fetch) = Self::mount(source);
        let (task, handle) = Task::perform(fetch, std::convert::identity).abortable();
        view._fetch = Some(handle.abort_on_drop());

        (view, task)
    }

    /// Creates an empty view and the one fetch of its lifetime.
    ///
    /// The fetch does nothing until awaited.
    pub fn mount(
        source: Arc<dyn RoomSource>,
    ) -> (Self, impl Future<Output = Message> + Send + 'static) {
        let mount = MountId::next();
        tracing::debug!(?mount, "mounting room view");

        let fetch = async move {
            let result = source.fetch_rooms().await;
            Message::RoomsFetched { mount, result }
        };

        (
            Self {
                mount,
                state: State::Empty,
                _fetch: None,
            },
            fetch,
        )
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Back => Action::Back,
            Message::RoomsFetched { mount, result } => {
                if mount != self.mount {
                    tracing::debug!(
                        ?mount,
                        current = ?self.mount,
                        "ignoring rooms fetched for another view"
                    );
                    return Action::None;
                }

                match result {
                    Ok(rooms) => {
                        tracing::info!(count = rooms.len(), "rooms loaded");
                        self.state = State::Populated { rooms };
                    }
                    Err(err) => tracing::error!(%err, "error fetching rooms"),
                }

                Action::None
            }
        }
    }

    pub fn rooms(&self) -> &[Room] {
        match &self.state {
            State::Empty => &[],
            State::Populated { rooms } => rooms.as_slice(),
        }
    }

    /// Key and label of every entry on the list, in order
    pub fn list_items(&self) -> impl Iterator<Item = (RoomId, String)> + '_ {
        self.rooms().iter().map(|room| (room.id, room.to_string()))
    }

    pub fn view(&self) -> Element<'_, Message> {
        let list = keyed_column(self.list_items().map(|(key, label)| (key, list_entry(label))))
            .spacing(GLOBAL_SPACING);

        let content = container(scrollable(list).width(LIST_WIDTH))
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .padding(50.);

        column![header(), content]
            .spacing(GLOBAL_SPACING)
            .height(Length::Fill)
            .width(Length::Fill)
            .into()
    }
}

//
// VIEW COMPOSING
//

fn header<'a>() -> Element<'a, Message> {
    let back_button = button(text(fl!("back")).center())
        .on_press(Message::Back)
        .height(GLOBAL_BUTTON_HEIGHT);

    row![back_button, text(fl!("room-list")).size(TITLE_TEXT_SIZE)]
        .align_y(Alignment::Center)
        .spacing(GLOBAL_SPACING)
        .padding(3.)
        .into()
}

fn list_entry<'a>(label: String) -> Element<'a, Message> {
    row![text("•").size(TEXT_SIZE), text(label).size(TEXT_SIZE)]
        .spacing(GLOBAL_SPACING)
        .into()
}
