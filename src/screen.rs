// SPDX-License-Identifier: GPL-3.0-only

pub mod rooms;

pub use rooms::RoomView;

pub enum Screen {
    Welcome,
    Rooms(RoomView),
}
