// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use app::RoomViewer;
use iced::window::Settings;
use roomview_core::config::RoomViewConfig;
use roomview_core::source::HttpRoomSource;
use tracing_subscriber::EnvFilter;

mod app;
mod i18n;
mod screen;

fn main() -> Result<(), iced::Error> {
    // Loads the .env file too, so RUST_LOG can live there
    let config = RoomViewConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let source = match config.and_then(|config| HttpRoomSource::new(&config)) {
        Ok(source) => source,
        Err(err) => {
            tracing::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!(url = source.url(), "starting room viewer");

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    iced::application(RoomViewer::title, RoomViewer::update, RoomViewer::view)
        .theme(RoomViewer::theme)
        .window(Settings {
            position: iced::window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .run_with(move || RoomViewer::new(Arc::new(source)))
}
