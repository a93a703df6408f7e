// SPDX-License-Identifier: GPL-3.0-only

//! Virtboard demo
//!
//! Opens a window with two text fields and the on-screen keyboard between
//! them.

use virtboard::{app, app_settings};

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("virtboard=info".parse().unwrap()),
        )
        .init();

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(
            app_settings::DEFAULT_WIDTH,
            app_settings::DEFAULT_HEIGHT,
        ))
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(app_settings::MIN_WIDTH)
                .min_height(app_settings::MIN_HEIGHT),
        );

    tracing::info!("Starting {}", app_settings::APP_ID);

    cosmic::app::run::<app::AppModel>(settings, ())
}
