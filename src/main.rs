// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use iced_folio::ui::theming::ThemeMode;
use pico_args;
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let theme = args
        .opt_value_from_str::<_, String>("--theme")
        .unwrap_or(None)
        .and_then(|value| match value.as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        });

    let flags = Flags {
        config_dir: args
            .opt_value_from_str::<_, PathBuf>("--config-dir")
            .unwrap_or(None),
        profile_path: args
            .opt_value_from_str::<_, PathBuf>("--profile")
            .unwrap_or(None),
        theme,
    };

    app::run(flags)
}
