use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, row, text, toggler};
use cosmic::Element;

use crate::config::TodoConfig;
use crate::fl;
use crate::message::Message;

pub fn settings_view(config: &TodoConfig) -> Element<'static, Message> {
    column()
        .spacing(12)
        .push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::body(fl!("settings-debug-logging")).width(Length::Fill))
                .push(toggler(config.debug_logging).on_toggle(|_| Message::ToggleDebugLogging)),
        )
        .push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::body(fl!("settings-unique-rename")).width(Length::Fill))
                .push(
                    toggler(config.unique_titles_on_rename)
                        .on_toggle(|_| Message::ToggleUniqueTitlesOnRename),
                ),
        )
        .into()
}
