use cosmic::iced::{Alignment, Length};
use cosmic::widget::{row, text};
use cosmic::Element;

use crate::fl;
use crate::message::Message;

/// App title with the localized task count.
pub fn header(count: usize) -> Element<'static, Message> {
    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::title3(fl!("app-title")).width(Length::Fill))
        .push(text::body(fl!("header-count", count = count)))
        .into()
}
