use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, icon, row, text_input};
use cosmic::Element;

use crate::fl;
use crate::message::Message;

pub fn todo_input(value: &str) -> Element<'static, Message> {
    let input = text_input::text_input(fl!("input-placeholder"), value.to_string())
        .on_input(Message::InputChanged)
        .on_submit(|_| Message::InputSubmit)
        .width(Length::Fill);

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(input)
        .push(
            button::icon(icon::from_name("list-add-symbolic"))
                .on_press(Message::InputSubmit),
        )
        .into()
}
