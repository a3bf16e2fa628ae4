use cosmic::iced::Length;
use cosmic::widget::{column, container, scrollable};
use cosmic::Element;

use crate::components::header::header;
use crate::components::task_list::task_list;
use crate::components::todo_input::todo_input;
use crate::core::home::Home;
use crate::message::Message;

/// Header and composer stay put; only the task list scrolls.
pub fn home_view(home: &Home) -> Element<'static, Message> {
    let list = scrollable(task_list(home)).height(Length::Fill);

    let content = column()
        .spacing(12)
        .padding(16)
        .width(Length::Fill)
        .push(header(home.count()))
        .push(todo_input(home.input()))
        .push(list);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
