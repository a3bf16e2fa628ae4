use cosmic::iced::Length;
use cosmic::widget::{column, container, text};
use cosmic::Element;

use crate::components::task_item::task_item;
use crate::core::home::Home;
use crate::fl;
use crate::message::Message;

/// One row per task, in collection order.
pub fn task_list(home: &Home) -> Element<'static, Message> {
    if home.tasks().is_empty() {
        return container(text::body(fl!("list-empty")))
            .padding(32)
            .center_x(Length::Fill)
            .into();
    }

    let mut content = column().spacing(4).width(Length::Fill);
    for task in home.tasks() {
        content = content.push(task_item(task, home.row_title(task), home.is_editing(task.id)));
    }
    content.into()
}
