use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, checkbox, container, divider, icon, row, text, text_input};
use cosmic::Element;

use crate::core::task::{Task, TaskId};
use crate::message::Message;

const COL_CHECK: f32 = 28.0;
const DIVIDER_HEIGHT: f32 = 24.0;

/// Widget id of a row's inline title field, used to move focus into it.
pub fn title_input_id(id: TaskId) -> widget::Id {
    widget::Id::new(format!("task-title-{}", id))
}

/// Render one task row.
///
/// While `editing`, the title becomes a text field holding `title` (the row's
/// edit buffer), the edit button turns into a cancel button and the remove
/// button is disabled.
pub fn task_item(task: &Task, title: &str, editing: bool) -> Element<'static, Message> {
    let id = task.id;

    let marker = container(
        checkbox("", task.done).on_toggle(move |_| Message::ToggleTaskDone(id)),
    )
    .width(Length::Fixed(COL_CHECK));

    let label: Element<'static, Message> = if editing {
        text_input::text_input("", title.to_string())
            .id(title_input_id(id))
            .on_input(move |v| Message::EditBufferChanged(id, v))
            .on_submit(move |_| Message::SubmitEditing(id))
            .width(Length::Fill)
            .into()
    } else if task.done {
        text::caption(title.to_string()).width(Length::Fill).into()
    } else {
        text::body(title.to_string()).width(Length::Fill).into()
    };

    let edit_btn = if editing {
        button::icon(icon::from_name("window-close-symbolic"))
            .on_press(Message::CancelEditing(id))
    } else {
        button::icon(icon::from_name("document-edit-symbolic"))
            .on_press(Message::StartEditing(id))
    };

    let remove_btn = button::icon(icon::from_name("edit-delete-symbolic"))
        .on_press_maybe((!editing).then_some(Message::RemoveTask(id)));

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(marker)
        .push(label)
        .push(edit_btn)
        .push(container(divider::vertical::default()).height(Length::Fixed(DIVIDER_HEIGHT)))
        .push(remove_btn)
        .width(Length::Fill)
        .into()
}
