use cosmic::app::{Core, Task as CosmicTask, context_drawer};
use cosmic::iced::Length;
use cosmic::widget::{button, container, dialog, icon, scrollable, text_input};
use cosmic::{Application, Element, executor};

use crate::components::task_item::title_input_id;
use crate::config::TodoConfig;
use crate::core::home::{Home, Prompt};
use crate::fl;
use crate::message::Message;
use crate::pages;

pub struct Flags {
    pub config: TodoConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
}

pub struct TodoApp {
    core: Core,
    config: TodoConfig,
    cosmic_config: cosmic::cosmic_config::Config,
    home: Home,
    show_settings: bool,
}

impl Application for TodoApp {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.todo.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let mut home = Home::new();
        home.set_unique_titles_on_rename(flags.config.unique_titles_on_rename);

        let app = Self {
            core,
            config: flags.config,
            cosmic_config: flags.cosmic_config,
            home,
            show_settings: false,
        };

        (app, CosmicTask::none())
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        vec![
            button::icon(icon::from_name("emblem-system-symbolic"))
                .on_press(Message::OpenSettings)
                .into(),
        ]
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Message>> {
        if !self.show_settings {
            return None;
        }
        Some(
            context_drawer::context_drawer(
                container(scrollable(
                    container(pages::settings::settings_view(&self.config)).padding(16),
                ))
                .width(Length::Fill),
                Message::CloseSettings,
            )
            .title(fl!("settings")),
        )
    }

    fn dialog(&self) -> Option<Element<'_, Message>> {
        let prompt = self.home.prompt()?;

        let prompt_dialog = match prompt {
            Prompt::DuplicateTitle(_) => dialog()
                .title(fl!("duplicate-title"))
                .body(fl!("duplicate-body"))
                .primary_action(
                    button::suggested(fl!("duplicate-ok"))
                        .on_press(Message::AcknowledgeDuplicate),
                ),
            Prompt::ConfirmRemoval { title, .. } => {
                let body = if title.is_empty() {
                    fl!("remove-body")
                } else {
                    fl!("remove-body-named", title = title.clone())
                };
                dialog()
                    .title(fl!("remove-title"))
                    .body(body)
                    .primary_action(
                        button::destructive(fl!("remove-yes"))
                            .on_press(Message::ConfirmRemoval),
                    )
                    .secondary_action(
                        button::standard(fl!("remove-no"))
                            .on_press(Message::DeclineRemoval),
                    )
            }
        };

        Some(prompt_dialog.into())
    }

    fn on_escape(&mut self) -> CosmicTask<Message> {
        if self.show_settings {
            self.show_settings = false;
            self.core.window.show_context = false;
            return CosmicTask::none();
        }
        match self.home.prompt().cloned() {
            Some(Prompt::DuplicateTitle(_)) => self.home.acknowledge(),
            Some(Prompt::ConfirmRemoval { .. }) => {
                self.home.resolve_removal(false);
            }
            None => {
                let cancelled = self.home.cancel_all_editing();
                if cancelled > 0 {
                    log::debug!("Escape cancelled {} edit(s)", cancelled);
                }
            }
        }
        CosmicTask::none()
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::InputChanged(value) => {
                self.home.set_input(value);
            }

            Message::InputSubmit => {
                if let Err(e) = self.home.submit_input() {
                    log::debug!("Add not applied: {}", e);
                }
            }

            Message::ToggleTaskDone(id) => {
                self.home.toggle_task_done(id);
            }

            Message::RemoveTask(id) => {
                self.home.remove_task(id);
            }

            Message::StartEditing(id) => {
                if self.home.start_editing(id) {
                    return text_input::focus(title_input_id(id));
                }
            }

            Message::EditBufferChanged(id, value) => {
                self.home.set_edit_buffer(id, value);
            }

            Message::SubmitEditing(id) => {
                if let Err(e) = self.home.submit_editing(id) {
                    log::debug!("Rename of task {} not applied: {}", id, e);
                }
            }

            Message::CancelEditing(id) => {
                self.home.cancel_editing(id);
            }

            Message::AcknowledgeDuplicate => {
                self.home.acknowledge();
            }

            Message::ConfirmRemoval => {
                self.home.resolve_removal(true);
            }

            Message::DeclineRemoval => {
                self.home.resolve_removal(false);
            }

            Message::OpenSettings => {
                self.show_settings = true;
                self.core.window.show_context = true;
            }

            Message::CloseSettings => {
                self.show_settings = false;
                self.core.window.show_context = false;
            }

            Message::ToggleDebugLogging => {
                self.config.debug_logging = !self.config.debug_logging;
                todo::set_debug_logging(self.config.debug_logging);
                self.save_config();
            }

            Message::ToggleUniqueTitlesOnRename => {
                self.config.unique_titles_on_rename = !self.config.unique_titles_on_rename;
                self.home
                    .set_unique_titles_on_rename(self.config.unique_titles_on_rename);
                self.save_config();
            }
        }

        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        pages::home::home_view(&self.home)
    }
}

impl TodoApp {
    fn save_config(&self) {
        use cosmic::cosmic_config::CosmicConfigEntry;
        if let Err(e) = self.config.write_entry(&self.cosmic_config) {
            log::error!("Failed to save config: {:?}", e);
        }
    }
}
