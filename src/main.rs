use cosmic::app::Settings;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::Limits;

mod application;
mod components;
mod localize;
mod message;
mod pages;

use todo::config;
use todo::core;

use application::{Flags, TodoApp};
use config::{CONFIG_VERSION, TodoConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cosmic_cfg = cosmic::cosmic_config::Config::new("dev.todo.app", CONFIG_VERSION)?;
    let config = TodoConfig::get_entry(&cosmic_cfg).unwrap_or_else(|(_, cfg)| cfg);

    // Log to the systemd user journal (`journalctl --user -t todo -f`).
    // Our own targets at info/debug (per config), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                if metadata.target().starts_with("todo") {
                    let max = if todo::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = systemd_journal_logger::JournalLog::new()?
            .with_syslog_identifier("todo".to_string());

        todo::set_debug_logging(config.debug_logging);

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal }))?;
        // Global max must be Debug so debug records can pass once toggled on
        log::set_max_level(log::LevelFilter::Debug);
    }

    localize::localize();

    let settings = Settings::default()
        .size_limits(Limits::NONE.min_width(320.0).min_height(480.0));

    let flags = Flags { config, cosmic_config: cosmic_cfg };
    cosmic::app::run::<TodoApp>(settings, flags)?;

    Ok(())
}
