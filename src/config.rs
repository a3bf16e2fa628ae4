use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct TodoConfig {
    /// Let this crate's debug records through the journal filter.
    pub debug_logging: bool,
    /// Reject a rename whose new title already belongs to another task.
    /// Off by default: only adds are checked for duplicates.
    pub unique_titles_on_rename: bool,
}
