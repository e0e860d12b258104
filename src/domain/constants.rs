/// Dictionary note inside the vault (source A).
pub const DEFAULT_NOTE_PATH: &str = "Custom Dictionary.md";

/// Fixed name of the exported word list (source B's replacement).
pub const EXPORT_FILE_NAME: &str = "Custom Dictionary.txt";

/// External lines starting with this prefix are metadata, not words.
pub const CHECKSUM_PREFIX: &str = "checksum";

pub const COMMAND_ID: &str = "sync";
pub const COMMAND_NAME: &str = "Sync Custom Dictionary";

pub const CONFIG_DIR: &str = ".config/cdsync";
