use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::constants::{COMMAND_NAME, DEFAULT_NOTE_PATH};

#[derive(Parser, Debug)]
#[command(name = "cdsync", version, about = "Custom dictionary sync CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "CDSYNC_VAULT",
        default_value = ".",
        help = "Vault root that holds the dictionary note"
    )]
    pub vault: PathBuf,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_NOTE_PATH,
        help = "Dictionary note path, relative to the vault root"
    )]
    pub note: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = COMMAND_NAME)]
    Sync {
        #[arg(long, help = "External word list; prompts on stdin when omitted")]
        file: Option<PathBuf>,
        #[arg(long, help = "Directory receiving the exported word list [default: ~/Downloads]")]
        out_dir: Option<PathBuf>,
    },
    #[command(about = "Show the merged dictionary without writing anything")]
    Preview {
        #[arg(long, help = "External word list; prompts on stdin when omitted")]
        file: Option<PathBuf>,
    },
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    #[command(about = "List recent syncs")]
    History {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    Show,
    Set {
        #[arg(long, action = clap::ArgAction::Set)]
        to_lower_case: Option<bool>,
    },
    Reset,
}
