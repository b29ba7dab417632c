use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// agentgen - installer asset generator for agent-based installs
#[derive(Parser, Debug)]
#[command(name = "agentgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load inputs, produce the NMState manifest and acquire the base ISO
    Generate {
        /// Asset directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Reload the persisted NMState manifest and validate it
    Validate {
        /// Asset directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Print the bootstrap IP of the first host
    NodeZeroIp {
        /// Asset directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Print the NetworkManager files rendered for every host
    NetworkFiles {
        /// Asset directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

impl Commands {
    pub fn dir(&self) -> &PathBuf {
        match self {
            Commands::Generate { dir }
            | Commands::Validate { dir }
            | Commands::NodeZeroIp { dir }
            | Commands::NetworkFiles { dir } => dir,
        }
    }
}
