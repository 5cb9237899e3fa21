use clap::{CommandFactory, Parser, Subcommand};
use glyphpass_cli_helpers::CommandTree;
use glyphpass_reveal::StaggerProfile;
use std::path::PathBuf;

use crate::{
    commands::{copy, generate, reveal, transform, GenerateOptions},
    Config, Result,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Glyphpass {
    /// Configuration file.
    #[clap(long, global = true, env = "GLYPHPASS_CONFIG")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compose passwords from a base word.
    #[clap(alias = "gen")]
    Generate {
        #[clap(flatten)]
        options: GenerateOptions,
    },
    /// Animate text one character at a time.
    Reveal {
        /// Delay between characters, for example 0.2s or 150ms.
        #[clap(short, long)]
        delay: Option<String>,

        /// Rules used to parse the delay: standard or legacy.
        #[clap(short, long)]
        profile: Option<StaggerProfile>,

        /// Text to animate.
        text: String,
    },
    /// Print the leetspeak form of a word.
    Transform {
        /// Word to transform.
        word: String,
    },
    /// Copy text to the clipboard.
    Copy {
        /// Text to copy.
        text: String,
    },
}

pub async fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("GLYPHPASS_CLI_JSON").ok().is_some() {
        let cmd = Glyphpass::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        std::process::exit(0);
    }

    let args = Glyphpass::parse();
    let config = Config::load(args.config.as_deref()).await?;

    match args.cmd {
        Command::Generate { options } => {
            generate::run(options, &config).await?
        }
        Command::Reveal {
            delay,
            profile,
            text,
        } => {
            reveal::run(&text, delay.as_deref(), profile, &config.reveal)
                .await?
        }
        Command::Transform { word } => transform::run(&word)?,
        Command::Copy { text } => copy::run(&text, &config.clipboard).await?,
    }
    Ok(())
}
