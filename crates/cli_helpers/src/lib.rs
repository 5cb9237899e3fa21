//! Helper types and functions for the glyphpass command line.

pub mod messages;

/// Command tree used to print help output as JSON.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandTree {
    /// Name of the command.
    pub name: String,
    /// Short description of the command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Subcommands.
    pub commands: Vec<CommandTree>,
}

impl From<&clap::Command> for CommandTree {
    fn from(value: &clap::Command) -> Self {
        CommandTree {
            name: value.get_name().to_string(),
            about: value.get_about().map(|s| s.to_string()),
            commands: value.get_subcommands().map(|c| c.into()).collect(),
        }
    }
}
