pub(crate) mod terminal;

pub use glyphpass_cli_helpers::messages;
