mod glyphpass;

pub use glyphpass::{run, Command, Glyphpass};
