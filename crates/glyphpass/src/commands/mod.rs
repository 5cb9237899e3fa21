pub mod copy;
pub mod generate;
pub mod reveal;
pub mod transform;

pub use generate::GenerateOptions;
