pub mod broadcasts;
pub mod error;
pub mod settings;
