pub mod constants;
pub mod error;
pub mod frame;
pub mod region;
pub mod settings;
