pub mod frame;
pub mod generate;
pub mod show;
pub mod verify;
pub mod version;
