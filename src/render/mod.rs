pub mod backend;
pub mod module;
pub mod scripted;
