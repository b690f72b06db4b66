pub mod members;
pub mod neighbors;
pub mod related;
pub mod show;
