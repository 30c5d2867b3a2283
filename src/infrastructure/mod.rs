pub mod security;
pub mod sources;
pub mod time;
