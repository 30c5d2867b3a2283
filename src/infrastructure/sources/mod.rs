pub mod http_source;

pub use http_source::{ADMIN_KEY_HEADER, HttpLogSource};
