pub mod require_admin_key;

pub use require_admin_key::require_admin_key;
