//! User directory lookups against the external directory service.

mod http;

pub use http::HttpUserDirectory;
