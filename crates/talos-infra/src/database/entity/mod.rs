//! SeaORM entities backing the post store.

pub mod post;
