//! Fixture building blocks used by the suite lifecycle.
//!
//! - `data` - the fixed store dataset inserted before every test
//! - `mock` - the canned dependency expectations registered at suite start
//! - `request` - rewrite rules applied to named outgoing test requests
//! - `store` - store access for wiping and reseeding the dataset

pub mod data;
pub mod mock;
pub mod request;
pub mod store;
