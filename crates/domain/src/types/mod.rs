//! Domain data types

pub mod credentials;

pub use credentials::*;
