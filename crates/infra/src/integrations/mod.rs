//! External backend integrations

pub mod cartoncloud;
pub mod zoho;
