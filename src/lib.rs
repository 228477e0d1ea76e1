//! QuickStay web client.
//!
//! The crate renders the hotel booking site's shell: the route table, placeholder pages
//! and the site header, which reads the session status from an external identity
//! provider.

#![allow(non_snake_case)]

pub mod client;
pub mod model;
