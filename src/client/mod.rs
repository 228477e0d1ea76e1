pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod identity;
pub mod router;
pub mod routes;

#[cfg(test)]
mod test_util;

pub use app::App;
