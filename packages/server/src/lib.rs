// Tweet video download API
//
// Thin HTTP surface over the `vidextract` pipeline: validate the posted URL,
// run fetch + extraction, map outcomes onto the JSON response contract.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;

pub use config::Config;
