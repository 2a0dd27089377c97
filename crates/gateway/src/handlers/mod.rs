//! HTTP request handlers.

pub mod catalog_handler;
pub mod echo_handler;
pub mod site_handler;

pub use catalog_handler::catalog_routes;
pub use echo_handler::echo_routes;
pub use site_handler::site_routes;
