/*
* Status API endpoints and routes module.
* The three public endpoints of the demo: health, home and info.
*/

pub mod handler;
pub mod routes;

pub use routes::status_routes;
