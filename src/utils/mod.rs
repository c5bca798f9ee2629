/*
* Re-exports for utility modules like global error handling.
*/

pub mod error_handler;
