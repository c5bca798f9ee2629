/*
* Re-export submodules related to configuration, environment variables, and app state.
*/

pub mod environment;
pub mod state;
