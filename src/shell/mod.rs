// Composition root for the activities context.
//
// - Read config from the environment.
// - Build the directory store from the built-in seed or a seed file.
// - Wire the store into use case handlers and expose the HTTP router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
