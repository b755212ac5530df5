// Composition root for the webhooks module.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the event store once and hand it to every use case handler.
// - Expose the HTTP router consumed by the binary and the end to end tests.

pub mod config;
pub mod http;
pub mod state;
