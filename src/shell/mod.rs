// Composition root.
//
// Responsibilities:
// - Read config from the environment.
// - Instantiate the record store and register the event schema with it,
//   explicitly, before the server accepts requests.
// - Pick the authorizer and wire everything into AppState.
// - Mount the HTTP routes behind the administrator gate.

pub mod config;
pub mod http;
pub mod state;
