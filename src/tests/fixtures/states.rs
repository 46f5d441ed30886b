use crate::shared::infrastructure::authorization::static_tokens::PermitAllAuthorizer;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::stores::event_store;
use std::sync::Arc;

/// App state over a ready in-memory store, with authorization wide open
/// so handler behavior can be exercised directly.
pub async fn make_test_state() -> AppState {
    AppState::new(Arc::new(event_store().await), Arc::new(PermitAllAuthorizer))
}

/// App state whose store refuses every call.
pub fn make_offline_state() -> AppState {
    let mut store = InMemoryRecordStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), Arc::new(PermitAllAuthorizer))
}
