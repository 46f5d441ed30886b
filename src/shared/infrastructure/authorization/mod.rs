// Port for the host platform's capability check. The HTTP layer builds a
// Principal from the request and asks whether it carries a capability;
// how that is decided belongs to the adapter.

use async_trait::async_trait;

/// The caller as far as this service can see it: an opaque bearer token,
/// if one was presented at all.
#[derive(Debug, Clone, Default)]
pub struct Principal {
    pub token: Option<String>,
}

impl Principal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ManageEvents,
}

#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn allows(&self, principal: &Principal, capability: Capability) -> bool;
}

pub mod static_tokens;
