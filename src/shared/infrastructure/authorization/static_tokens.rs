use crate::shared::infrastructure::authorization::{Authorizer, Capability, Principal};
use std::collections::HashSet;

/// Grants every capability to callers presenting one of a fixed set of
/// administrator tokens, and nothing to anyone else.
pub struct StaticTokenAuthorizer {
    admin_tokens: HashSet<String>,
}

impl StaticTokenAuthorizer {
    pub fn new(admin_tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            admin_tokens: admin_tokens.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Authorizer for StaticTokenAuthorizer {
    async fn allows(&self, principal: &Principal, _capability: Capability) -> bool {
        principal
            .token
            .as_ref()
            .is_some_and(|token| self.admin_tokens.contains(token))
    }
}

/// Treats every caller as an administrator. Local development and tests.
pub struct PermitAllAuthorizer;

#[async_trait::async_trait]
impl Authorizer for PermitAllAuthorizer {
    async fn allows(&self, _principal: &Principal, _capability: Capability) -> bool {
        true
    }
}
