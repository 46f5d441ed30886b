use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

pub struct HttpConfig {
    pub bind_addr: SocketAddr,
    /// Bearer tokens granted the administrator capability. Empty means
    /// no tokens were configured; the bootstrap falls back to the
    /// permit-all authorizer.
    pub admin_tokens: Vec<String>,
}

impl HttpConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw_addr =
            std::env::var("EVENT_API_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .with_context(|| format!("invalid EVENT_API_ADDR: {raw_addr}"))?;
        let admin_tokens = std::env::var("ADMIN_TOKENS")
            .map(|raw| parse_admin_tokens(&raw))
            .unwrap_or_default();
        Ok(Self {
            bind_addr,
            admin_tokens,
        })
    }
}

pub fn parse_admin_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
