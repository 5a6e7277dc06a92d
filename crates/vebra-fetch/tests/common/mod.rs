//! Shared fixtures for the HTTP-level tests.

#![allow(dead_code, unreachable_pub)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use vebra_fetch::{ClientConfig, FeedApi};
use vebra_store::{MemoryTokenStore, Result as StoreResult, TokenStore};
use vebra_types::{Credentials, Token};
use wiremock::MockServer;

pub const BASIC_AUTH: &str = "Basic dXNlcjpwYXNz";
pub const CACHED_TOKEN: &str = "abc123";
pub const CACHED_AUTH: &str = "Basic YWJjMTIz";

pub const BRANCHES_PATH: &str = "/export/FEED/v10/branch";
pub const BRANCHES_XML: &str = "<branches>\
    <branch>\
        <name>Shelbourne Estates Nelson</name>\
        <firmid>1055</firmid>\
        <branchid>1</branchid>\
        <url>http://webservices.vebra.com/export/FEED/v10/branch/3741</url>\
    </branch>\
</branches>";

pub const PROPERTY_XML: &str = r#"<property id="29015446" propertyid="1118" firmid="1055" branchid="1">
    <address><town>Nelson</town></address>
    <price currency="GBP">125000</price>
    <bedrooms>3</bedrooms>
</property>"#;

/// Token store that counts saves.
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: MemoryTokenStore,
    saves: AtomicUsize,
}

impl CountingStore {
    pub fn with_token(value: &str) -> Self {
        Self {
            inner: MemoryTokenStore::with_token(&Token::issued(value)),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn stored_value(&self) -> Option<String> {
        self.inner.load().ok().map(|token| token.value().to_string())
    }
}

impl TokenStore for CountingStore {
    fn load(&self) -> StoreResult<Token> {
        self.inner.load()
    }

    fn save(&self, token: &Token) -> StoreResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(token)
    }
}

pub fn config_for(base_url: String) -> ClientConfig {
    ClientConfig {
        base_url,
        ..ClientConfig::default()
    }
}

pub fn api(server: &MockServer, store: Arc<dyn TokenStore>) -> FeedApi {
    FeedApi::with_config(
        "FEED",
        Credentials::new("user", "pass"),
        store,
        config_for(server.uri()),
    )
    .unwrap()
}
