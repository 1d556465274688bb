//! Transient object URLs for user-picked files.
//!
//! SYSTEM CONTEXT
//! ==============
//! An object URL pins file content in browser memory until it is revoked.
//! Providers that mint URLs go through `ObjectUrlStore` so the browser
//! binding (`hydrate`) and the in-memory store used for server rendering and
//! tests share one contract: every created URL is revoked exactly once.

#[cfg(test)]
#[path = "object_url_test.rs"]
mod object_url_test;

use std::collections::HashSet;

/// Errors produced while minting an object URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectUrlError {
    #[error("object URL creation failed: {0}")]
    Create(String),
}

/// Creates and releases object URLs for one kind of file handle.
pub trait ObjectUrlStore {
    type File;

    /// Display name of a picked file.
    fn file_name(file: &Self::File) -> String;

    /// Mint a URL referencing `file`'s content.
    ///
    /// # Errors
    ///
    /// Returns `ObjectUrlError::Create` when the platform refuses the file.
    fn create(&mut self, file: &Self::File) -> Result<String, ObjectUrlError>;

    /// Release the content behind `url`.
    fn revoke(&mut self, url: &str);
}

/// Browser object URLs backed by `URL.createObjectURL`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserObjectUrls;

#[cfg(feature = "hydrate")]
impl ObjectUrlStore for BrowserObjectUrls {
    type File = web_sys::File;

    fn file_name(file: &web_sys::File) -> String {
        file.name()
    }

    fn create(&mut self, file: &web_sys::File) -> Result<String, ObjectUrlError> {
        web_sys::Url::create_object_url_with_blob(file).map_err(|e| ObjectUrlError::Create(format!("{e:?}")))
    }

    fn revoke(&mut self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            leptos::logging::warn!("revoke_object_url failed for {url}: {e:?}");
        }
    }
}

/// Collect the files out of an `<input type="file">` change event target.
#[cfg(feature = "hydrate")]
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// A file held entirely in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        Self { name: name.to_owned(), bytes: bytes.into() }
    }
}

/// In-memory object URL store.
///
/// Mints `blob:memory/<uuid>` URLs and tracks which are still live. An
/// optional limit on live URLs makes `create` fail once reached.
#[derive(Clone, Debug, Default)]
pub struct MemoryObjectUrls {
    live: HashSet<String>,
    revoked: Vec<String>,
    limit: Option<usize>,
}

impl MemoryObjectUrls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit), ..Self::default() }
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.live.contains(url)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// URLs released so far, in revoke order.
    pub fn revoked(&self) -> &[String] {
        &self.revoked
    }
}

impl ObjectUrlStore for MemoryObjectUrls {
    type File = MemoryFile;

    fn file_name(file: &MemoryFile) -> String {
        file.name.clone()
    }

    fn create(&mut self, file: &MemoryFile) -> Result<String, ObjectUrlError> {
        if self.limit.is_some_and(|limit| self.live.len() >= limit) {
            return Err(ObjectUrlError::Create(format!("live URL limit reached for {}", file.name)));
        }
        let url = format!("blob:memory/{}", uuid::Uuid::new_v4());
        self.live.insert(url.clone());
        Ok(url)
    }

    fn revoke(&mut self, url: &str) {
        if self.live.remove(url) {
            self.revoked.push(url.to_owned());
        } else {
            leptos::logging::warn!("revoke of unknown object URL {url}");
        }
    }
}

/// Object URL store for the current build target.
#[cfg(feature = "hydrate")]
pub type PlatformObjectUrls = BrowserObjectUrls;

/// Object URL store for the current build target.
#[cfg(not(feature = "hydrate"))]
pub type PlatformObjectUrls = MemoryObjectUrls;
