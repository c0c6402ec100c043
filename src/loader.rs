//! Module loading
//!
//! The bootstrapper does not construct its mapping library itself; it asks a
//! [`ModuleLoader`] for a library by symbolic name and waits for it. That
//! wait is the only suspension point of a bootstrap.

use crate::{
    core::constants::DEFAULT_MODULE, library::MapLibrary, prelude::HashMap, MapError, Result,
};
use async_trait::async_trait;

/// Resolves a symbolic module name to a mapping library
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    async fn require(&self, name: &str) -> Result<MapLibrary>;
}

/// Loader over a fixed set of in-process libraries
#[derive(Debug, Clone)]
pub struct StaticLoader {
    modules: HashMap<String, MapLibrary>,
}

impl StaticLoader {
    /// A loader with no modules registered
    pub fn empty() -> Self {
        Self {
            modules: HashMap::default(),
        }
    }

    pub fn register(mut self, library: MapLibrary) -> Self {
        self.modules.insert(library.name().to_string(), library);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }
}

impl Default for StaticLoader {
    /// Registers the built-in library under [`DEFAULT_MODULE`]
    fn default() -> Self {
        Self::empty().register(MapLibrary::new(DEFAULT_MODULE))
    }
}

#[async_trait]
impl ModuleLoader for StaticLoader {
    async fn require(&self, name: &str) -> Result<MapLibrary> {
        log::debug!("requiring module '{}'", name);
        self.modules
            .get(name)
            .cloned()
            .ok_or_else(|| MapError::ModuleNotFound(name.to_string()))
    }
}

/// Gives up on a slow loader after a fixed delay
#[cfg(feature = "tokio-runtime")]
pub struct TimeoutLoader<L> {
    inner: L,
    timeout: std::time::Duration,
}

#[cfg(feature = "tokio-runtime")]
impl<L: ModuleLoader> TimeoutLoader<L> {
    pub fn new(inner: L, timeout: std::time::Duration) -> Self {
        Self { inner, timeout }
    }
}

#[cfg(feature = "tokio-runtime")]
#[async_trait]
impl<L: ModuleLoader> ModuleLoader for TimeoutLoader<L> {
    async fn require(&self, name: &str) -> Result<MapLibrary> {
        match tokio::time::timeout(self.timeout, self.inner.require(name)).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("module '{}' not loaded after {:?}", name, self.timeout);
                Err(MapError::ModuleLoad {
                    name: name.to_string(),
                    reason: format!("timed out after {:?}", self.timeout),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_loader_knows_default_module() {
        let loader = StaticLoader::default();
        assert!(loader.contains(DEFAULT_MODULE));

        let library = futures::executor::block_on(loader.require(DEFAULT_MODULE)).unwrap();
        assert_eq!(library.name(), DEFAULT_MODULE);
    }

    #[test]
    fn test_unknown_module() {
        let loader = StaticLoader::empty();
        let err = futures::executor::block_on(loader.require("leaflet")).unwrap_err();
        assert!(matches!(err, MapError::ModuleNotFound(name) if name == "leaflet"));
    }

    #[cfg(feature = "tokio-runtime")]
    #[tokio::test]
    async fn test_timeout_loader() {
        struct Stalled;

        #[async_trait]
        impl ModuleLoader for Stalled {
            async fn require(&self, _name: &str) -> Result<MapLibrary> {
                futures::future::pending().await
            }
        }

        let fast = TimeoutLoader::new(StaticLoader::default(), std::time::Duration::from_secs(1));
        assert!(fast.require(DEFAULT_MODULE).await.is_ok());

        let slow = TimeoutLoader::new(Stalled, std::time::Duration::from_millis(10));
        let err = slow.require(DEFAULT_MODULE).await.unwrap_err();
        assert!(matches!(err, MapError::ModuleLoad { .. }));
    }
}
