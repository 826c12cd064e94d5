//! Cache Key Module
//!
//! Namespaced key construction so unrelated data sets sharing one cache
//! never collide.

use std::fmt;

// == Cache Key ==
/// A cache key of the form `<namespace>_<discriminator>`.
///
/// ```
/// use pokecache::cache::CacheKey;
///
/// assert_eq!(CacheKey::page("location_areas", 0).as_str(), "location_areas_0");
/// assert_eq!(CacheKey::named("pokemon", "pikachu").as_str(), "pokemon_pikachu");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for one page of a paginated resource.
    pub fn page(namespace: &str, page: usize) -> Self {
        Self(format!("{}_{}", namespace, page))
    }

    /// Key for a single named resource.
    pub fn named(namespace: &str, name: &str) -> Self {
        Self(format!("{}_{}", namespace, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}
