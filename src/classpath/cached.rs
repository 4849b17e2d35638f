use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{Classpath, TypeMembers};

/// Memoizing wrapper around another [`Classpath`].
///
/// Each distinct name is forwarded to the inner classpath at most once.
/// Thread-safe via internal locking, so one cache may serve several units.
#[derive(Debug, Default)]
pub struct CachedClasspath<C> {
    inner: C,
    exists: RwLock<FxHashMap<SmolStr, bool>>,
    members: RwLock<FxHashMap<SmolStr, Option<TypeMembers>>>,
}

impl<C: Classpath> CachedClasspath<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            exists: RwLock::new(FxHashMap::default()),
            members: RwLock::new(FxHashMap::default()),
        }
    }

    /// The wrapped classpath.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Number of cached answers of both kinds.
    pub fn cached_len(&self) -> usize {
        self.exists.read().len() + self.members.read().len()
    }
}

impl<C: Classpath> Classpath for CachedClasspath<C> {
    fn exists_in_package(&self, qualified_name: &str) -> bool {
        // Fast path: already answered (read lock)
        if let Some(&known) = self.exists.read().get(qualified_name) {
            return known;
        }

        // Slow path: ask once, then remember (write lock)
        let mut exists = self.exists.write();
        if let Some(&known) = exists.get(qualified_name) {
            return known;
        }
        let answer = self.inner.exists_in_package(qualified_name);
        exists.insert(SmolStr::new(qualified_name), answer);
        answer
    }

    fn type_members(&self, qualified_name: &str) -> Option<TypeMembers> {
        if let Some(known) = self.members.read().get(qualified_name) {
            return known.clone();
        }

        let mut members = self.members.write();
        if let Some(known) = members.get(qualified_name) {
            return known.clone();
        }
        let answer = self.inner.type_members(qualified_name);
        members.insert(SmolStr::new(qualified_name), answer.clone());
        answer
    }
}
