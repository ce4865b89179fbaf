//! In-process cache of rendered views, keyed by page path.
//!
//! Read endpoints store the JSON body they produced under the path of the page it backs.
//! Pages private to a guest keep one rendering per guest under the same path, so a
//! single `invalidate(path)` makes every rendering of that page stale. Mutations call
//! `invalidate` once their write has committed and before they redirect.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::server::error::AppError;

/// Renderings of one path, keyed by the viewing guest (`None` for public pages).
type Renderings = HashMap<Option<i32>, Value>;

#[derive(Default)]
struct Entries {
    views: HashMap<String, Renderings>,
    /// Bumped by every invalidation of the path, cached or not.
    generations: HashMap<String, u64>,
}

impl Entries {
    fn generation(&self, path: &str) -> u64 {
        self.generations.get(path).copied().unwrap_or_default()
    }
}

#[derive(Clone, Default)]
pub struct ViewCache {
    entries: Arc<RwLock<Entries>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached rendering of `path` for `viewer`, if it has not been invalidated.
    pub async fn get(&self, path: &str, viewer: Option<i32>) -> Option<Value> {
        let entries = self.entries.read().await;

        entries
            .views
            .get(path)
            .and_then(|renderings| renderings.get(&viewer))
            .cloned()
    }

    /// Stores a rendering unconditionally.
    #[cfg(test)]
    pub async fn insert(&self, path: &str, viewer: Option<i32>, value: Value) {
        let mut entries = self.entries.write().await;

        entries
            .views
            .entry(path.to_string())
            .or_default()
            .insert(viewer, value);
    }

    /// Returns the cached rendering or computes and stores a fresh one.
    ///
    /// The lock is not held while `compute` runs. If `path` is invalidated in the meantime
    /// the result is still returned to this caller but not cached, since it may have been
    /// read before the write that caused the invalidation. Errors from `compute` are
    /// returned and nothing is cached.
    ///
    /// # Arguments
    /// - `path` - Page path the view backs, e.g. `/account/profile`
    /// - `viewer` - Guest the view is private to, `None` for public pages
    /// - `compute` - Renders the view on a miss
    pub async fn get_or_insert_with<F, Fut>(
        &self,
        path: &str,
        viewer: Option<i32>,
        compute: F,
    ) -> Result<Value, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, AppError>>,
    {
        if let Some(value) = self.get(path, viewer).await {
            return Ok(value);
        }

        // Read before `compute` starts, so any later invalidation is seen below.
        let generation = self.entries.read().await.generation(path);

        let value = compute().await?;

        let mut entries = self.entries.write().await;
        if entries.generation(path) == generation {
            entries
                .views
                .entry(path.to_string())
                .or_default()
                .insert(viewer, value.clone());
        } else {
            tracing::debug!(path, "Skipped caching view rendered before invalidation");
        }

        Ok(value)
    }

    /// Marks every rendering of `path` stale, including any still being computed.
    ///
    /// # Returns
    /// - `true` - Something was cached for the path
    /// - `false` - Nothing was cached, the next read renders fresh anyway
    pub async fn invalidate(&self, path: &str) -> bool {
        let mut entries = self.entries.write().await;

        *entries.generations.entry(path.to_string()).or_default() += 1;
        let removed = entries.views.remove(path).is_some();

        tracing::debug!(path, removed, "Invalidated view");

        removed
    }
}
