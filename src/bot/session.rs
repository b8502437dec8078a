//! Per-channel filter criteria.
//!
//! Commands never edit criteria in place. They read the channel's current
//! value, apply a pure transition and store the result in its place.

use crate::core::filter::FilterCriteria;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Maps a Discord channel id to that channel's current criteria.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<u64, FilterCriteria>>>,
}

impl SessionStore {
    /// Current criteria for the channel; unfiltered if the channel has none yet.
    pub async fn criteria(&self, channel_id: u64) -> FilterCriteria {
        self.sessions
            .read()
            .await
            .get(&channel_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Applies `transition` to the channel's criteria and stores the result.
    ///
    /// Returns the new criteria. A channel whose criteria end up empty is
    /// dropped from the store.
    pub async fn update<F>(&self, channel_id: u64, transition: F) -> FilterCriteria
    where
        F: FnOnce(FilterCriteria) -> FilterCriteria,
    {
        let mut sessions = self.sessions.write().await;
        let current = sessions.remove(&channel_id).unwrap_or_default();
        let next = transition(current);

        if next != FilterCriteria::default() {
            sessions.insert(channel_id, next.clone());
        }
        tracing::trace!(
            channel_id,
            active_channels = sessions.len(),
            criteria = ?next,
            "Updated channel criteria"
        );
        next
    }

    #[cfg(test)]
    async fn active_channels(&self) -> usize {
        self.sessions.read().await.len()
    }
}
