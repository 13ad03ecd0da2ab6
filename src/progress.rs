//! Cross-level progress: star ratings, the coin wallet, and skin unlocks.
//!
//! The simulation core never touches this directly; the host computes a
//! rating from the world's public counters when a level completes and
//! records it here. The store is an explicitly constructed service the
//! host owns and passes around, persisted as JSON.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Skin every profile starts with.
const DEFAULT_SKIN: &str = "green";

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("failed to read or write progress file: {0}")]
    Io(#[from] std::io::Error),
    #[error("progress file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Star rating for a finished level, from the coin percentage, or from
/// remaining lives when the level has no coins at all.
pub fn stars_for(coins_collected: u32, total_coins: u32, lives_remaining: u32) -> u8 {
    if total_coins > 0 {
        let percentage = coins_collected as f32 / total_coins as f32;
        if percentage >= 1.0 {
            3
        } else if percentage >= 0.5 {
            2
        } else {
            1
        }
    } else if lives_remaining >= 3 {
        3
    } else if lives_remaining >= 2 {
        2
    } else {
        1
    }
}

/// Persistent player progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressStore {
    /// Best star rating per builtin level id.
    stars: BTreeMap<u32, u8>,
    /// Coins banked across levels.
    wallet: u32,
    unlocked_skins: BTreeSet<String>,
    selected_skin: String,
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self {
            stars: BTreeMap::new(),
            wallet: 0,
            unlocked_skins: BTreeSet::from([DEFAULT_SKIN.to_string()]),
            selected_skin: DEFAULT_SKIN.to_string(),
        }
    }
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from disk; a missing file yields a fresh store.
    pub fn load(path: &Path) -> Result<Self, ProgressError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ProgressError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Record a level result, keeping the best rating seen so far.
    pub fn record_stars(&mut self, level_id: u32, stars: u8) {
        let entry = self.stars.entry(level_id).or_insert(0);
        *entry = (*entry).max(stars.min(3));
    }

    pub fn stars(&self, level_id: u32) -> u8 {
        self.stars.get(&level_id).copied().unwrap_or(0)
    }

    pub fn wallet(&self) -> u32 {
        self.wallet
    }

    pub fn add_coins(&mut self, amount: u32) {
        self.wallet += amount;
    }

    /// Spend from the wallet. Returns false (and changes nothing) when the
    /// balance is short.
    pub fn spend_coins(&mut self, amount: u32) -> bool {
        if self.wallet >= amount {
            self.wallet -= amount;
            true
        } else {
            false
        }
    }

    pub fn is_skin_unlocked(&self, skin: &str) -> bool {
        self.unlocked_skins.contains(skin)
    }

    pub fn unlock_skin(&mut self, skin: &str) {
        self.unlocked_skins.insert(skin.to_string());
    }

    /// Select an unlocked skin. Selecting a locked skin is refused.
    pub fn select_skin(&mut self, skin: &str) -> bool {
        if self.is_skin_unlocked(skin) {
            self.selected_skin = skin.to_string();
            true
        } else {
            false
        }
    }

    pub fn selected_skin(&self) -> &str {
        &self.selected_skin
    }
}
