//! Session configuration from environment variables.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use triple_core::clamp_level;

use crate::DEFAULT_ACTION_CAPACITY;

/// Seed and starting point for a new session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub start_level: u32,
    /// Capacity of the action channel used by [`crate::Session::spawn`]
    pub max_pending_actions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            start_level: 1,
            max_pending_actions: DEFAULT_ACTION_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `TRIPLE_SEED`: RNG seed (default: derived from the clock)
    /// - `TRIPLE_START_LEVEL`: first level, clamped to 1..=50 (default 1)
    /// - `TRIPLE_MAX_PENDING`: action channel capacity, minimum 1 (default 16)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with a custom variable source.
    /// Unparseable or out-of-range values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_or(lookup, clock_seed)
    }

    fn from_lookup_or<F, S>(lookup: F, fallback_seed: S) -> Self
    where
        F: Fn(&str) -> Option<String>,
        S: FnOnce() -> u32,
    {
        let seed = parse::<u32, _>(&lookup, "TRIPLE_SEED").unwrap_or_else(fallback_seed);
        let start_level = parse::<u64, _>(&lookup, "TRIPLE_START_LEVEL")
            .map(|v| clamp_level(v.min(u32::MAX as u64) as u32))
            .unwrap_or(1);
        let max_pending_actions = parse::<usize, _>(&lookup, "TRIPLE_MAX_PENDING")
            .map(|v| v.max(1))
            .unwrap_or(DEFAULT_ACTION_CAPACITY);

        Self {
            seed,
            start_level,
            max_pending_actions,
        }
    }
}

fn parse<T: FromStr, F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<T> {
    lookup(key)?.trim().parse().ok()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
