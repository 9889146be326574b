/// Entry registry: one row per player, built from the validated entry log.
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::types::{EntryRecord, Registration};

/// Read-only table of registered players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    players: HashMap<String, Registration>,
}

impl Registry {
    /// Build the registry in file order.
    ///
    /// A repeated `player_id` keeps its earliest `registered_at` and takes the
    /// handle name of the last row seen.
    pub fn build(entries: &[EntryRecord]) -> Self {
        let mut players: HashMap<String, Registration> = HashMap::with_capacity(entries.len());
        for entry in entries {
            players
                .entry(entry.player_id.clone())
                .and_modify(|reg| {
                    reg.registered_at = reg.registered_at.min(entry.registered_at);
                    reg.handle_name.clone_from(&entry.handle_name);
                })
                .or_insert_with(|| Registration {
                    registered_at: entry.registered_at,
                    handle_name: entry.handle_name.clone(),
                });
        }
        Registry { players }
    }

    pub fn get(&self, player_id: &str) -> Option<&Registration> {
        self.players.get(player_id)
    }

    pub fn registered_at(&self, player_id: &str) -> Option<NaiveDateTime> {
        self.players.get(player_id).map(|reg| reg.registered_at)
    }

    pub fn handle_name(&self, player_id: &str) -> Option<&str> {
        self.players.get(player_id).map(|reg| reg.handle_name.as_str())
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players.contains_key(player_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Registration)> {
        self.players.iter().map(|(id, reg)| (id.as_str(), reg))
    }
}
