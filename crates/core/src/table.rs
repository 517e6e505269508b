//! The open-addressing hash table engine.
//!
//! A fixed-capacity slot array plus the active hash method and probe
//! strategy. Every operation runs to completion synchronously and returns a
//! fully materialized [`Trace`] describing each slot it touched, in order.
//! Replay pacing is the consumer's concern (see [`crate::replay`]).
//!
//! # Tombstones
//!
//! Deleting a key leaves a tombstone ([`Slot::Deleted`]) rather than an
//! empty slot. Search and insert probe past tombstones instead of stopping,
//! which keeps probe chains intact for keys that were displaced past the
//! deleted slot during insertion. Insert reuses the first tombstone it saw
//! as the write target once it has confirmed the value is not already
//! present further along the chain.
//!
//! # Termination
//!
//! Every operation examines at most `size` slots. Probe sequences that cycle
//! before covering the table (possible with quadratic probing on composite
//! sizes) can therefore conclude "table full" while empty slots remain; the
//! bound is what guarantees termination.
//!
//! # Thread Safety
//!
//! Not thread-safe. One table is exclusively owned by one caller; wrap the
//! whole instance in a mutex if it must ever be shared.

use crate::error::Result;
use crate::hashing::{self, HashMethod};
use crate::metrics::ProbeMetrics;
use crate::probing::ProbeStrategy;
use crate::step::{SlotState, Step, StepKind, Trace};
use log::{debug, trace};
use serde::Serialize;

/// One slot of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Never occupied; terminates probe sequences
    Empty,
    /// Previously occupied, now deleted; probe sequences continue past it
    Deleted,
    /// Holds a live value
    Occupied(String),
}

impl Slot {
    fn state(&self) -> SlotState {
        match self {
            Slot::Empty => SlotState::Empty,
            Slot::Deleted => SlotState::Deleted,
            Slot::Occupied(_) => SlotState::Occupied,
        }
    }
}

/// Read-only snapshot of one slot, for rendering.
///
/// Tombstones read as empty: the distinction matters to the probe algorithm,
/// not to a consumer drawing the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// Slot index
    pub index: usize,
    /// The stored value, if the slot is live
    pub value: Option<String>,
    /// True unless the slot holds a live value
    pub is_empty: bool,
}

/// Result of a search operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the key was found
    pub found: bool,
    /// Where it was found, if anywhere
    pub position: Option<usize>,
    /// The probe steps taken
    pub trace: Trace,
}

/// Open-addressing hash table with replayable probe traces.
///
/// Explicitly constructed and explicitly owned; there is no ambient or
/// global instance.
#[derive(Debug, Clone)]
pub struct HashTable {
    slots: Vec<Slot>,
    hash_method: HashMethod,
    probe_strategy: ProbeStrategy,
    metrics: ProbeMetrics,
}

impl HashTable {
    /// Create a table with `size` empty slots.
    ///
    /// Defaults to the division method with linear probing, matching the
    /// classic classroom setup.
    ///
    /// # Errors
    /// `ConfigError::ZeroSize` for 0, `ConfigError::SizeTooLarge` above
    /// [`hashing::MAX_TABLE_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        hashing::validate_size(size)?;
        Ok(Self {
            slots: vec![Slot::Empty; size],
            hash_method: HashMethod::Division,
            probe_strategy: ProbeStrategy::Linear,
            metrics: ProbeMetrics::new(),
        })
    }

    /// Number of slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of live values.
    pub fn occupied(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Occupied(_)))
            .count()
    }

    /// Occupancy as a percentage in `[0, 100]`. Tombstones do not count.
    pub fn load_factor(&self) -> f64 {
        self.occupied() as f64 / self.size() as f64 * 100.0
    }

    /// The active hash method.
    pub fn hash_method(&self) -> HashMethod {
        self.hash_method
    }

    /// The active probe strategy.
    pub fn probe_strategy(&self) -> ProbeStrategy {
        self.probe_strategy
    }

    /// Select the hash method used by subsequent operations.
    pub fn set_hash_method(&mut self, method: HashMethod) {
        self.hash_method = method;
    }

    /// Select the probe strategy used by subsequent operations.
    pub fn set_probe_strategy(&mut self, strategy: ProbeStrategy) {
        self.probe_strategy = strategy;
    }

    /// Cumulative metrics for this instance.
    pub fn metrics(&self) -> &ProbeMetrics {
        &self.metrics
    }

    /// Ordered snapshot of every slot.
    pub fn table_state(&self) -> Vec<SlotView> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                Slot::Occupied(value) => SlotView {
                    index,
                    value: Some(value.clone()),
                    is_empty: false,
                },
                _ => SlotView {
                    index,
                    value: None,
                    is_empty: true,
                },
            })
            .collect()
    }

    /// Reset every slot to empty, keeping the current size.
    pub fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
    }

    /// Replace the slot array with `new_size` empty slots.
    ///
    /// All occupants and tombstones are discarded; nothing is rehashed.
    ///
    /// # Errors
    /// Same size bounds as [`HashTable::new`].
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        hashing::validate_size(new_size)?;
        self.slots = vec![Slot::Empty; new_size];
        Ok(())
    }

    /// Insert `key`, storing `value` (or the key's decimal string if `None`).
    ///
    /// Probes at most `size` slots. Terminal outcomes, all reported as the
    /// final trace step rather than as errors:
    /// - `InsertSuccess`: an empty slot (or a reusable tombstone) was found
    /// - `DuplicateKey`: the value is already present; table unchanged
    /// - `TableFull`: every attempt was exhausted; table unchanged
    ///
    /// # Errors
    /// `KeyError::TooLarge` before any step is emitted.
    pub fn insert(&mut self, key: u64, value: Option<String>) -> Result<Trace> {
        hashing::validate_key(key)?;
        let value = value.unwrap_or_else(|| key.to_string());
        let size = self.size();

        self.metrics.inserts += 1;
        debug!("insert key={} value={:?}", key, value);

        let mut steps = Trace::new();
        let home = self.push_hash_calculation(&mut steps, key);

        // First tombstone seen along the probe chain; becomes the write
        // target once no duplicate is found further along.
        let mut reusable: Option<usize> = None;

        for attempt in 0..size {
            let position = self.probe_strategy.position(home, attempt, key, size);
            if attempt > 0 {
                self.push_collision(&mut steps, key, position, attempt, true);
            }
            self.push_check(&mut steps, key, position, attempt, false);
            trace!("insert key={} attempt={} position={}", key, attempt, position);

            match &self.slots[position] {
                Slot::Empty => {
                    let target = reusable.unwrap_or(position);
                    return Ok(self.commit_insert(steps, key, value, target, attempt, reusable.is_some()));
                }
                Slot::Deleted => {
                    if reusable.is_none() {
                        reusable = Some(position);
                    }
                }
                Slot::Occupied(existing) if *existing == value => {
                    self.metrics.duplicates += 1;
                    self.absorb_probe_counts(&steps);
                    debug!("insert key={}: duplicate at position {}", key, position);
                    steps.push(Step {
                        kind: StepKind::DuplicateKey,
                        key,
                        position: Some(position),
                        attempt,
                        description: format!("Key {} already exists at position {}", key, position),
                    });
                    return Ok(steps);
                }
                Slot::Occupied(_) => {}
            }
        }

        // Attempts exhausted. A tombstone seen along the way is still a
        // valid write target; only a chain with none is a full table.
        if let Some(target) = reusable {
            return Ok(self.commit_insert(steps, key, value, target, size - 1, true));
        }

        self.metrics.table_full_events += 1;
        self.absorb_probe_counts(&steps);
        debug!("insert key={}: table full", key);
        steps.push(Step {
            kind: StepKind::TableFull,
            key,
            position: None,
            attempt: size,
            description: format!("Cannot insert {}: hash table is full", key),
        });
        Ok(steps)
    }

    /// Probe for `key` without modifying anything.
    ///
    /// The slot array is never touched; `&mut self` is only for metrics
    /// accounting. Probing follows the same order as insert, terminating on
    /// the first empty slot (the key is provably absent past it) or on a
    /// slot whose value equals the key's decimal string.
    ///
    /// # Errors
    /// `KeyError::TooLarge` before any step is emitted.
    pub fn search(&mut self, key: u64) -> Result<SearchOutcome> {
        hashing::validate_key(key)?;
        self.metrics.searches += 1;

        let outcome = self.probe_search(key);
        self.absorb_probe_counts(&outcome.trace);
        if outcome.found {
            self.metrics.search_hits += 1;
        } else {
            self.metrics.search_misses += 1;
        }
        debug!("search key={}: found={:?}", key, outcome.position);
        Ok(outcome)
    }

    /// Delete `key` if present, leaving a tombstone in its slot.
    ///
    /// Delegates to the search probe; when found, the slot becomes
    /// [`Slot::Deleted`] and a `DeleteSuccess` step is appended. When not
    /// found, the returned trace is the search trace unchanged.
    ///
    /// # Errors
    /// `KeyError::TooLarge` before any step is emitted.
    pub fn delete(&mut self, key: u64) -> Result<Trace> {
        hashing::validate_key(key)?;
        self.metrics.deletes += 1;

        let outcome = self.probe_search(key);
        self.absorb_probe_counts(&outcome.trace);
        let mut steps = outcome.trace;

        if let Some(position) = outcome.position {
            self.slots[position] = Slot::Deleted;
            self.metrics.deletes_succeeded += 1;
            debug!("delete key={}: tombstoned position {}", key, position);
            steps.push(Step {
                kind: StepKind::DeleteSuccess,
                key,
                position: Some(position),
                attempt: 0,
                description: format!(
                    "Deleted key {} from position {}, leaving a tombstone",
                    key, position
                ),
            });
        } else {
            debug!("delete key={}: not found", key);
        }

        Ok(steps)
    }

    /// The shared probe loop behind `search` and `delete`. Pure: reads only.
    fn probe_search(&self, key: u64) -> SearchOutcome {
        let size = self.size();
        let needle = key.to_string();

        let mut steps = Trace::new();
        let home = self.push_hash_calculation(&mut steps, key);

        for attempt in 0..size {
            let position = self.probe_strategy.position(home, attempt, key, size);
            if attempt > 0 {
                self.push_collision(&mut steps, key, position, attempt, false);
            }
            self.push_check(&mut steps, key, position, attempt, true);
            trace!("search key={} attempt={} position={}", key, attempt, position);

            match &self.slots[position] {
                Slot::Empty => {
                    steps.push(Step {
                        kind: StepKind::SearchNotFound,
                        key,
                        position: Some(position),
                        attempt,
                        description: format!(
                            "Key {} not found: reached empty slot at position {}",
                            key, position
                        ),
                    });
                    return SearchOutcome {
                        found: false,
                        position: None,
                        trace: steps,
                    };
                }
                Slot::Occupied(value) if *value == needle => {
                    steps.push(Step {
                        kind: StepKind::SearchFound,
                        key,
                        position: Some(position),
                        attempt,
                        description: format!(
                            "Key {} found at position {} after {} probes",
                            key, position, attempt
                        ),
                    });
                    return SearchOutcome {
                        found: true,
                        position: Some(position),
                        trace: steps,
                    };
                }
                // Tombstones and mismatched values both continue the chain
                _ => {}
            }
        }

        steps.push(Step {
            kind: StepKind::SearchNotFound,
            key,
            position: None,
            attempt: size,
            description: format!("Key {} not found: searched entire table", key),
        });
        SearchOutcome {
            found: false,
            position: None,
            trace: steps,
        }
    }

    /// Emit the `HashCalculation` step and return the home slot.
    fn push_hash_calculation(&self, steps: &mut Trace, key: u64) -> usize {
        let home = self.hash_method.hash(key, self.size());
        steps.push(Step {
            kind: StepKind::HashCalculation {
                hash: home,
                method: self.hash_method,
            },
            key,
            position: Some(home),
            attempt: 0,
            description: format!(
                "Computing hash for key {} using {}: {}",
                key,
                self.hash_method,
                self.hash_method.calculation(key, self.size())
            ),
        });
        home
    }

    /// Emit a `CollisionResolution` step for a probe past the home slot.
    fn push_collision(
        &self,
        steps: &mut Trace,
        key: u64,
        position: usize,
        attempt: usize,
        inserting: bool,
    ) {
        let description = if inserting {
            format!(
                "Collision detected! Using {}: attempt {}, new position = {}",
                self.probe_strategy, attempt, position
            )
        } else {
            format!(
                "Key not at expected position. Using {}: attempt {}, checking position = {}",
                self.probe_strategy, attempt, position
            )
        };
        steps.push(Step {
            kind: StepKind::CollisionResolution {
                strategy: self.probe_strategy,
            },
            key,
            position: Some(position),
            attempt,
            description,
        });
    }

    /// Emit a `CheckPosition` step recording what the slot held.
    fn push_check(
        &self,
        steps: &mut Trace,
        key: u64,
        position: usize,
        attempt: usize,
        searching: bool,
    ) {
        let slot = &self.slots[position];
        let needle = key.to_string();
        let found = searching && matches!(slot, Slot::Occupied(v) if *v == needle);
        let description = match slot {
            Slot::Empty => format!("Checking position {}: empty", position),
            Slot::Deleted => format!(
                "Checking position {}: deleted (tombstone), probing continues",
                position
            ),
            Slot::Occupied(_) if found => format!("Checking position {}: found!", position),
            Slot::Occupied(value) if searching => {
                format!("Checking position {}: contains {}", position, value)
            }
            Slot::Occupied(value) => {
                format!("Checking position {}: occupied by {}", position, value)
            }
        };
        steps.push(Step {
            kind: StepKind::CheckPosition {
                state: slot.state(),
            },
            key,
            position: Some(position),
            attempt,
            description,
        });
    }

    /// Write `value` into `target` and emit the terminal `InsertSuccess`.
    fn commit_insert(
        &mut self,
        mut steps: Trace,
        key: u64,
        value: String,
        target: usize,
        attempt: usize,
        reused_tombstone: bool,
    ) -> Trace {
        self.slots[target] = Slot::Occupied(value.clone());
        self.metrics.inserts_succeeded += 1;
        self.absorb_probe_counts(&steps);
        if reused_tombstone {
            self.metrics.tombstones_reused += 1;
        }
        debug!(
            "insert key={}: wrote position {} (attempt {})",
            key, target, attempt
        );

        let description = if reused_tombstone {
            format!(
                "Successfully inserted {} at position {}, reusing deleted slot, after {} probes",
                key, target, attempt
            )
        } else {
            format!(
                "Successfully inserted {} at position {} after {} probes",
                key, target, attempt
            )
        };
        steps.push(Step {
            kind: StepKind::InsertSuccess { value },
            key,
            position: Some(target),
            attempt,
            description,
        });
        steps
    }

    /// Fold a finished probe sequence into the cumulative counters.
    fn absorb_probe_counts(&mut self, steps: &Trace) {
        self.metrics.probes +=
            steps.count_kind(|k| matches!(k, StepKind::CheckPosition { .. })) as u64;
        self.metrics.collisions +=
            steps.count_kind(|k| matches!(k, StepKind::CollisionResolution { .. })) as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error, KeyError};
    use crate::hashing::MAX_KEY;

    fn table(size: usize) -> HashTable {
        HashTable::new(size).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert!(matches!(
            HashTable::new(0),
            Err(Error::Config(ConfigError::ZeroSize))
        ));
        assert!(HashTable::new(1).is_ok());
    }

    #[test]
    fn test_insert_into_empty_slot() {
        let mut t = table(11);
        let trace = t.insert(25, None).unwrap();

        let last = trace.last().unwrap();
        assert!(matches!(last.kind, StepKind::InsertSuccess { .. }));
        assert_eq!(last.position, Some(3)); // 25 % 11
        assert_eq!(last.attempt, 0);
        assert_eq!(t.occupied(), 1);
    }

    #[test]
    fn test_insert_rejects_oversized_key() {
        let mut t = table(11);
        let err = t.insert(MAX_KEY + 1, None).unwrap_err();
        assert!(matches!(
            err,
            Error::Key(KeyError::TooLarge { .. })
        ));
        // no mutation, no steps
        assert_eq!(t.occupied(), 0);
    }

    #[test]
    fn test_linear_probing_collision_chain() {
        // 3, 14, 25 all hash to 3 mod 11; expect positions 3, 4, 5 with
        // one collision step for the second insert and two for the third.
        let mut t = table(11);

        let t1 = t.insert(3, None).unwrap();
        assert_eq!(t1.last().unwrap().position, Some(3));
        assert_eq!(
            t1.count_kind(|k| matches!(k, StepKind::CollisionResolution { .. })),
            0
        );

        let t2 = t.insert(14, None).unwrap();
        assert_eq!(t2.last().unwrap().position, Some(4));
        assert_eq!(
            t2.count_kind(|k| matches!(k, StepKind::CollisionResolution { .. })),
            1
        );

        let t3 = t.insert(25, None).unwrap();
        assert_eq!(t3.last().unwrap().position, Some(5));
        assert_eq!(
            t3.count_kind(|k| matches!(k, StepKind::CollisionResolution { .. })),
            2
        );

        assert_eq!(t.metrics().collisions, 3);
    }

    #[test]
    fn test_probe_bound() {
        // A full table: insert examines at most `size` slots, then reports
        // table full without mutating anything.
        let mut t = table(5);
        for key in [0u64, 1, 2, 3, 4] {
            t.insert(key, None).unwrap();
        }

        let trace = t.insert(10, None).unwrap();
        assert!(matches!(trace.last().unwrap().kind, StepKind::TableFull));
        let checks = trace.count_kind(|k| matches!(k, StepKind::CheckPosition { .. }));
        assert_eq!(checks, 5);
        assert_eq!(t.occupied(), 5);
        assert_eq!(t.metrics().table_full_events, 1);
    }

    #[test]
    fn test_duplicate_insert_is_idempotent() {
        let mut t = table(11);
        t.insert(25, None).unwrap();
        let before = t.table_state();

        let trace = t.insert(25, None).unwrap();
        assert!(matches!(trace.last().unwrap().kind, StepKind::DuplicateKey));
        assert_eq!(t.table_state(), before);
        assert_eq!(t.metrics().duplicates, 1);
    }

    #[test]
    fn test_insert_search_coherence() {
        let mut t = table(11);
        for key in [3u64, 14, 25, 36] {
            let trace = t.insert(key, None).unwrap();
            let inserted_at = trace.last().unwrap().position;

            let outcome = t.search(key).unwrap();
            assert!(outcome.found);
            assert_eq!(outcome.position, inserted_at);
        }
    }

    #[test]
    fn test_search_stops_at_empty_slot() {
        let mut t = table(11);
        t.insert(3, None).unwrap();

        let outcome = t.search(14).unwrap();
        assert!(!outcome.found);
        let last = outcome.trace.last().unwrap();
        assert!(matches!(last.kind, StepKind::SearchNotFound));
        // home slot 3 is occupied by "3", slot 4 is empty: two checks
        assert_eq!(
            outcome
                .trace
                .count_kind(|k| matches!(k, StepKind::CheckPosition { .. })),
            2
        );
    }

    #[test]
    fn test_search_does_not_mutate_slots() {
        let mut t = table(11);
        t.insert(25, None).unwrap();
        let before = t.table_state();
        t.search(25).unwrap();
        t.search(99).unwrap();
        assert_eq!(t.table_state(), before);
    }

    #[test]
    fn test_custom_value_search_matches_key_string_only() {
        // Search compares slot values against the key's decimal string, so a
        // custom value is not findable by its key. Same contract as the
        // original visualizer.
        let mut t = table(11);
        t.insert(25, Some("alice".to_string())).unwrap();

        let outcome = t.search(25).unwrap();
        assert!(!outcome.found);
    }

    #[test]
    fn test_delete_leaves_tombstone() {
        let mut t = table(11);
        t.insert(25, None).unwrap();

        let trace = t.delete(25).unwrap();
        assert!(matches!(
            trace.last().unwrap().kind,
            StepKind::DeleteSuccess
        ));
        assert_eq!(t.occupied(), 0);

        // the slot reads as empty to consumers
        assert!(t.table_state()[3].is_empty);
        // but a subsequent probe reports the tombstone state
        let outcome = t.search(25).unwrap();
        let first_check = outcome
            .trace
            .iter()
            .find(|s| matches!(s.kind, StepKind::CheckPosition { .. }))
            .unwrap();
        assert!(matches!(
            first_check.kind,
            StepKind::CheckPosition {
                state: SlotState::Deleted
            }
        ));
    }

    #[test]
    fn test_delete_missing_key_emits_no_delete_step() {
        let mut t = table(11);
        let trace = t.delete(25).unwrap();
        assert!(matches!(
            trace.last().unwrap().kind,
            StepKind::SearchNotFound
        ));
        assert_eq!(t.metrics().deletes_succeeded, 0);
    }

    #[test]
    fn test_search_probes_past_tombstone() {
        // 3 and 14 share home slot 3; 14 was displaced to 4. Deleting 3 must
        // not break the chain to 14: the tombstone keeps probing alive.
        let mut t = table(11);
        t.insert(3, None).unwrap();
        t.insert(14, None).unwrap();

        t.delete(3).unwrap();

        let outcome = t.search(14).unwrap();
        assert!(outcome.found);
        assert_eq!(outcome.position, Some(4));
    }

    #[test]
    fn test_insert_reuses_tombstone() {
        let mut t = table(11);
        t.insert(3, None).unwrap();
        t.insert(14, None).unwrap(); // displaced to 4
        t.delete(3).unwrap(); // tombstone at 3

        // 25 hashes to 3: the tombstone is remembered, probing continues to
        // the empty slot at 5, and the write lands back in slot 3.
        let trace = t.insert(25, None).unwrap();
        let last = trace.last().unwrap();
        assert!(matches!(last.kind, StepKind::InsertSuccess { .. }));
        assert_eq!(last.position, Some(3));
        assert_eq!(t.metrics().tombstones_reused, 1);

        let outcome = t.search(25).unwrap();
        assert_eq!(outcome.position, Some(3));
    }

    #[test]
    fn test_insert_does_not_reuse_tombstone_when_duplicate_exists() {
        let mut t = table(11);
        t.insert(3, None).unwrap();
        t.insert(14, None).unwrap();
        t.delete(3).unwrap();

        // 14 still lives at position 4 past the tombstone; re-inserting it
        // must report the duplicate, not fill the tombstone.
        let trace = t.insert(14, None).unwrap();
        assert!(matches!(trace.last().unwrap().kind, StepKind::DuplicateKey));
        assert_eq!(t.occupied(), 1);
    }

    #[test]
    fn test_load_factor() {
        let mut t = table(10);
        assert_eq!(t.load_factor(), 0.0);

        for key in [1u64, 2, 3] {
            t.insert(key, None).unwrap();
        }
        assert_eq!(t.load_factor(), 30.0);
    }

    #[test]
    fn test_table_state_snapshot() {
        let mut t = table(5);
        t.insert(7, None).unwrap(); // 7 % 5 = 2

        let state = t.table_state();
        assert_eq!(state.len(), 5);
        assert_eq!(state[2].value.as_deref(), Some("7"));
        assert!(!state[2].is_empty);
        assert!(state[0].is_empty);
    }

    #[test]
    fn test_resize_discards_everything() {
        let mut t = table(11);
        t.insert(25, None).unwrap();
        t.delete(25).unwrap();

        t.resize(13).unwrap();
        assert_eq!(t.size(), 13);
        assert_eq!(t.occupied(), 0);
        assert!(t.table_state().iter().all(|s| s.is_empty));

        assert!(matches!(
            t.resize(0),
            Err(Error::Config(ConfigError::ZeroSize))
        ));
        // failed resize leaves the table intact
        assert_eq!(t.size(), 13);
    }

    #[test]
    fn test_clear_keeps_size() {
        let mut t = table(7);
        t.insert(1, None).unwrap();
        t.clear();
        assert_eq!(t.size(), 7);
        assert_eq!(t.occupied(), 0);
    }

    #[test]
    fn test_config_takes_effect_next_operation() {
        let mut t = table(11);
        t.insert(25, None).unwrap(); // division: slot 3

        t.set_hash_method(HashMethod::MidSquare);
        t.set_probe_strategy(ProbeStrategy::Quadratic);
        let trace = t.insert(26, None).unwrap();
        match &trace[0].kind {
            StepKind::HashCalculation { method, .. } => {
                assert_eq!(*method, HashMethod::MidSquare)
            }
            other => panic!("expected hash calculation, got {:?}", other),
        }
    }

    #[test]
    fn test_double_hashing_redesigned_h2_on_size_7() {
        // The classic fixed h2 = 7 - (key % 7) cycles on a size-7 table:
        // key 14 would step by 7 and revisit slot 0 forever. The
        // size-derived h2 steps by 1 and lands in slot 1.
        let mut t = table(7);
        t.set_probe_strategy(ProbeStrategy::Double);

        t.insert(7, None).unwrap(); // home 0
        let trace = t.insert(14, None).unwrap(); // home 0, collides

        let last = trace.last().unwrap();
        assert!(matches!(last.kind, StepKind::InsertSuccess { .. }));
        assert_eq!(last.position, Some(1));
    }

    #[test]
    fn test_trace_determinism() {
        let run = || {
            let mut t = table(11);
            t.set_probe_strategy(ProbeStrategy::Quadratic);
            let mut traces = Vec::new();
            for key in [3u64, 14, 25, 99, 14] {
                traces.push(t.insert(key, None).unwrap());
            }
            traces.push(t.delete(14).unwrap());
            traces.push(t.search(25).unwrap().trace);
            (traces, t.table_state())
        };

        let (traces_a, state_a) = run();
        let (traces_b, state_b) = run();
        assert_eq!(traces_a, traces_b);
        assert_eq!(state_a, state_b);
    }

    #[test]
    fn test_hash_calculation_description() {
        let mut t = table(11);
        let trace = t.insert(25, None).unwrap();
        assert_eq!(
            trace[0].description,
            "Computing hash for key 25 using Division Method: 25 % 11 = 3"
        );
    }
}
