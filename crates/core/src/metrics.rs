//! Probe metrics: observable engine behavior across operations.
//!
//! The engine accumulates simple counters as it runs: operations by kind,
//! probes, collisions, and terminal outcomes. They answer the questions a
//! student asks after a session: how many collisions did that strategy cause,
//! how many probes did the average insert take, how often did searches hit.
//!
//! # Design
//!
//! Counters are plain fields updated by the engine at each terminal step.
//! Derived rates are computed on demand.
//!
//! # Thread Safety
//!
//! The `ProbeMetrics` struct is NOT thread-safe. For multi-threaded use, wrap
//! the owning table in a mutex.

/// Cumulative counters for one engine instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeMetrics {
    // === Operations ===
    /// Insert operations run (any outcome)
    pub inserts: u64,

    /// Search operations run (any outcome)
    pub searches: u64,

    /// Delete operations run (any outcome)
    pub deletes: u64,

    // === Probing ===
    /// Slots examined across all operations
    pub probes: u64,

    /// Collision-resolution hops (probe attempts past the home slot)
    pub collisions: u64,

    /// Tombstoned slots reused as insert targets
    pub tombstones_reused: u64,

    // === Terminal outcomes ===
    /// Inserts that wrote a value
    pub inserts_succeeded: u64,

    /// Inserts rejected as duplicates
    pub duplicates: u64,

    /// Inserts that exhausted every attempt
    pub table_full_events: u64,

    /// Searches that found their key
    pub search_hits: u64,

    /// Searches that concluded the key is absent
    pub search_misses: u64,

    /// Deletes that tombstoned a slot
    pub deletes_succeeded: u64,
}

impl ProbeMetrics {
    /// Create zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every counter to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total operations run.
    pub fn operations(&self) -> u64 {
        self.inserts + self.searches + self.deletes
    }

    /// Collisions per operation. 0.0 when nothing has run.
    pub fn collision_rate(&self) -> f64 {
        let ops = self.operations();
        if ops == 0 {
            0.0
        } else {
            self.collisions as f64 / ops as f64
        }
    }

    /// Mean slots examined per operation. 0.0 when nothing has run.
    pub fn average_probes(&self) -> f64 {
        let ops = self.operations();
        if ops == 0 {
            0.0
        } else {
            self.probes as f64 / ops as f64
        }
    }

    /// Fraction of searches that found their key. 0.0 when none ran.
    pub fn hit_rate(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.search_hits as f64 / self.searches as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Probe Metrics ===");
        println!("Operations: {}", self.operations());
        println!("  Inserts:  {} ({} ok, {} duplicate, {} table-full)",
            self.inserts, self.inserts_succeeded, self.duplicates, self.table_full_events);
        println!("  Searches: {} ({} hit, {} miss)",
            self.searches, self.search_hits, self.search_misses);
        println!("  Deletes:  {} ({} ok)", self.deletes, self.deletes_succeeded);
        println!();
        println!("Slots examined: {}", self.probes);
        println!("Collisions: {} ({:.2} per operation)", self.collisions, self.collision_rate());
        println!("Tombstones reused: {}", self.tombstones_reused);
        println!("Avg probes per operation: {:.2}", self.average_probes());
        println!("Search hit rate: {:.1}%", self.hit_rate() * 100.0);
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "inserts={}\n\
             searches={}\n\
             deletes={}\n\
             probes={}\n\
             collisions={}\n\
             collision_rate={:.4}\n\
             tombstones_reused={}\n\
             inserts_succeeded={}\n\
             duplicates={}\n\
             table_full_events={}\n\
             search_hits={}\n\
             search_misses={}\n\
             hit_rate={:.4}\n",
            self.inserts,
            self.searches,
            self.deletes,
            self.probes,
            self.collisions,
            self.collision_rate(),
            self.tombstones_reused,
            self.inserts_succeeded,
            self.duplicates,
            self.table_full_events,
            self.search_hits,
            self.search_misses,
            self.hit_rate(),
        )
    }
}
