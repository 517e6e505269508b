//! probe-sim-core: Educational open-addressing hash table engine
//!
//! This library provides the core of a teaching tool for hash table
//! mechanics: an open-addressing table that, for every insert, search, and
//! delete, produces an ordered trace of semantic steps a consumer can replay
//! at its own pace (e.g. as an animation).
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `hashing`: the three classroom hash functions (division, mid-square,
//!   folding) and the secondary hash for double hashing
//! - `probing`: the three collision-resolution strategies (linear,
//!   quadratic, double hashing)
//! - `step`: the step/trace model the engine emits
//! - `table`: the engine itself, with tombstone deletion
//! - `replay`: lazy, restartable playback cursor over a trace
//! - `metrics`: observable probe behavior across operations
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Deterministic**: A fixed configuration and operation sequence yields
//!   byte-identical traces and table states on every run
//! - **Bounded**: Every operation examines at most `size` slots, so probing
//!   terminates even on degenerate probe cycles
//! - **Engine, not UI**: Rendering and pacing live entirely in the consumer;
//!   the engine returns data and holds no reference to past traces

pub mod error;
pub mod hashing;
pub mod metrics;
pub mod probing;
pub mod replay;
pub mod step;
pub mod table;

// Re-export commonly used types
pub use error::{ConfigError, Error, KeyError, Result};
pub use hashing::HashMethod;
pub use metrics::ProbeMetrics;
pub use probing::ProbeStrategy;
pub use replay::Replay;
pub use step::{SlotState, Step, StepKind, Trace};
pub use table::{HashTable, SearchOutcome, SlotView};
