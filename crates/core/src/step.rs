//! Step and trace model: the engine's observable output.
//!
//! Every operation produces an ordered list of [`Step`] records, one per
//! atomic unit of algorithmic progress, in exactly the order the algorithm
//! touches memory. Steps are write-once: the engine appends them to a
//! [`Trace`] and never mutates them afterwards. The trace is returned to the
//! caller, who owns it outright; the engine keeps no reference to past
//! traces.
//!
//! # Serialization
//!
//! Steps serialize with a snake_case `"type"` tag (`hash_calculation`,
//! `check_position`, ...) so downstream consumers see stable wire names.

use crate::hashing::HashMethod;
use crate::probing::ProbeStrategy;
use serde::Serialize;

/// What a `CheckPosition` step found in the examined slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// Never occupied; terminates a probe sequence
    Empty,
    /// Tombstone left by a delete; probing continues past it
    Deleted,
    /// Holds a live value
    Occupied,
}

/// The kind of progress a step records, with kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    /// Home slot computed from the key
    HashCalculation { hash: usize, method: HashMethod },

    /// A collision forced probing to a new candidate slot
    CollisionResolution { strategy: ProbeStrategy },

    /// A candidate slot was examined
    CheckPosition { state: SlotState },

    /// Value written; terminal
    InsertSuccess { value: String },

    /// The value is already present; terminal, table unchanged
    DuplicateKey,

    /// All attempts exhausted without a usable slot; terminal, table unchanged
    TableFull,

    /// Key located; terminal
    SearchFound,

    /// Key provably absent; terminal
    SearchNotFound,

    /// Slot tombstoned; terminal
    DeleteSuccess,
}

impl StepKind {
    /// Whether this kind ends its operation's trace.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StepKind::InsertSuccess { .. }
                | StepKind::DuplicateKey
                | StepKind::TableFull
                | StepKind::SearchFound
                | StepKind::SearchNotFound
                | StepKind::DeleteSuccess
        )
    }
}

/// One atomic unit of algorithmic progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// What happened, with kind-specific payload
    #[serde(flatten)]
    pub kind: StepKind,

    /// The key the operation concerns
    pub key: u64,

    /// Slot under examination, if the step concerns one
    pub position: Option<usize>,

    /// Probe attempt number (0 = home slot)
    pub attempt: usize,

    /// Human-readable narration for display
    pub description: String,
}

/// Ordered, immutable list of steps from one engine operation.
///
/// Appending is crate-private; callers only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Create an empty trace.
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step. Crate-private: only the engine writes traces.
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the operation emitted no steps (never the case for a
    /// completed operation, which always ends in a terminal step).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The steps as a slice.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The terminal step, if the trace is non-empty.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Count the steps matching a predicate on their kind.
    pub fn count_kind(&self, pred: impl Fn(&StepKind) -> bool) -> usize {
        self.steps.iter().filter(|s| pred(&s.kind)).count()
    }

    /// Restartable playback cursor over this trace.
    pub fn replay(&self) -> crate::replay::Replay<'_> {
        crate::replay::Replay::new(self)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for Trace {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl std::ops::Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}
