//! Generic step buffer shared by every engine.
//!
//! An engine run produces a [`Trace`]: an ordered, finite list of [`Step`]s. Each step pairs a
//! family-specific *kind* (a tagged enum such as [`crate::sorting::SortStep`]) with a
//! human-readable description. Kinds always carry full snapshots of the state a consumer needs
//! to draw the step (the whole array, the whole visited set, the whole distance map), never
//! deltas, so any single step can be rendered without replaying the ones before it.
//!
//! # Wire Format
//!
//! Steps serialize flat, with the kind's tag under `"type"`:
//!
//! ```json
//! {"type": "compare", "indices": [0, 1], "array": [3, 1, 2], "description": "Comparing 3 and 1"}
//! ```
//!
//! # Lifecycle
//!
//! Only the crate appends to a trace. Once an engine returns it, a trace is read-only:
//! indexing the same position always yields the same step.

use std::ops::Index;

use serde::Serialize;

/// Behaviour shared by the step kinds of every algorithm family.
///
/// The tag returned by [`StepKind::tag`] is the same string the step serializes under
/// `"type"`; consumers switch on it, so tags are stable.
pub trait StepKind {
    /// The camelCase tag of this step (`"compare"`, `"negativeCycle"`, ...).
    fn tag(&self) -> &'static str;

    /// Returns `true` for steps that count as a comparison in the statistics panel.
    fn is_comparison(&self) -> bool {
        false
    }

    /// Returns `true` for steps that exchange two array elements.
    fn is_swap(&self) -> bool {
        false
    }

    /// Returns `true` for steps that apply an improvement (distance, key or table update).
    fn is_update(&self) -> bool {
        false
    }

    /// Returns `true` for the step that ends a trace (`complete` or a negative outcome).
    fn is_terminal(&self) -> bool;
}

/// One entry of a trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step<S> {
    #[serde(flatten)]
    kind: S,
    description: String,
}

impl<S> Step<S> {
    /// The family-specific payload of this step.
    #[must_use]
    pub fn kind(&self) -> &S {
        &self.kind
    }

    /// Display-only summary of the step.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<S: StepKind> Step<S> {
    /// Shorthand for `self.kind().tag()`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}

/// Ordered list of steps produced by one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace<S> {
    steps: Vec<Step<S>>,
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Trace { steps: Vec::new() }
    }
}

impl<S> Trace<S> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub(crate) fn record(&mut self, kind: S, description: impl Into<String>) {
        self.steps.push(Step {
            kind,
            description: description.into(),
        });
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the trace holds no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step<S>> {
        self.steps.get(index)
    }

    /// Returns the first step.
    #[must_use]
    pub fn first(&self) -> Option<&Step<S>> {
        self.steps.first()
    }

    /// Returns the final step.
    #[must_use]
    pub fn last(&self) -> Option<&Step<S>> {
        self.steps.last()
    }

    /// All steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// Iterates the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step<S>> {
        self.steps.iter()
    }

    /// Consumes the trace, returning its steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step<S>> {
        self.steps
    }
}

impl<S: StepKind> Trace<S> {
    /// Counts comparisons, swaps and updates for the statistics display.
    #[must_use]
    pub fn stats(&self) -> TraceStats {
        self.steps.iter().fold(
            TraceStats {
                total_steps: self.steps.len(),
                ..TraceStats::default()
            },
            |mut stats, step| {
                if step.kind.is_comparison() {
                    stats.comparisons += 1;
                }
                if step.kind.is_swap() {
                    stats.swaps += 1;
                }
                if step.kind.is_update() {
                    stats.updates += 1;
                }
                stats
            },
        )
    }

    /// Tags of all steps, in order.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        self.steps.iter().map(Step::tag).collect()
    }

    /// Returns `true` if the trace ends with a terminal step.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps.last().is_some_and(|step| step.kind.is_terminal())
    }
}

impl<S> Index<usize> for Trace<S> {
    type Output = Step<S>;

    fn index(&self, index: usize) -> &Step<S> {
        &self.steps[index]
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a Step<S>;
    type IntoIter = std::slice::Iter<'a, Step<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Aggregate counters over a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStats {
    /// Number of steps in the trace
    pub total_steps: usize,
    /// Comparison-like steps (`compare`, `consider`, `relax`, `checkNeighbor`)
    pub comparisons: usize,
    /// Element exchanges (`swap`, `pivotPlace`)
    pub swaps: usize,
    /// Applied improvements (`update`, `updateDistance`, `updateKey`, `updateDP`)
    pub updates: usize,
}
