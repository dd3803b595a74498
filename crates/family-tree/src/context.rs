//! Build context configuration

use serde::{Deserialize, Serialize};

/// Which record keeps an id when the snapshot repeats it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one
    #[default]
    LastWriteWins,
    /// The earlier record is kept and later ones are dropped
    FirstWriteWins,
}

/// Which parent is tried first when choosing a placement parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParentPrecedence {
    /// `fatherId`, then `motherId`
    #[default]
    FatherFirst,
    /// `motherId`, then `fatherId`
    MotherFirst,
}

/// Policy settings for one build cycle.
///
/// Passed to the graph builder, layout engine and timeline derivation.
/// The defaults are father-first placement, last-write-wins on duplicate
/// ids, dangling checks on both parents, no spouse symmetry check and
/// births-only timelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildContext {
    /// Resolution of repeated ids
    pub duplicate_policy: DuplicatePolicy,

    /// Placement parent tie-break
    pub parent_precedence: ParentPrecedence,

    /// Report a missing lower-precedence parent even when the other parent
    /// placed the node
    pub report_secondary_dangling: bool,

    /// Report spouse links the partner does not return
    pub check_spouse_symmetry: bool,

    /// Emit death events in the timeline as well as births
    pub include_deaths: bool,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            parent_precedence: ParentPrecedence::default(),
            report_secondary_dangling: true,
            check_spouse_symmetry: false,
            include_deaths: false,
        }
    }
}

impl BuildContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate id policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Set the placement parent precedence.
    pub fn with_parent_precedence(mut self, precedence: ParentPrecedence) -> Self {
        self.parent_precedence = precedence;
        self
    }

    /// Enable or disable dangling checks on the parent not used for placement.
    pub fn with_secondary_dangling(mut self, enabled: bool) -> Self {
        self.report_secondary_dangling = enabled;
        self
    }

    /// Enable or disable the spouse symmetry check.
    pub fn with_spouse_symmetry_check(mut self, enabled: bool) -> Self {
        self.check_spouse_symmetry = enabled;
        self
    }

    /// Enable or disable death events in the timeline.
    pub fn with_deaths(mut self, enabled: bool) -> Self {
        self.include_deaths = enabled;
        self
    }
}
