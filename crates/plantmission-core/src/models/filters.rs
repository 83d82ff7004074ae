//! Filter types for querying missions.

use super::MissionKind;

/// Completion state filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    /// Missions not yet recorded in the ledger
    #[default]
    Active,

    /// Missions recorded in the ledger
    Completed,

    /// Every generated mission
    All,
}

/// Filter options for querying missions.
#[derive(Debug, Clone, Default)]
pub struct MissionFilter {
    /// Filter by completion state
    pub completion: CompletionFilter,

    /// Filter by mission kind
    pub kind: Option<MissionKind>,

    /// Filter by target plant
    pub plant_id: Option<u64>,
}

impl MissionFilter {
    /// Returns true when a mission with the given attributes passes the filter.
    pub fn matches(&self, kind: MissionKind, plant_id: Option<u64>, completed: bool) -> bool {
        let state_ok = match self.completion {
            CompletionFilter::Active => !completed,
            CompletionFilter::Completed => completed,
            CompletionFilter::All => true,
        };
        state_ok
            && self.kind.map_or(true, |k| k == kind)
            && self.plant_id.map_or(true, |id| plant_id == Some(id))
    }
}

impl From<&crate::params::ListMissions> for MissionFilter {
    /// Convert ListMissions parameters to a MissionFilter.
    ///
    /// ```rust
    /// use plantmission_core::{models::{CompletionFilter, MissionFilter}, params::ListMissions};
    ///
    /// let params = ListMissions { completed: true, all: false, kind: None, plant_id: None };
    /// let filter: MissionFilter = (&params).into();
    /// assert_eq!(filter.completion, CompletionFilter::Completed);
    /// ```
    fn from(params: &crate::params::ListMissions) -> Self {
        let completion = if params.all {
            CompletionFilter::All
        } else if params.completed {
            CompletionFilter::Completed
        } else {
            CompletionFilter::Active
        };
        Self {
            completion,
            kind: params.kind,
            plant_id: params.plant_id,
        }
    }
}
