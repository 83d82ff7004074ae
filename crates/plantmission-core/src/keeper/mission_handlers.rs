//! Mission, profile and badge handler operations.

use super::Keeper;
use crate::{
    display::{Badges, CompletionResult, GenerationResult, MissionCard, Missions},
    error::Result,
    models::{MissionFilter, Profile},
    params::{Id, ListMissions},
};

impl Keeper {
    /// Runs the mission generator and stores what it produced.
    ///
    /// Generating twice in a row yields nothing the second time.
    pub async fn generate_missions(&self) -> Result<GenerationResult> {
        self.transact(|garden, now| Ok(GenerationResult::new(garden.generate_missions(now))))
            .await
    }

    /// Missions matching `params`, active ones by default.
    pub async fn list_missions(&self, params: &ListMissions) -> Result<Missions> {
        let filter = MissionFilter::from(params);
        self.transact(|garden, now| {
            Ok(Missions(
                garden
                    .missions_matching(&filter)
                    .into_iter()
                    .map(|m| MissionCard::new(m.clone(), garden.is_completed(m.id), now.timestamp()))
                    .collect(),
            ))
        })
        .await
    }

    /// Completes a mission, crediting its points.
    ///
    /// # Errors
    ///
    /// * `UnknownMission` if no mission has the id.
    /// * `AlreadyCompleted` if it was completed before.
    pub async fn complete_mission(&self, params: &Id) -> Result<CompletionResult> {
        self.transact(|garden, now| Ok(CompletionResult(garden.complete_mission(params.id, now)?)))
            .await
    }

    /// Level, streak and collection overview.
    pub async fn profile(&self) -> Result<Profile> {
        self.transact(|garden, now| Ok(garden.profile(now))).await
    }

    /// The badge catalog with current unlock state.
    pub async fn badges(&self) -> Result<Badges> {
        self.transact(|garden, _| Ok(Badges(garden.badges()))).await
    }
}
