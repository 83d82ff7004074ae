//! Plant handler operations that return formatted wrapper types.

use super::Keeper;
use crate::{
    display::{CompletionResult, CreateResult, PlantCard, Plants, UpdateResult, WateringResult},
    error::Result,
    params::{AddPlant, Id, SetUrgent, UpdateHealth},
};

impl Keeper {
    /// Adds a plant and returns its card.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use plantmission_core::{params::AddPlant, KeeperBuilder};
    /// # async {
    /// let keeper = KeeperBuilder::new().build().await?;
    /// let created = keeper
    ///     .add_plant(&AddPlant {
    ///         name: "Snake Plant".to_string(),
    ///         watering_interval_days: 14,
    ///         ..AddPlant::default()
    ///     })
    ///     .await?;
    /// assert_eq!(created.resource.plant.name, "Snake Plant");
    /// # Result::<(), plantmission_core::GardenError>::Ok(())
    /// # };
    /// ```
    pub async fn add_plant(&self, params: &AddPlant) -> Result<CreateResult<PlantCard>> {
        self.transact(|garden, now| {
            let plant = garden.add_plant(params, now)?;
            Ok(CreateResult::new(PlantCard::at(plant, now)))
        })
        .await
    }

    /// Every plant with its current care status.
    pub async fn list_plants(&self) -> Result<Plants> {
        self.transact(|garden, now| {
            Ok(Plants(
                garden
                    .plants()
                    .iter()
                    .map(|plant| PlantCard::at(plant.clone(), now))
                    .collect(),
            ))
        })
        .await
    }

    /// Plants whose watering is due today, overdue, or manually flagged.
    pub async fn urgent_plants(&self) -> Result<Plants> {
        let plants = self.list_plants().await?;
        Ok(Plants(
            plants.into_iter().filter(|card| card.status.urgent).collect(),
        ))
    }

    /// One plant with its care status.
    ///
    /// # Errors
    ///
    /// `InvalidPlantReference` if no plant has the id.
    pub async fn show_plant(&self, params: &Id) -> Result<PlantCard> {
        self.transact(|garden, now| Ok(PlantCard::at(garden.plant(params.id)?.clone(), now)))
            .await
    }

    /// Records a watering now, completing the plant's pending watering
    /// mission if there is one.
    pub async fn water_plant(&self, params: &Id) -> Result<WateringResult> {
        self.transact(|garden, now| {
            let report = garden.water_plant(params.id, now)?;
            Ok(WateringResult {
                plant: PlantCard::at(report.plant, now),
                completion: report.completion.map(CompletionResult),
            })
        })
        .await
    }

    /// Records a feeding now.
    pub async fn fertilize_plant(&self, params: &Id) -> Result<UpdateResult<PlantCard>> {
        self.transact(|garden, now| {
            let plant = garden.fertilize_plant(params.id, now)?;
            let change = format!("Fertilized {}", plant.name);
            Ok(UpdateResult::new(PlantCard::at(plant, now), change))
        })
        .await
    }

    /// Writes a health score; out-of-range values are clamped.
    pub async fn update_health(&self, params: &UpdateHealth) -> Result<UpdateResult<PlantCard>> {
        self.transact(|garden, now| {
            let plant = garden.update_health(params.id, params.health)?;
            let change = format!("Health of {} set to {}", plant.name, plant.health());
            Ok(UpdateResult::new(PlantCard::at(plant, now), change))
        })
        .await
    }

    /// Sets or clears the manual urgency flag.
    pub async fn set_urgent(&self, params: &SetUrgent) -> Result<UpdateResult<PlantCard>> {
        self.transact(|garden, now| {
            let plant = garden.set_urgent(params.id, params.urgent)?;
            let change = if params.urgent {
                format!("Flagged {} for attention", plant.name)
            } else {
                format!("Cleared the flag on {}", plant.name)
            };
            Ok(UpdateResult::new(PlantCard::at(plant, now), change))
        })
        .await
    }
}
