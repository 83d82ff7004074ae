#[cfg(test)]
mod model_tests {
    use jiff::{SignedDuration, Timestamp};

    use crate::models::{
        CompletionFilter, Difficulty, Mission, MissionFilter, MissionKind, Plant, Profile,
    };

    fn create_test_plant(health: i64) -> Plant {
        Plant::new(
            12,
            "Calathea",
            "Calathea orbifolia",
            "Bedroom",
            health,
            Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            Timestamp::from_second(1640995200).unwrap(),
            4,
            30,
            Timestamp::from_second(1640995200).unwrap(),
        )
    }

    fn create_test_mission() -> Mission {
        Mission {
            id: 3,
            plant_id: Some(12),
            kind: MissionKind::Watering,
            title: "Water Calathea".to_string(),
            description: "Calathea needs water today.".to_string(),
            difficulty: Difficulty::Easy,
            points: 10,
            time_left: SignedDuration::from_hours(12),
            urgent: true,
            created_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_health_is_clamped_on_every_write() {
        assert_eq!(create_test_plant(-20).health(), 0);
        assert_eq!(create_test_plant(250).health(), 100);

        let mut plant = create_test_plant(50);
        for value in [-1_i64, 0, 42, 100, 101, i64::MAX, i64::MIN] {
            plant.set_health(value);
            assert!(plant.health() <= 100);
        }
        plant.set_health(42);
        assert_eq!(plant.health(), 42);
    }

    #[test]
    fn test_mission_remaining_time_is_lazy() {
        let mission = create_test_mission();
        let created = mission.created_at;

        let two_hours_in = created + SignedDuration::from_hours(2);
        assert_eq!(mission.remaining(two_hours_in), SignedDuration::from_hours(10));
        assert!(!mission.is_expired(two_hours_in));

        let next_day = created + SignedDuration::from_hours(24);
        assert_eq!(mission.remaining(next_day), SignedDuration::from_hours(-12));
        assert!(mission.is_expired(next_day));
    }

    #[test]
    fn test_mission_serializes_kind_as_type() {
        let json = serde_json::to_value(create_test_mission()).unwrap();
        assert_eq!(json["type"], "watering");
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["plantId"], 12);

        let back: Mission = serde_json::from_value(json).unwrap();
        assert_eq!(back, create_test_mission());
    }

    #[test]
    fn test_mission_kind_parsing() {
        assert_eq!("water".parse::<MissionKind>(), Ok(MissionKind::Watering));
        assert_eq!("Pruning".parse::<MissionKind>(), Ok(MissionKind::Pruning));
        assert_eq!("inspect".parse::<MissionKind>(), Ok(MissionKind::Inspection));
        assert!("repotting".parse::<MissionKind>().is_err());
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }

    #[test]
    fn test_mission_filter_matching() {
        let active = MissionFilter::default();
        assert!(active.matches(MissionKind::Watering, Some(1), false));
        assert!(!active.matches(MissionKind::Watering, Some(1), true));

        let completed_pruning = MissionFilter {
            completion: CompletionFilter::Completed,
            kind: Some(MissionKind::Pruning),
            plant_id: None,
        };
        assert!(completed_pruning.matches(MissionKind::Pruning, Some(4), true));
        assert!(!completed_pruning.matches(MissionKind::Watering, Some(4), true));

        let for_plant = MissionFilter {
            completion: CompletionFilter::All,
            kind: None,
            plant_id: Some(2),
        };
        assert!(for_plant.matches(MissionKind::Inspection, Some(2), true));
        assert!(!for_plant.matches(MissionKind::Inspection, Some(3), false));
        assert!(!for_plant.matches(MissionKind::Inspection, None, false));
    }

    #[test]
    fn test_profile_ratios() {
        let mut profile = Profile {
            level: 1,
            total_points: 0,
            current_streak: 0,
            best_streak: 0,
            plant_count: 0,
            urgent_plants: 0,
            active_missions: 0,
            completed_missions: 0,
            generated_missions: 0,
            plants_watered: 0,
            badges_unlocked: 0,
        };
        assert_eq!(profile.success_rate(), 0.0);
        assert_eq!(profile.week_progress(), 0);

        profile.generated_missions = 4;
        profile.completed_missions = 3;
        profile.current_streak = 9;
        assert_eq!(profile.success_rate(), 0.75);
        assert_eq!(profile.week_progress(), 100);
    }
}
