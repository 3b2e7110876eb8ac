#[cfg(test)]
mod tests {
    use crate::commands::InputFrame;
    use crate::config::SimConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::SimError;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    // ---- Enums ----

    #[test]
    fn test_sub_weapon_index_round_trip() {
        for (i, sub) in SubWeaponType::ALL.iter().enumerate() {
            assert_eq!(sub.index() as usize, i);
            assert_eq!(SubWeaponType::from_index(i as u8), Some(*sub));
        }
        assert_eq!(SubWeaponType::from_index(8), None);
    }

    #[test]
    fn test_sub_weapon_pool_kinds() {
        assert_eq!(SubWeaponType::AllRange.pool_kind(), PoolKind::Unlimited);
        assert_eq!(SubWeaponType::Crusher.pool_kind(), PoolKind::Ammo);
        assert_eq!(SubWeaponType::Barrier.pool_kind(), PoolKind::Durability);
        assert_eq!(SubWeaponType::Circular.pool_kind(), PoolKind::Duration);
        assert_eq!(SubWeaponType::Vibrator.pool_kind(), PoolKind::Ammo);
        assert_eq!(SubWeaponType::Rewinder.pool_kind(), PoolKind::Ammo);
        assert_eq!(SubWeaponType::Plasma.pool_kind(), PoolKind::Ammo);
        assert_eq!(SubWeaponType::HiSpeed.pool_kind(), PoolKind::Duration);
    }

    #[test]
    fn test_offscreen_margins() {
        assert_eq!(ProjectileKind::Normal.offscreen_margin(), 20.0);
        assert_eq!(ProjectileKind::Penetrating.offscreen_margin(), 20.0);
        assert_eq!(ProjectileKind::Vibrating.offscreen_margin(), 60.0);
        assert_eq!(ProjectileKind::Boomerang.offscreen_margin(), 120.0);
        assert_eq!(ProjectileKind::Laser.offscreen_margin(), 100.0);
        assert_eq!(ProjectileKind::Plasma.offscreen_margin(), 40.0);
    }

    #[test]
    fn test_enemy_bullet_hit_points() {
        assert_eq!(ProjectileKind::Normal.enemy_hit_points(), 1.0);
        assert_eq!(ProjectileKind::Sig.enemy_hit_points(), 2.0);
        assert_eq!(ProjectileKind::Lead.enemy_hit_points(), 30.0);
    }

    #[test]
    fn test_type_bound_kinds() {
        assert!(ProjectileKind::Boomerang.is_type_bound());
        assert!(ProjectileKind::Vibrating.is_type_bound());
        assert!(ProjectileKind::Laser.is_type_bound());
        assert!(ProjectileKind::Plasma.is_type_bound());
        assert!(!ProjectileKind::Normal.is_type_bound());
        assert!(!ProjectileKind::Penetrating.is_type_bound());
    }

    #[test]
    fn test_area_state_boss_phase() {
        assert_eq!(AreaState::NormalProgress.boss_phase(), BossPhase::None);
        assert_eq!(AreaState::BossActive.boss_phase(), BossPhase::Active);
        assert_eq!(AreaState::BossDefeatedDelay.boss_phase(), BossPhase::Defeated);
        assert_eq!(AreaState::Complete.boss_phase(), BossPhase::Defeated);
    }

    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Air(AirArchetype::Drone),
            EnemyKind::Air(AirArchetype::Bonus),
            EnemyKind::Ground(GroundArchetype::SupportBase),
            EnemyKind::Boss(BossArchetype::Tyrant),
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_event_tagged_serde() {
        let event = GameEvent::SubWeaponLevelUp {
            sub_type: SubWeaponType::Plasma,
            level: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(
            json.contains("\"type\":\"SubWeaponLevelUp\""),
            "events should carry a type tag, got {json}"
        );
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
    }

    // ---- Input ----

    #[test]
    fn test_input_axes() {
        let frame = InputFrame {
            left: true,
            down: true,
            ..InputFrame::idle()
        };
        assert_eq!(frame.axis_x(), -1.0);
        assert_eq!(frame.axis_y(), 1.0);

        let both = InputFrame {
            left: true,
            right: true,
            ..InputFrame::idle()
        };
        assert_eq!(both.axis_x(), 0.0, "opposing directions cancel");
        assert!(InputFrame::firing().main_fire && InputFrame::firing().sub_fire);
    }

    // ---- Geometry ----

    #[test]
    fn test_position_range_and_step() {
        let mut a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);

        a.step(&Velocity::new(0.0, -8.0));
        assert_eq!(a, Position::new(0.0, -8.0));
        assert!((Velocity::new(3.0, 4.0).speed() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults_fill_missing_keys() {
        let config = SimConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.starting_lives, DEFAULT_LIVES);
        assert_eq!(config.starting_area, 1);
        assert_eq!(config.starting_main_level, 0);
    }

    #[test]
    fn test_config_rejects_out_of_range() {
        let err = SimConfig::from_json_str(r#"{ "starting_area": 13 }"#).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidConfig {
                field: "starting_area",
                ..
            }
        ));

        let err = SimConfig::from_json_str(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { .. }));

        let err = SimConfig::from_json_str(r#"{ "starting_main_level": 31 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { .. }));
    }

    #[test]
    fn test_config_parse_error() {
        let err = SimConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, SimError::ConfigParse(_)));
        assert!(err.to_string().starts_with("malformed config"));
    }

    #[test]
    fn test_config_missing_file() {
        let err = SimConfig::from_path("/nonexistent/sortie.json").unwrap_err();
        assert!(matches!(err, SimError::Io { .. }));
    }
}
