//! End-to-end act 1 runs against the in-memory world.

use std::sync::Arc;

use game_content::{BossId, BossTable, presets};
use game_core::{Area, Difficulty, ItemLocation, TownNpc, TravelMode, UnitId};
use runtime::mock::Call;
use runtime::{
    ConsumeTarget, EncounterOutcome, Leveler, MockGame, Operation, RunStatus, RuntimeConfig,
    RuntimeError, StepStatus, World,
};

fn leveler(game: &Arc<MockGame>) -> Leveler {
    Leveler::new(
        World::from_shared(game.clone()),
        presets::sorceress_leveling_fire(),
        presets::boss_table(),
        Difficulty::Normal,
        RuntimeConfig::default(),
    )
}

fn statuses(report: &runtime::ProgressionReport) -> Vec<(&str, &StepStatus)> {
    report
        .steps
        .iter()
        .map(|record| (record.step.as_str(), &record.status))
        .collect()
}

#[tokio::test]
async fn fresh_character_runs_every_gate_and_hands_off() {
    let game = Arc::new(MockGame::act1(1));

    let report = leveler(&game).run_act1().await;

    assert_eq!(report.status, RunStatus::HandedOff);
    assert_eq!(
        report.executed().collect::<Vec<_>>(),
        vec![
            "clear blood_moor",
            "clear cold_plains",
            "clear stony_field",
            "clear dark_wood",
            "clear black_marsh",
            "kill countess",
            "kill andariel",
        ]
    );
    assert_eq!(game.player().level, 6);
    assert_eq!(game.player().area, Area::RogueEncampment);
    assert_eq!(game.calls().last(), Some(&Call::InteractNpc(TownNpc::Warriv)));
}

#[tokio::test]
async fn first_zone_runs_below_first_threshold() {
    let game = Arc::new(MockGame::act1(2));

    let report = leveler(&game).run_act1().await;

    assert_eq!(report.steps[0].step, "clear blood_moor");
    assert_eq!(report.steps[0].status, StepStatus::Executed);
    assert!(
        !report
            .steps
            .iter()
            .any(|record| matches!(record.status, StepStatus::Skipped { .. }))
    );
    assert_eq!(
        game.calls().first(),
        Some(&Call::Travel {
            area: Area::BloodMoor,
            mode: TravelMode::Walk,
        })
    );
}

#[tokio::test]
async fn outgrown_character_goes_straight_to_andariel() {
    let game = Arc::new(MockGame::act1(20));

    let report = leveler(&game).run_act1().await;

    let gates = &report.steps[..6];
    assert!(
        gates
            .iter()
            .all(|record| record.status == StepStatus::Skipped { level: 20 })
    );
    assert_eq!(report.steps[6].step, "kill andariel");
    assert_eq!(report.steps[6].status, StepStatus::Executed);
    assert_eq!(
        game.calls().first(),
        Some(&Call::Travel {
            area: Area::CatacombsLevel2,
            mode: TravelMode::Waypoint,
        })
    );
}

#[tokio::test]
async fn gates_are_reevaluated_against_the_live_level() {
    let game = Arc::new(MockGame::act1(7));

    let report = leveler(&game).run_act1().await;

    assert_eq!(
        statuses(&report)[..6],
        [
            ("clear blood_moor", &StepStatus::Skipped { level: 7 }),
            ("clear cold_plains", &StepStatus::Skipped { level: 7 }),
            ("clear stony_field", &StepStatus::Skipped { level: 7 }),
            ("clear dark_wood", &StepStatus::Executed),
            ("clear black_marsh", &StepStatus::Executed),
            ("kill countess", &StepStatus::Executed),
        ]
    );
}

#[tokio::test]
async fn large_level_jump_closes_later_gates() {
    let game = Arc::new(MockGame::act1(1).with_levels_per_clear(10));

    let report = leveler(&game).run_act1().await;

    // Blood Moor takes the character from 1 to 11, Black Marsh to 21.
    assert_eq!(
        statuses(&report)[..6],
        [
            ("clear blood_moor", &StepStatus::Executed),
            ("clear cold_plains", &StepStatus::Skipped { level: 11 }),
            ("clear stony_field", &StepStatus::Skipped { level: 11 }),
            ("clear dark_wood", &StepStatus::Skipped { level: 11 }),
            ("clear black_marsh", &StepStatus::Executed),
            ("kill countess", &StepStatus::Skipped { level: 21 }),
        ]
    );
}

#[tokio::test]
async fn outside_town_the_run_is_a_no_op() {
    let game = Arc::new(MockGame::act1(5));
    game.place_player(Area::ColdPlains);
    let before = game.calls().len();

    let report = leveler(&game).run_act1().await;

    assert_eq!(
        report.status,
        RunStatus::NotInTown {
            area: Area::ColdPlains
        }
    );
    assert!(report.steps.is_empty());
    assert_eq!(game.calls().len(), before);
}

#[tokio::test]
async fn failing_steps_are_recorded_and_the_run_continues() {
    let game = Arc::new(MockGame::act1(1));
    game.fail_on(Operation::Travel, "waypoint not discovered");

    let report = leveler(&game).run_act1().await;

    assert_eq!(report.status, RunStatus::Finished);
    assert_eq!(report.failures().count(), 7);
    assert_eq!(
        report.steps[0].status,
        StepStatus::Failed {
            reason: "travel failed: waypoint not discovered".to_string()
        }
    );
}

#[tokio::test]
async fn antidotes_are_split_with_a_living_mercenary() {
    let game = Arc::new(MockGame::act1(20));

    leveler(&game).run_act1().await;

    let calls = game.calls();
    assert!(calls.iter().any(|call| matches!(
        call,
        Call::BuyAtVendor { vendor: TownNpc::Akara, request }
            if request.item == "AntidotePotion" && request.quantity == 8 && request.tab == 4
    )));
    let consumed: Vec<ConsumeTarget> = calls
        .iter()
        .filter_map(|call| match call {
            Call::ConsumeItem { target, .. } => Some(*target),
            _ => None,
        })
        .collect();
    assert_eq!(
        consumed,
        [[ConsumeTarget::Player; 4], [ConsumeTarget::Mercenary; 4]].concat()
    );
    assert_eq!(game.inventory().count("AntidotePotion", ItemLocation::Inventory), 0);
}

#[tokio::test]
async fn without_mercenary_four_antidotes_are_drunk() {
    let game = Arc::new(MockGame::act1(20));
    game.dismiss_mercenary();

    leveler(&game).run_act1().await;

    let consumed: Vec<ConsumeTarget> = game
        .calls()
        .iter()
        .filter_map(|call| match call {
            Call::ConsumeItem { target, .. } => Some(*target),
            _ => None,
        })
        .collect();
    assert_eq!(consumed, vec![ConsumeTarget::Player; 4]);
}

#[tokio::test]
async fn missing_andariel_skips_the_hand_off() {
    let game = Arc::new(MockGame::act1(20));
    game.despawn(UnitId(200));

    let report = leveler(&game).run_act1().await;

    assert_eq!(report.status, RunStatus::Finished);
    assert_eq!(report.steps[6].status, StepStatus::NotFound);
    assert!(!game.calls().contains(&Call::InteractNpc(TownNpc::Warriv)));
}

#[tokio::test]
async fn named_kill_needs_a_table_entry() {
    let game = Arc::new(MockGame::act1(20));
    let leveler = Leveler::new(
        World::from_shared(game.clone()),
        presets::sorceress_leveling_fire(),
        BossTable::new(Vec::new()).unwrap(),
        Difficulty::Normal,
        RuntimeConfig::default(),
    );

    assert_eq!(
        leveler.kill(BossId::Baal).await,
        Err(RuntimeError::UnknownBoss(BossId::Baal))
    );
}

#[tokio::test]
async fn named_kill_fights_where_the_agent_stands() {
    let game = Arc::new(MockGame::act1(20));
    game.place_player(Area::TowerCellarLevel5);

    let outcome = leveler(&game).kill(BossId::Countess).await.unwrap();

    assert_eq!(outcome, EncounterOutcome::Defeated);
}
