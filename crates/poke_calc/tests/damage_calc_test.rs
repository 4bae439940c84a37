//! Damage calculation integration tests.
//!
//! These run the public entry points against the sample dex and check the
//! distribution, multiplier and error contracts.

mod common;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use common::*;
use poke_calc::damage::{calculate_damage, get_base_damage};
use poke_calc::{
    BattleStat, CalcConfig, CalcError, CombatantConfig, FieldConditions, IdKind, MoveCategory,
    MoveInput, Status, Type,
};

const ATTACKERS: [&str; 8] = [
    "garchomp",
    "heatran",
    "togekiss",
    "conkeldurr",
    "sylveon",
    "charizard",
    "scizor",
    "greninja",
];

const DEFENDERS: [&str; 8] = [
    "snorlax",
    "skarmory",
    "gengar",
    "bronzong",
    "ferrothorn",
    "dragonite",
    "blissey",
    "toxapex",
];

const MOVES: [&str; 14] = [
    "earthquake",
    "flamethrower",
    "moonblast",
    "closecombat",
    "hypervoice",
    "bulletpunch",
    "surf",
    "icebeam",
    "shadowball",
    "stoneedge",
    "knockoff",
    "lowkick",
    "heavyslam",
    "swordsdance",
];

// ============================================================================
// Distribution properties
// ============================================================================

#[test]
fn test_distribution_invariants_across_matchups() {
    let data = dex();
    let field = FieldConditions::default();

    for attacker in ATTACKERS {
        for defender in DEFENDERS {
            for id in MOVES {
                let mv = MoveInput::from_data(&data, id).unwrap();
                let result = calc(
                    &data,
                    CombatantConfig::new(attacker),
                    CombatantConfig::new(defender),
                    &mv,
                    &field,
                );

                assert_monotone(&result);
                assert!(
                    [0.0, 0.25, 0.5, 1.0, 2.0, 4.0].contains(&result.breakdown.effectiveness),
                    "{attacker} {id} -> {defender}: effectiveness {}",
                    result.breakdown.effectiveness
                );
                assert!(
                    [1.0, 1.5, 2.0].contains(&result.breakdown.stab),
                    "{attacker} {id} -> {defender}: stab {}",
                    result.breakdown.stab
                );

                if result.breakdown.effectiveness == 0.0 || result.category == MoveCategory::Status
                {
                    assert!(result.rolls.is_zero());
                    assert_eq!(result.ko_probability, 0.0);
                    assert_eq!(result.guaranteed_ko_hits, None);
                } else {
                    assert!(result.min >= 1, "{attacker} {id} -> {defender}");
                }
            }
        }
    }
}

#[test]
fn test_immunity_zeroes_every_roll() {
    let data = dex();
    let result = calc(
        &data,
        CombatantConfig::new("garchomp"),
        CombatantConfig::new("skarmory"),
        &MoveInput::from_data(&data, "earthquake").unwrap(),
        &FieldConditions::default(),
    );

    assert_eq!(result.rolls.rolls(), &[0; 16]);
    assert_eq!(result.breakdown.effectiveness_raw, 0);
    assert_eq!(result.ko_probability, 0.0);
    assert_eq!(result.guaranteed_ko_hits, None);
    assert!(result.probable_ko.values().all(|&p| p == 0.0));
}

#[test]
fn test_status_move_deals_no_damage() {
    let data = dex();
    let result = calc(
        &data,
        CombatantConfig::new("garchomp"),
        CombatantConfig::new("snorlax"),
        &MoveInput::from_data(&data, "swordsdance").unwrap(),
        &FieldConditions::default(),
    );
    assert!(result.rolls.is_zero());
    assert_eq!(result.category, MoveCategory::Status);
}

// ============================================================================
// Worked scenarios
// ============================================================================

#[test]
fn test_boosted_attacker_matches_base_formula() {
    let data = dex();
    // 317 Atk at +1 holding Choice Band into 167 Def, 100 BP, no bonuses.
    let attacker = fixed("garchomp", [200, 317, 150, 100, 100, 150])
        .stage(BattleStat::Atk, 1)
        .item("choiceband");
    let defender = fixed("togekiss", [200, 100, 167, 100, 100, 100]);
    let mv = MoveInput::custom("Test Strike", Type::Normal, MoveCategory::Physical, 100);

    let result = calc(&data, attacker, defender, &mv, &FieldConditions::default());

    // floor(317 * 3 / 2) = 475; 475 * 6144 / 4096 = 712.5, halves round down
    assert_eq!(result.breakdown.attack, 712);
    assert_eq!(result.breakdown.defense, 167);

    let base = get_base_damage(50, 100, 712, 167);
    assert_eq!(base, 189);
    assert_eq!(result.breakdown.base_damage, base);
    assert_eq!(result.breakdown.stab, 1.0);
    assert_eq!(result.breakdown.effectiveness, 1.0);

    assert_eq!(result.rolls.rolls(), &rolls_from_base(base));
    assert_eq!(result.min, (base * 85 / 100) as u16);
    assert_eq!(result.max, base as u16);
}

#[test]
fn test_quad_effective_stab_is_six_times_neutral() {
    let data = dex();
    let field = FieldConditions::default();
    let mv = MoveInput::custom("Frost Test", Type::Ice, MoveCategory::Special, 80);
    let attacker_stats = [200, 100, 100, 120, 100, 100];
    let defender_stats = [200, 100, 100, 100, 100, 100];

    let boosted = calc(
        &data,
        fixed("ditto", attacker_stats).types(&["ice"]),
        fixed("garchomp", defender_stats),
        &mv,
        &field,
    );
    let neutral = calc(
        &data,
        fixed("ditto", attacker_stats).types(&["water"]),
        fixed("garchomp", defender_stats).types(&["normal"]),
        &mv,
        &field,
    );

    assert_eq!(boosted.breakdown.effectiveness, 4.0);
    assert_eq!(boosted.breakdown.stab, 1.5);
    assert_eq!(neutral.breakdown.effectiveness, 1.0);
    assert_eq!(neutral.breakdown.stab, 1.0);
    assert_eq!(boosted.breakdown.base_damage, neutral.breakdown.base_damage);

    // Base damage 44 is even, so STAB is exact and the 100% roll is 6x.
    assert_eq!(neutral.max, 44);
    assert_eq!(boosted.max, neutral.max * 6);
    for (six, one) in boosted.rolls.iter().zip(neutral.rolls.iter()) {
        let drift = (*six as i32 - 6 * *one as i32).abs();
        assert!(drift <= 6, "{six} vs 6 * {one}");
    }
}

#[test]
fn test_burn_halves_physical_damage() {
    let data = dex();
    let field = FieldConditions::default();
    let stats = [200, 150, 100, 150, 100, 100];
    let physical = MoveInput::custom("Burn Test", Type::Normal, MoveCategory::Physical, 80);
    let special = MoveInput::custom("Burn Test", Type::Normal, MoveCategory::Special, 80);
    let defender = || fixed("snorlax", [250, 100, 100, 100, 100, 100]);

    let healthy = calc(&data, fixed("ditto", stats), defender(), &physical, &field);
    let burned = calc(
        &data,
        fixed("ditto", stats).status(Status::Burn),
        defender(),
        &physical,
        &field,
    );

    assert!(burned.breakdown.burn);
    assert!(!healthy.breakdown.burn);
    // The 100% roll is the identity, so the halving is visible exactly.
    assert_eq!(burned.max, healthy.max / 2);
    for (b, h) in burned.rolls.iter().zip(healthy.rolls.iter()) {
        assert!(*b <= h / 2 + 1, "{b} vs {h}");
    }

    let special_burned = calc(
        &data,
        fixed("ditto", stats).status(Status::Burn),
        defender(),
        &special,
        &field,
    );
    let special_healthy = calc(&data, fixed("ditto", stats), defender(), &special, &field);
    assert!(!special_burned.breakdown.burn);
    assert_eq!(special_burned.rolls, special_healthy.rolls);
}

#[test]
fn test_burn_exemptions() {
    let data = dex();
    let field = FieldConditions::default();

    let guts = calc(
        &data,
        CombatantConfig::new("conkeldurr")
            .ability("guts")
            .status(Status::Burn),
        CombatantConfig::new("snorlax"),
        &MoveInput::from_data(&data, "machpunch").unwrap(),
        &field,
    );
    assert!(!guts.breakdown.burn);

    let facade = calc(
        &data,
        CombatantConfig::new("snorlax")
            .ability("immunity")
            .status(Status::Burn),
        CombatantConfig::new("blissey"),
        &MoveInput::from_data(&data, "facade").unwrap(),
        &field,
    );
    assert!(!facade.breakdown.burn);
    assert_eq!(facade.breakdown.base_power, 140);
}

#[test]
fn test_compare_orders_by_average() {
    let data = dex();
    let attacker = build(&data, CombatantConfig::new("snorlax"));
    let defender = build(&data, CombatantConfig::new("blissey"));
    let moves: Vec<MoveInput> = ["tackle", "return", "bodyslam"]
        .iter()
        .map(|id| MoveInput::from_data(&data, id).unwrap())
        .collect();

    let ranked = poke_calc::compare(&data, &attacker, &defender, &moves, &FieldConditions::default())
        .unwrap();

    let order: Vec<&str> = ranked.iter().map(|r| r.move_id.as_str()).collect();
    assert_eq!(order, vec!["return", "bodyslam", "tackle"]);
    assert!(ranked.windows(2).all(|w| w[0].average >= w[1].average));
}

#[test]
fn test_compare_ties_prefer_fewer_hits() {
    let data = dex();
    let base = calc(
        &data,
        CombatantConfig::new("garchomp"),
        CombatantConfig::new("heatran"),
        &MoveInput::from_data(&data, "earthquake").unwrap(),
        &FieldConditions::default(),
    );

    let with_hits = |name: &str, hits: Option<u8>| {
        let mut result = base.clone();
        result.move_id = name.to_string();
        result.guaranteed_ko_hits = hits;
        result
    };
    let mut results = vec![
        with_hits("never", None),
        with_hits("three", Some(3)),
        with_hits("two", Some(2)),
        with_hits("also_three", Some(3)),
    ];
    poke_calc::damage::compare::rank(&mut results);

    let order: Vec<&str> = results.iter().map(|r| r.move_id.as_str()).collect();
    assert_eq!(order, vec!["two", "three", "also_three", "never"]);
}

#[test]
fn test_compare_with_identical_moves_is_stable() {
    let data = dex();
    let attacker = build(&data, CombatantConfig::new("garchomp"));
    let defender = build(&data, CombatantConfig::new("snorlax"));
    let moves = vec![
        MoveInput::custom("First", Type::Rock, MoveCategory::Physical, 75),
        MoveInput::custom("Second", Type::Rock, MoveCategory::Physical, 75),
    ];

    let ranked = poke_calc::compare(&data, &attacker, &defender, &moves, &FieldConditions::default())
        .unwrap();
    assert_eq!(ranked[0].move_id, "first");
    assert_eq!(ranked[1].move_id, "second");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_fainted_defender_is_rejected() {
    let data = dex();
    let attacker = build(&data, CombatantConfig::new("garchomp"));
    let defender = build(&data, CombatantConfig::new("heatran").current_hp(0));
    let mv = MoveInput::from_data(&data, "earthquake").unwrap();

    assert_matches!(
        poke_calc::calculate(&data, &attacker, &defender, &mv, &FieldConditions::default()),
        Err(CalcError::InvalidBattleState { .. })
    );
}

#[test]
fn test_unknown_identifiers_surface() {
    let data = dex();
    assert_matches!(
        MoveInput::from_data(&data, "notamove"),
        Err(CalcError::UnknownIdentifier { kind: IdKind::Move, .. })
    );
    assert_matches!(
        CombatantConfig::new("missingno").build(&data),
        Err(CalcError::UnknownIdentifier { kind: IdKind::Species, .. })
    );
    assert_matches!(
        CombatantConfig::new("garchomp").item("notanitem").build(&data),
        Err(CalcError::UnknownIdentifier { kind: IdKind::Item, .. })
    );
}

#[test]
fn test_invalid_stat_input() {
    let data = dex();
    assert_matches!(
        CombatantConfig::new("garchomp")
            .evs([252, 252, 252, 0, 0, 0])
            .build(&data),
        Err(CalcError::InvalidStatInput { .. })
    );
    assert_matches!(
        CombatantConfig::new("garchomp")
            .ivs([31, 32, 31, 31, 31, 31])
            .build(&data),
        Err(CalcError::InvalidStatInput { .. })
    );
}

#[test]
fn test_stellar_tera_stab_is_unsupported() {
    let data = dex();
    let attacker = build(&data, CombatantConfig::new("garchomp").tera("stellar"));
    let defender = build(&data, CombatantConfig::new("snorlax"));
    let mv = MoveInput::from_data(&data, "earthquake").unwrap();

    assert_matches!(
        poke_calc::calculate(&data, &attacker, &defender, &mv, &FieldConditions::default()),
        Err(CalcError::UnsupportedMechanic { .. })
    );
}

#[test]
fn test_direct_calculation_validates_config() {
    let data = dex();
    let attacker = build(&data, CombatantConfig::new("garchomp"));
    let defender = build(&data, CombatantConfig::new("blissey"));
    let mv = MoveInput::from_data(&data, "tackle").unwrap();
    let config = CalcConfig {
        ko_hit_bound: 40,
        ..Default::default()
    };

    assert_matches!(
        calculate_damage(&data, &config, &attacker, &defender, &mv, &FieldConditions::default()),
        Err(CalcError::InvalidConfig { field: "ko_hit_bound", .. })
    );
}

// ============================================================================
// Terastallization
// ============================================================================

#[test]
fn test_tera_stab() {
    let data = dex();
    let field = FieldConditions::default();
    let outrage = MoveInput::from_data(&data, "outrage").unwrap();
    let flamethrower = MoveInput::from_data(&data, "flamethrower").unwrap();

    let same = calc(
        &data,
        CombatantConfig::new("garchomp").tera("dragon"),
        CombatantConfig::new("snorlax"),
        &outrage,
        &field,
    );
    assert_eq!(same.breakdown.stab, 2.0);

    let new_type = calc(
        &data,
        CombatantConfig::new("garchomp").tera("fire"),
        CombatantConfig::new("snorlax"),
        &flamethrower,
        &field,
    );
    assert_eq!(new_type.breakdown.stab, 1.5);
}

#[test]
fn test_tera_changes_defensive_type() {
    let data = dex();
    let field = FieldConditions::default();
    let earthquake = MoveInput::from_data(&data, "earthquake").unwrap();

    let result = calc(
        &data,
        CombatantConfig::new("garchomp"),
        CombatantConfig::new("heatran").tera("water"),
        &earthquake,
        &field,
    );
    assert_eq!(result.breakdown.effectiveness, 1.0);
}

#[test]
fn test_ko_figures_use_current_hp() {
    let data = dex();
    let field = FieldConditions::default();
    let mv = MoveInput::from_data(&data, "closecombat").unwrap();

    let full = calc(
        &data,
        CombatantConfig::new("conkeldurr"),
        CombatantConfig::new("snorlax"),
        &mv,
        &field,
    );
    let chipped = calc(
        &data,
        CombatantConfig::new("conkeldurr"),
        CombatantConfig::new("snorlax").current_hp(10),
        &mv,
        &field,
    );

    assert_eq!(chipped.rolls, full.rolls);
    assert_eq!(chipped.defender_hp, 10);
    assert_eq!(chipped.defender_max_hp, full.defender_max_hp);
    assert_eq!(chipped.max_percent, full.max_percent);
    assert_eq!(chipped.ko_probability, 1.0);
    assert_eq!(chipped.guaranteed_ko_hits, Some(1));
    assert!(chipped.probable_ko.is_empty());
}
