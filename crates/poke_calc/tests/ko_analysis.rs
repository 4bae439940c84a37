//! KO analysis through the public API.

mod common;

use pretty_assertions::assert_eq;

use common::*;
use poke_calc::damage::ko;
use poke_calc::{CalcConfig, Calculator, CombatantConfig, DamageDistribution, FieldConditions, MoveInput};

fn distribution(rolls: [u16; 16]) -> DamageDistribution {
    serde_json::from_value(serde_json::json!(rolls)).unwrap()
}

fn linear(start: u16) -> DamageDistribution {
    distribution(std::array::from_fn(|i| start + i as u16))
}

#[test]
fn test_one_hit_probability_by_hand() {
    // 85..=100 against 93 HP: rolls 93..=100 KO, 8 of 16.
    let rolls = linear(85);
    assert_eq!(ko::ko_probability(&rolls, 93), 0.5);
    assert_eq!(ko::ko_chance(&rolls, 93, 1), 0.5);
    assert_eq!(ko::ko_probability(&rolls, 101), 0.0);
    assert_eq!(ko::ko_probability(&rolls, 85), 1.0);
}

#[test]
fn test_two_hit_convolution_by_hand() {
    // 10..=25 against 48 HP: sums of 48 (3 pairs), 49 (2) and 50 (1).
    let rolls = linear(10);
    assert_eq!(ko::ko_chance(&rolls, 48, 2), 6.0 / 256.0);
    // Every pair reaches 20, only (25, 25) reaches 50.
    assert_eq!(ko::ko_chance(&rolls, 20, 2), 1.0);
    assert_eq!(ko::ko_chance(&rolls, 50, 2), 1.0 / 256.0);
    assert_eq!(ko::ko_chance(&rolls, 51, 2), 0.0);
}

#[test]
fn test_unordered_distribution_does_not_parse() {
    let mut rolls: [u16; 16] = std::array::from_fn(|i| 40 + i as u16);
    rolls.swap(3, 12);
    assert!(serde_json::from_value::<DamageDistribution>(serde_json::json!(rolls)).is_err());
    assert!(DamageDistribution::try_from(rolls).is_err());
}

#[test]
fn test_guaranteed_hits_brute_force() {
    let rolls = linear(30);
    for hp in 1..=200u16 {
        let expected = (1..=4u8).find(|&n| n as u32 * 30 >= hp as u32);
        assert_eq!(ko::guaranteed_ko_hits(&rolls, hp, 4), expected, "hp {hp}");
    }
}

#[test]
fn test_analysis_matches_enumeration() {
    let data = dex();
    let attacker = build(&data, CombatantConfig::new("garchomp"));
    let defender = build(&data, CombatantConfig::new("blissey"));
    let mv = MoveInput::from_data(&data, "earthquake").unwrap();

    let analysis = Calculator::new(&data)
        .analyze(&attacker, &defender, &mv, &FieldConditions::default())
        .unwrap();
    let result = &analysis.result;
    let hp = result.defender_hp as u32;

    let mut two_hit = 0u32;
    for a in result.rolls.iter() {
        for b in result.rolls.iter() {
            if *a as u32 + *b as u32 >= hp {
                two_hit += 1;
            }
        }
    }
    assert_eq!(analysis.ko_table[&2], two_hit as f64 / 256.0);
    assert_eq!(analysis.ko_table[&1], result.ko_probability);
}

#[test]
fn test_analysis_shape() {
    let data = dex();
    let attacker = build(&data, CombatantConfig::new("conkeldurr"));
    let defender = build(&data, CombatantConfig::new("tyranitar"));
    let mv = MoveInput::from_data(&data, "closecombat").unwrap();

    let config = CalcConfig::default().with_ko_hit_bound(6);
    let analysis = Calculator::with_config(&data, config)
        .unwrap()
        .analyze(&attacker, &defender, &mv, &FieldConditions::default())
        .unwrap();

    assert_eq!(analysis.ko_table.keys().copied().collect::<Vec<_>>(), (1..=6).collect::<Vec<u8>>());
    assert!(analysis.ko_table.values().zip(analysis.ko_table.values().skip(1)).all(|(a, b)| a <= b));
    assert_eq!(analysis.distribution.values().map(|&c| c as u32).sum::<u32>(), 16);
    assert_eq!(analysis.min_percent, analysis.result.min_percent);
    assert_eq!(
        analysis.average_percent,
        analysis.result.average * 100.0 / analysis.result.defender_max_hp as f64
    );
}

#[test]
fn test_probable_ko_stops_before_guaranteed() {
    let data = dex();
    let attacker = build(&data, CombatantConfig::new("garchomp"));
    let defender = build(&data, CombatantConfig::new("heatran"));
    let mv = MoveInput::from_data(&data, "earthquake").unwrap();

    let result = poke_calc::calculate(&data, &attacker, &defender, &mv, &FieldConditions::default())
        .unwrap();

    match result.guaranteed_ko_hits {
        Some(n) => {
            let expected: Vec<u8> = (1..n).collect();
            assert_eq!(result.probable_ko.keys().copied().collect::<Vec<_>>(), expected);
        }
        None => assert_eq!(result.probable_ko.len(), 4),
    }
}
