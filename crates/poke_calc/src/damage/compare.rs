//! Ranking several moves against the same target.

use std::cmp::Ordering;

use tracing::debug;

use super::{calculate_damage, DamageResult};
use crate::config::CalcConfig;
use crate::data::GameData;
use crate::error::Result;
use crate::field::FieldConditions;
use crate::moves::MoveInput;
use crate::state::CombatantState;

/// Calculate every move independently and rank the results.
///
/// Any failing move fails the whole comparison.
pub fn compare_moves(
    data: &GameData,
    config: &CalcConfig,
    attacker: &CombatantState,
    defender: &CombatantState,
    moves: &[MoveInput],
    field: &FieldConditions,
) -> Result<Vec<DamageResult>> {
    debug!(moves = moves.len(), "comparing moves");
    let mut results = moves
        .iter()
        .map(|mv| calculate_damage(data, config, attacker, defender, mv, field))
        .collect::<Result<Vec<_>>>()?;
    rank(&mut results);
    Ok(results)
}

/// Stable sort: descending average, then ascending guaranteed-KO hits with
/// "no guaranteed KO" last.
pub fn rank(results: &mut [DamageResult]) {
    results.sort_by(by_rank);
}

pub fn by_rank(a: &DamageResult, b: &DamageResult) -> Ordering {
    b.average
        .total_cmp(&a.average)
        .then_with(|| hits_key(a).cmp(&hits_key(b)))
}

fn hits_key(result: &DamageResult) -> u16 {
    result.guaranteed_ko_hits.map_or(u16::MAX, u16::from)
}
