use anyhow::Result;
use clap::Args;
use serde::Serialize;

use poke_calc::DamageResult;

use crate::utils::{print_json, CommonArgs, Session};

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print only the ranking (id, average, guaranteed hits)
    #[arg(long)]
    pub summary: bool,
}

#[derive(Serialize)]
struct RankEntry<'a> {
    rank: usize,
    move_id: &'a str,
    average: f64,
    min_percent: f64,
    max_percent: f64,
    guaranteed_ko_hits: Option<u8>,
}

impl<'a> RankEntry<'a> {
    fn new(rank: usize, result: &'a DamageResult) -> Self {
        Self {
            rank,
            move_id: &result.move_id,
            average: result.average,
            min_percent: result.min_percent,
            max_percent: result.max_percent,
            guaranteed_ko_hits: result.guaranteed_ko_hits,
        }
    }
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let session = Session::load(&args.common)?;
    let (attacker, defender) = session.combatants()?;
    let moves = session.move_list()?;

    let ranked = session
        .calculator()?
        .compare(&attacker, &defender, &moves, &session.request.field)?;

    if args.summary {
        let entries: Vec<RankEntry> = ranked
            .iter()
            .enumerate()
            .map(|(i, result)| RankEntry::new(i + 1, result))
            .collect();
        print_json(&entries, args.common.pretty)
    } else {
        print_json(&ranked, args.common.pretty)
    }
}
