use anyhow::Result;
use clap::Args;

use crate::utils::{print_json, CommonArgs, Session};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let session = Session::load(&args.common)?;
    let (attacker, defender) = session.combatants()?;
    let mv = session.single_move()?;

    let analysis = session
        .calculator()?
        .analyze(&attacker, &defender, &mv, &session.request.field)?;
    print_json(&analysis, args.common.pretty)
}
