use anyhow::Result;
use clap::Args;

use crate::utils::{print_json, CommonArgs, Session};

#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: CalcArgs) -> Result<()> {
    let session = Session::load(&args.common)?;
    let (attacker, defender) = session.combatants()?;
    let mv = session.single_move()?;

    let result = session
        .calculator()?
        .calculate(&attacker, &defender, &mv, &session.request.field)?;
    print_json(&result, args.common.pretty)
}
