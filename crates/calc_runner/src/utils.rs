use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use poke_calc::{CalcConfig, Calculator, CombatantState, GameData, MoveInput};

use crate::models::{CalcRequest, MoveSpec};

/// Flags every subcommand takes.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Game-data JSON (default: data/dex.json in the workspace)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Request JSON with attacker, defender, move(s) and field
    #[arg(short, long)]
    pub request: PathBuf,

    /// Calculator configuration JSON (default: built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Everything a subcommand needs, loaded and validated.
pub struct Session {
    pub data: GameData,
    pub config: CalcConfig,
    pub request: CalcRequest,
}

impl Session {
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let data_path = match &args.data {
            Some(path) => path.clone(),
            None => find_project_root()?.join("data").join("dex.json"),
        };
        let data = GameData::from_path(&data_path)
            .with_context(|| format!("failed to load game data from {}", data_path.display()))?;
        debug!(path = %data_path.display(), species = data.species_count(), "game data loaded");

        let config = match &args.config {
            Some(path) => read_json::<CalcConfig>(path, "config")?,
            None => CalcConfig::default(),
        };
        let request = read_json::<CalcRequest>(&args.request, "request")?;

        Ok(Self {
            data,
            config,
            request,
        })
    }

    pub fn calculator(&self) -> Result<Calculator<'_>> {
        Calculator::with_config(&self.data, self.config).context("invalid calculator config")
    }

    pub fn combatants(&self) -> Result<(CombatantState, CombatantState)> {
        let attacker = self
            .request
            .attacker
            .build(&self.data)
            .context("invalid attacker")?;
        let defender = self
            .request
            .defender
            .build(&self.data)
            .context("invalid defender")?;
        Ok((attacker, defender))
    }

    /// The single `move` of the request.
    pub fn single_move(&self) -> Result<MoveInput> {
        match &self.request.mv {
            Some(spec) => self.resolve(spec),
            None => bail!("request has no \"move\""),
        }
    }

    /// The `moves` list of the request, falling back to `move`.
    pub fn move_list(&self) -> Result<Vec<MoveInput>> {
        let specs: Vec<&MoveSpec> = if self.request.moves.is_empty() {
            self.request.mv.iter().collect()
        } else {
            self.request.moves.iter().collect()
        };
        if specs.is_empty() {
            bail!("request has no \"moves\"");
        }
        specs.into_iter().map(|spec| self.resolve(spec)).collect()
    }

    fn resolve(&self, spec: &MoveSpec) -> Result<MoveInput> {
        let request = spec.to_request();
        request
            .resolve(&self.data)
            .with_context(|| format!("invalid move '{}'", request.id))
    }
}

pub fn find_project_root() -> Result<PathBuf> {
    let start = std::env::current_dir().context("cannot read the current directory")?;
    let mut dir = start.clone();
    loop {
        if dir.join("data").join("dex.json").exists() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Ok(start);
        }
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {what} file {}", path.display()))
}

pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
