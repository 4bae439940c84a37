//! Held-item rules and registry.

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::ItemHooks;
pub use registry::ITEM_REGISTRY;

use crate::core_data::ItemData;
use crate::data::GameData;
use crate::error::{CalcError, Result};
use registry::{RESIST_BERRY_HOOKS, TYPE_BOOST_HOOKS};

static INERT: ItemHooks = ItemHooks::NONE;

/// An item resolved for one calculation.
#[derive(Clone, Copy, Debug)]
pub struct HeldItem<'a> {
    pub id: &'a str,
    pub data: &'a ItemData,
    pub hooks: &'static ItemHooks,
}

/// Resolve a held item to its rules.
///
/// Registered items use their own entry; items whose data names a boosted or
/// resisted type use the generic rule. Anything else is inert unless it
/// declares a damage effect, which is `UnsupportedMechanic`.
pub fn lookup<'a>(data: &'a GameData, id: Option<&'a str>) -> Result<Option<HeldItem<'a>>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let item = data.item(id)?;

    let hooks = if let Some(hooks) = ITEM_REGISTRY.get(id) {
        hooks
    } else if item.boost_type.is_some() {
        &TYPE_BOOST_HOOKS
    } else if item.resist_type.is_some() {
        &RESIST_BERRY_HOOKS
    } else if item.damage_effect {
        return Err(CalcError::unsupported(format!(
            "item '{}' affects damage but has no rule",
            item.name
        )));
    } else {
        &INERT
    };
    Ok(Some(HeldItem {
        id,
        data: item,
        hooks,
    }))
}
