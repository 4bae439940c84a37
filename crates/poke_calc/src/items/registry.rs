use phf::phf_map;

use crate::items::hooks::ItemHooks;
use crate::items::implementations::*;

/// Damage rules keyed by canonical item id.
pub static ITEM_REGISTRY: phf::Map<&'static str, ItemHooks> = phf_map! {
    // =========================================================================
    // Base power
    // =========================================================================
    "muscleband" => ItemHooks {
        on_base_power: Some(muscle_band),
        ..ItemHooks::NONE
    },
    "wiseglasses" => ItemHooks {
        on_base_power: Some(wise_glasses),
        ..ItemHooks::NONE
    },
    "punchingglove" => ItemHooks {
        on_base_power: Some(punching_glove),
        ..ItemHooks::NONE
    },

    // =========================================================================
    // Attack / Defense
    // =========================================================================
    "choiceband" => ItemHooks {
        on_attack: Some(choice_band),
        ..ItemHooks::NONE
    },
    "choicespecs" => ItemHooks {
        on_attack: Some(choice_specs),
        ..ItemHooks::NONE
    },
    "lightball" => ItemHooks {
        on_attack: Some(light_ball),
        ..ItemHooks::NONE
    },
    "thickclub" => ItemHooks {
        on_attack: Some(thick_club),
        ..ItemHooks::NONE
    },
    "assaultvest" => ItemHooks {
        on_defense: Some(assault_vest),
        ..ItemHooks::NONE
    },
    "eviolite" => ItemHooks {
        on_defense: Some(eviolite),
        ..ItemHooks::NONE
    },
    "metalpowder" => ItemHooks {
        on_defense: Some(metal_powder),
        ..ItemHooks::NONE
    },

    // =========================================================================
    // Final
    // =========================================================================
    "lifeorb" => ItemHooks {
        on_attacker_final_mod: Some(life_orb),
        ..ItemHooks::NONE
    },
    "expertbelt" => ItemHooks {
        on_attacker_final_mod: Some(expert_belt),
        ..ItemHooks::NONE
    },

    // =========================================================================
    // Grounding / immunity
    // =========================================================================
    "ringtarget" => ItemHooks {
        ignores_type_immunity: true,
        ..ItemHooks::NONE
    },
    "airballoon" => ItemHooks {
        levitates: true,
        ..ItemHooks::NONE
    },
    "ironball" => ItemHooks {
        grounds_holder: true,
        ..ItemHooks::NONE
    },
};

/// Any item whose data names a `boost_type`.
pub static TYPE_BOOST_HOOKS: ItemHooks = ItemHooks {
    on_base_power: Some(type_boost),
    ..ItemHooks::NONE
};

/// Any item whose data names a `resist_type`.
pub static RESIST_BERRY_HOOKS: ItemHooks = ItemHooks {
    on_defender_final_mod: Some(resist_berry),
    ..ItemHooks::NONE
};
