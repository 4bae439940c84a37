use phf::phf_map;

use crate::abilities::hooks::AbilityHooks;
use crate::abilities::implementations::{
    damage_modifiers, final_modifiers, immunity, stat_modifiers, type_changers,
};
use crate::damage::Modifier;

/// Damage rules keyed by canonical ability id.
pub static ABILITY_REGISTRY: phf::Map<&'static str, AbilityHooks> = phf_map! {
    // =========================================================================
    // Type Changers (on_modify_type + 1.2x on_base_power)
    // =========================================================================
    "aerilate" => AbilityHooks {
        on_modify_type: Some(type_changers::aerilate),
        on_base_power: Some(type_changers::type_change_boost),
        ..AbilityHooks::NONE
    },
    "pixilate" => AbilityHooks {
        on_modify_type: Some(type_changers::pixilate),
        on_base_power: Some(type_changers::type_change_boost),
        ..AbilityHooks::NONE
    },
    "refrigerate" => AbilityHooks {
        on_modify_type: Some(type_changers::refrigerate),
        on_base_power: Some(type_changers::type_change_boost),
        ..AbilityHooks::NONE
    },
    "galvanize" => AbilityHooks {
        on_modify_type: Some(type_changers::galvanize),
        on_base_power: Some(type_changers::type_change_boost),
        ..AbilityHooks::NONE
    },
    "normalize" => AbilityHooks {
        on_modify_type: Some(type_changers::normalize),
        on_base_power: Some(type_changers::type_change_boost),
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // Base Power Modifiers (on_base_power)
    // =========================================================================
    "technician" => AbilityHooks {
        on_base_power: Some(damage_modifiers::technician),
        ..AbilityHooks::NONE
    },
    "ironfist" => AbilityHooks {
        on_base_power: Some(damage_modifiers::iron_fist),
        ..AbilityHooks::NONE
    },
    "toughclaws" => AbilityHooks {
        on_base_power: Some(damage_modifiers::tough_claws),
        ..AbilityHooks::NONE
    },
    "strongjaw" => AbilityHooks {
        on_base_power: Some(damage_modifiers::strong_jaw),
        ..AbilityHooks::NONE
    },
    "megalauncher" => AbilityHooks {
        on_base_power: Some(damage_modifiers::mega_launcher),
        ..AbilityHooks::NONE
    },
    "sharpness" => AbilityHooks {
        on_base_power: Some(damage_modifiers::sharpness),
        ..AbilityHooks::NONE
    },
    "sheerforce" => AbilityHooks {
        on_base_power: Some(damage_modifiers::sheer_force),
        ..AbilityHooks::NONE
    },
    "reckless" => AbilityHooks {
        on_base_power: Some(damage_modifiers::reckless),
        ..AbilityHooks::NONE
    },
    "punkrock" => AbilityHooks {
        on_base_power: Some(damage_modifiers::punk_rock),
        on_defender_final_mod: Some(final_modifiers::punk_rock),
        ..AbilityHooks::NONE
    },
    "sandforce" => AbilityHooks {
        on_base_power: Some(damage_modifiers::sand_force),
        ..AbilityHooks::NONE
    },
    "analytic" => AbilityHooks {
        on_base_power: Some(damage_modifiers::analytic),
        ..AbilityHooks::NONE
    },
    "rivalry" => AbilityHooks {
        on_base_power: Some(damage_modifiers::rivalry),
        ..AbilityHooks::NONE
    },
    "supremeoverlord" => AbilityHooks {
        on_base_power: Some(damage_modifiers::supreme_overlord),
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // Attack Modifiers (on_attack)
    // =========================================================================
    "hugepower" => AbilityHooks {
        on_attack: Some(stat_modifiers::huge_power),
        ..AbilityHooks::NONE
    },
    "purepower" => AbilityHooks {
        on_attack: Some(stat_modifiers::huge_power),
        ..AbilityHooks::NONE
    },
    "hustle" => AbilityHooks {
        on_attack: Some(stat_modifiers::hustle),
        ..AbilityHooks::NONE
    },
    "guts" => AbilityHooks {
        on_attack: Some(stat_modifiers::guts),
        ignores_burn: true,
        ..AbilityHooks::NONE
    },
    "gorillatactics" => AbilityHooks {
        on_attack: Some(stat_modifiers::gorilla_tactics),
        ..AbilityHooks::NONE
    },
    "solarpower" => AbilityHooks {
        on_attack: Some(stat_modifiers::solar_power),
        ..AbilityHooks::NONE
    },
    "blaze" => AbilityHooks {
        on_attack: Some(stat_modifiers::blaze),
        ..AbilityHooks::NONE
    },
    "overgrow" => AbilityHooks {
        on_attack: Some(stat_modifiers::overgrow),
        ..AbilityHooks::NONE
    },
    "torrent" => AbilityHooks {
        on_attack: Some(stat_modifiers::torrent),
        ..AbilityHooks::NONE
    },
    "swarm" => AbilityHooks {
        on_attack: Some(stat_modifiers::swarm),
        ..AbilityHooks::NONE
    },
    "flashfire" => AbilityHooks {
        on_attack: Some(stat_modifiers::flash_fire),
        on_type_immunity: Some(immunity::fire),
        ..AbilityHooks::NONE
    },
    "defeatist" => AbilityHooks {
        on_attack: Some(stat_modifiers::defeatist),
        ..AbilityHooks::NONE
    },
    "waterbubble" => AbilityHooks {
        on_attack: Some(stat_modifiers::water_bubble),
        on_foe_attack: Some(stat_modifiers::water_bubble_defense),
        ..AbilityHooks::NONE
    },
    "transistor" => AbilityHooks {
        on_attack: Some(stat_modifiers::transistor),
        ..AbilityHooks::NONE
    },
    "dragonsmaw" => AbilityHooks {
        on_attack: Some(stat_modifiers::dragons_maw),
        ..AbilityHooks::NONE
    },
    "steelworker" => AbilityHooks {
        on_attack: Some(stat_modifiers::steelworker),
        ..AbilityHooks::NONE
    },
    "rockypayload" => AbilityHooks {
        on_attack: Some(stat_modifiers::rocky_payload),
        ..AbilityHooks::NONE
    },
    "orichalcumpulse" => AbilityHooks {
        on_attack: Some(stat_modifiers::orichalcum_pulse),
        ..AbilityHooks::NONE
    },
    "hadronengine" => AbilityHooks {
        on_attack: Some(stat_modifiers::hadron_engine),
        ..AbilityHooks::NONE
    },
    "protosynthesis" => AbilityHooks {
        on_attack: Some(stat_modifiers::protosynthesis_attack),
        on_defense: Some(stat_modifiers::protosynthesis_defense),
        ..AbilityHooks::NONE
    },
    "quarkdrive" => AbilityHooks {
        on_attack: Some(stat_modifiers::quark_drive_attack),
        on_defense: Some(stat_modifiers::quark_drive_defense),
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // Foe Attack Modifiers (on_foe_attack)
    // =========================================================================
    "thickfat" => AbilityHooks {
        on_foe_attack: Some(stat_modifiers::thick_fat),
        ..AbilityHooks::NONE
    },
    "heatproof" => AbilityHooks {
        on_foe_attack: Some(stat_modifiers::heatproof),
        ..AbilityHooks::NONE
    },
    "purifyingsalt" => AbilityHooks {
        on_foe_attack: Some(stat_modifiers::purifying_salt),
        ..AbilityHooks::NONE
    },
    "tabletsofruin" => AbilityHooks {
        on_foe_attack: Some(stat_modifiers::tablets_of_ruin),
        unbreakable: true,
        ..AbilityHooks::NONE
    },
    "vesselofruin" => AbilityHooks {
        on_foe_attack: Some(stat_modifiers::vessel_of_ruin),
        unbreakable: true,
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // Defense Modifiers (on_defense / on_foe_defense)
    // =========================================================================
    "furcoat" => AbilityHooks {
        on_defense: Some(stat_modifiers::fur_coat),
        ..AbilityHooks::NONE
    },
    "marvelscale" => AbilityHooks {
        on_defense: Some(stat_modifiers::marvel_scale),
        ..AbilityHooks::NONE
    },
    "grasspelt" => AbilityHooks {
        on_defense: Some(stat_modifiers::grass_pelt),
        ..AbilityHooks::NONE
    },
    "swordofruin" => AbilityHooks {
        on_foe_defense: Some(stat_modifiers::sword_of_ruin),
        ..AbilityHooks::NONE
    },
    "beadsofruin" => AbilityHooks {
        on_foe_defense: Some(stat_modifiers::beads_of_ruin),
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // Type Immunity
    // =========================================================================
    "levitate" => AbilityHooks {
        levitates: true,
        ..AbilityHooks::NONE
    },
    "voltabsorb" => AbilityHooks {
        on_type_immunity: Some(immunity::electric),
        ..AbilityHooks::NONE
    },
    "lightningrod" => AbilityHooks {
        on_type_immunity: Some(immunity::electric),
        ..AbilityHooks::NONE
    },
    "motordrive" => AbilityHooks {
        on_type_immunity: Some(immunity::electric),
        ..AbilityHooks::NONE
    },
    "waterabsorb" => AbilityHooks {
        on_type_immunity: Some(immunity::water),
        ..AbilityHooks::NONE
    },
    "stormdrain" => AbilityHooks {
        on_type_immunity: Some(immunity::water),
        ..AbilityHooks::NONE
    },
    "dryskin" => AbilityHooks {
        on_type_immunity: Some(immunity::water),
        on_defender_final_mod: Some(final_modifiers::dry_skin),
        ..AbilityHooks::NONE
    },
    "wellbakedbody" => AbilityHooks {
        on_type_immunity: Some(immunity::fire),
        ..AbilityHooks::NONE
    },
    "sapsipper" => AbilityHooks {
        on_type_immunity: Some(immunity::grass),
        ..AbilityHooks::NONE
    },
    "eartheater" => AbilityHooks {
        on_type_immunity: Some(immunity::ground),
        ..AbilityHooks::NONE
    },
    "wonderguard" => AbilityHooks {
        on_type_immunity: Some(immunity::wonder_guard),
        ..AbilityHooks::NONE
    },
    "scrappy" => AbilityHooks {
        on_ignore_immunity: Some(immunity::scrappy),
        ..AbilityHooks::NONE
    },
    "mindseye" => AbilityHooks {
        on_ignore_immunity: Some(immunity::scrappy),
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // STAB
    // =========================================================================
    "adaptability" => AbilityHooks {
        on_modify_stab: Some(adaptability),
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // Attacker Final Modifiers (on_attacker_final_mod)
    // =========================================================================
    "tintedlens" => AbilityHooks {
        on_attacker_final_mod: Some(final_modifiers::tinted_lens),
        ..AbilityHooks::NONE
    },
    "sniper" => AbilityHooks {
        on_attacker_final_mod: Some(final_modifiers::sniper),
        ..AbilityHooks::NONE
    },
    "neuroforce" => AbilityHooks {
        on_attacker_final_mod: Some(final_modifiers::neuroforce),
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // Defender Final Modifiers (on_defender_final_mod)
    // =========================================================================
    "multiscale" => AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::multiscale),
        ..AbilityHooks::NONE
    },
    "shadowshield" => AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::multiscale),
        unbreakable: true,
        ..AbilityHooks::NONE
    },
    "filter" => AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::filter),
        ..AbilityHooks::NONE
    },
    "solidrock" => AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::filter),
        ..AbilityHooks::NONE
    },
    "prismarmor" => AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::filter),
        unbreakable: true,
        ..AbilityHooks::NONE
    },
    "fluffy" => AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::fluffy),
        ..AbilityHooks::NONE
    },
    "icescales" => AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::ice_scales),
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // Flags
    // =========================================================================
    "moldbreaker" => AbilityHooks {
        ignores_target_ability: true,
        ..AbilityHooks::NONE
    },
    "teravolt" => AbilityHooks {
        ignores_target_ability: true,
        ..AbilityHooks::NONE
    },
    "turboblaze" => AbilityHooks {
        ignores_target_ability: true,
        ..AbilityHooks::NONE
    },
    "cloudnine" => AbilityHooks {
        suppresses_weather: true,
        unbreakable: true,
        ..AbilityHooks::NONE
    },
    "airlock" => AbilityHooks {
        suppresses_weather: true,
        unbreakable: true,
        ..AbilityHooks::NONE
    },
    "battlearmor" => AbilityHooks {
        prevents_crit: true,
        ..AbilityHooks::NONE
    },
    "shellarmor" => AbilityHooks {
        prevents_crit: true,
        ..AbilityHooks::NONE
    },
    "unaware" => AbilityHooks {
        ignores_stages: true,
        ..AbilityHooks::NONE
    },
    "heavymetal" => AbilityHooks {
        on_modify_weight: Some(heavy_metal),
        ..AbilityHooks::NONE
    },
    "lightmetal" => AbilityHooks {
        on_modify_weight: Some(light_metal),
        ..AbilityHooks::NONE
    },
};

/// Adaptability: a 1.5x same-type bonus becomes 2x.
fn adaptability(stab: Modifier) -> Modifier {
    if stab == Modifier::ONE_POINT_FIVE {
        Modifier::DOUBLE
    } else {
        stab
    }
}

fn heavy_metal(weight_kg: f32) -> f32 {
    weight_kg * 2.0
}

/// Halved, but never below 0.1 kg.
fn light_metal(weight_kg: f32) -> f32 {
    (weight_kg / 2.0).max(0.1)
}
