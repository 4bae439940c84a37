use crate::damage::{DamageContext, Modifier};
use crate::types::Type;

/// Contributes one multiplier to a 4096-scale chain, or nothing.
///
/// The hook is called from the holder's side: attacker hooks see the holder
/// as `ctx.attacker`, defender hooks as `ctx.defender`.
pub type OnModifier = fn(ctx: &DamageContext) -> Option<Modifier>;

/// Rewrites the move's type before anything else is resolved.
pub type OnModifyType = fn(move_type: Type) -> Option<Type>;

/// Holder is immune to the hit, given the chart effectiveness so far.
pub type OnTypeImmunity = fn(ctx: &DamageContext, effectiveness: u8) -> bool;

/// Holder's attacks ignore a chart immunity of `defending` to `attacking`.
pub type OnIgnoreImmunity = fn(attacking: Type, defending: Type) -> bool;

/// Adjusts a same-type bonus that already applies.
pub type OnModifyStab = fn(stab: Modifier) -> Modifier;

/// Holder's weight in kg, for weight-based moves.
pub type OnModifyWeight = fn(weight_kg: f32) -> f32;

#[derive(Clone, Copy, Debug, Default)]
pub struct AbilityHooks {
    pub on_modify_type: Option<OnModifyType>,
    /// Attacker: base-power chain.
    pub on_base_power: Option<OnModifier>,
    /// Attacker: own attacking stat.
    pub on_attack: Option<OnModifier>,
    /// Defender: the attacker's attacking stat (Thick Fat, Ruin).
    pub on_foe_attack: Option<OnModifier>,
    /// Defender: own defending stat.
    pub on_defense: Option<OnModifier>,
    /// Attacker: the defender's defending stat (Sword of Ruin).
    pub on_foe_defense: Option<OnModifier>,
    /// Defender.
    pub on_type_immunity: Option<OnTypeImmunity>,
    /// Attacker.
    pub on_ignore_immunity: Option<OnIgnoreImmunity>,
    /// Attacker.
    pub on_modify_stab: Option<OnModifyStab>,
    /// Either side.
    pub on_modify_weight: Option<OnModifyWeight>,
    pub on_attacker_final_mod: Option<OnModifier>,
    pub on_defender_final_mod: Option<OnModifier>,

    /// Not grounded (Ground immunity, terrain).
    pub levitates: bool,
    /// Suppresses the target's breakable abilities (Mold Breaker).
    pub ignores_target_ability: bool,
    /// Survives Mold Breaker.
    pub unbreakable: bool,
    /// Weather has no effect while this ability is out (Cloud Nine).
    pub suppresses_weather: bool,
    /// Burn does not halve the holder's physical damage.
    pub ignores_burn: bool,
    /// Holder cannot be critically hit.
    pub prevents_crit: bool,
    /// Ignores the other side's stat stages (Unaware).
    pub ignores_stages: bool,
}

impl AbilityHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_modify_type: None,
        on_base_power: None,
        on_attack: None,
        on_foe_attack: None,
        on_defense: None,
        on_foe_defense: None,
        on_type_immunity: None,
        on_ignore_immunity: None,
        on_modify_stab: None,
        on_modify_weight: None,
        on_attacker_final_mod: None,
        on_defender_final_mod: None,
        levitates: false,
        ignores_target_ability: false,
        unbreakable: false,
        suppresses_weather: false,
        ignores_burn: false,
        prevents_crit: false,
        ignores_stages: false,
    };
}
