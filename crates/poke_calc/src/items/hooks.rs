use crate::abilities::hooks::OnModifier;

/// Damage rules for one held item. Hooks see the holder from its role:
/// `on_base_power`, `on_attack` and `on_attacker_final_mod` run for the
/// attacker's item, the rest for the defender's.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemHooks {
    pub on_base_power: Option<OnModifier>,
    pub on_attack: Option<OnModifier>,
    pub on_defense: Option<OnModifier>,
    pub on_attacker_final_mod: Option<OnModifier>,
    pub on_defender_final_mod: Option<OnModifier>,

    /// Holder loses its type immunities (Ring Target).
    pub ignores_type_immunity: bool,
    /// Holder floats (Air Balloon).
    pub levitates: bool,
    /// Holder is grounded (Iron Ball).
    pub grounds_holder: bool,
}

impl ItemHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_base_power: None,
        on_attack: None,
        on_defense: None,
        on_attacker_final_mod: None,
        on_defender_final_mod: None,
        ignores_type_immunity: false,
        levitates: false,
        grounds_holder: false,
    };
}
