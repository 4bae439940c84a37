pub mod damage_modifiers;
pub mod final_modifiers;
pub mod immunity;
pub mod stat_modifiers;
pub mod type_changers;
