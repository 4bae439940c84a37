//! Type-changing ability implementations.
//!
//! The -ate abilities turn Normal moves into their own type; Normalize turns
//! every move Normal. Either way the changed move gets a 1.2x power boost.

use crate::damage::{DamageContext, Modifier};
use crate::types::Type;

// ============================================================================
// Aerilate: Normal -> Flying
// ============================================================================

pub fn aerilate(move_type: Type) -> Option<Type> {
    (move_type == Type::Normal).then_some(Type::Flying)
}

// ============================================================================
// Pixilate: Normal -> Fairy
// ============================================================================

pub fn pixilate(move_type: Type) -> Option<Type> {
    (move_type == Type::Normal).then_some(Type::Fairy)
}

// ============================================================================
// Refrigerate: Normal -> Ice
// ============================================================================

pub fn refrigerate(move_type: Type) -> Option<Type> {
    (move_type == Type::Normal).then_some(Type::Ice)
}

// ============================================================================
// Galvanize: Normal -> Electric
// ============================================================================

pub fn galvanize(move_type: Type) -> Option<Type> {
    (move_type == Type::Normal).then_some(Type::Electric)
}

// ============================================================================
// Normalize: Any type -> Normal
// ============================================================================

pub fn normalize(_move_type: Type) -> Option<Type> {
    Some(Type::Normal)
}

/// 1.2x for a move whose type the holder changed.
pub fn type_change_boost(ctx: &DamageContext) -> Option<Modifier> {
    ctx.type_changed.then_some(Modifier::ONE_POINT_TWO)
}
