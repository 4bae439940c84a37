pub mod analyze;
pub mod calc;
pub mod compare;
