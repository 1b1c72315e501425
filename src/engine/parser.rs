/// Entry point: evaluates a whole expression and checks for leftovers.
pub mod core;

/// Additive and multiplicative tiers.
///
/// Implements the left-associative loops for `+ -` and `* /`.
pub mod binary;

/// Primary operands.
///
/// Numbers, parenthesised sub-expressions and negated operands.
pub mod unary;
