//! Domain Policies
//!
//! Rules that decide whether a mutation may proceed.

mod mutation_guard;

pub use mutation_guard::{
    GuardMode, GuardViolation, Mutation, MutationGuard, PermissiveGuard, StrictStatusGuard,
};
