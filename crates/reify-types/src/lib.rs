//! Resolved input data for the reify checker.
//!
//! This crate defines what the upstream parser/resolver hands to
//! `reify-check`: callable declarations with their type-parameter lists, and
//! call sites with the type arguments the caller supplied. Everything here is
//! plain data — already parsed, already resolved, with source positions bound
//! by the upstream phase. The checker interprets none of it beyond what the
//! reification contract needs.

pub mod types;

pub use types::{
    CallSite, CallableDecl, CallableId, TypeArg, TypeArgKind, TypeParamDef, ValueArg,
};
