//! Reified-generics validation for resolved call sites.
//!
//! This crate enforces the reification contract: a callable's type parameter
//! may be declared *reified*, meaning its concrete type argument must be
//! recoverable at runtime. At every call site, a type argument must then be
//! supplied — and must itself be runtime-recoverable — exactly when the
//! parameter requires it. Erased parameters place no such requirement.
//!
//! Input comes pre-resolved from an upstream phase (`reify-types`); output is
//! a [`Verdict`] per call site with structured [`ReifyError`] records for an
//! external reporter to render. Checking a unit is two sequential phases:
//! register every declaration, then validate every call site. Neither phase
//! stops at the first failure.

pub mod checker;
pub mod error;
pub mod registry;

pub use checker::{validate_against, validate_call, Verdict};
pub use error::{CheckResult, ReifyError};
pub use registry::{CallableSignature, SignatureRegistry};

use log::debug;
use reify_types::{CallSite, CallableDecl};

/// Aggregate result of checking one unit of declarations and call sites.
///
/// `verdicts` holds one entry per call site whose callee resolved, in input
/// order. `errors` holds registration failures and unresolved callees —
/// problems with the unit itself rather than with any call's type arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedUnit {
    pub verdicts: Vec<Verdict>,
    pub errors: Vec<ReifyError>,
}

impl CheckedUnit {
    /// True when every declaration registered, every callee resolved, and
    /// every call site passed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.verdicts.iter().all(|v| v.ok)
    }
}

/// Checks a unit: registers `decls`, then validates `sites` against them.
///
/// Phase 1 registers declarations in order; a failed registration aborts that
/// declaration only, its error collected, the rest still processed. Phase 2
/// validates call sites in order; an unresolvable callee is collected into
/// `errors` and the run continues. Failing verdicts never stop the run
/// either — the external run-driver decides what to do with them.
pub fn check_unit(decls: Vec<CallableDecl>, sites: &[CallSite]) -> CheckedUnit {
    let mut registry = SignatureRegistry::new();
    let mut errors = Vec::new();

    debug!("registration phase: {} declaration(s)", decls.len());
    for decl in decls {
        if let Err(err) = registry.register(decl) {
            errors.push(err);
        }
    }
    debug!(
        "registration phase complete: {} registered, {} error(s)",
        registry.len(),
        errors.len()
    );

    debug!("validation phase: {} call site(s)", sites.len());
    let mut verdicts = Vec::with_capacity(sites.len());
    for site in sites {
        match validate_call(&registry, site) {
            Ok(verdict) => verdicts.push(verdict),
            Err(err) => errors.push(err),
        }
    }

    CheckedUnit { verdicts, errors }
}
