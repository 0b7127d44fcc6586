// src/checker.rs
//! Call-site validation against registered signatures.
//!
//! Each validation is a pure function of `(signature, call site)`: no state
//! survives the call, so validating the same site twice yields identical
//! verdicts. Violations accumulate into the verdict rather than
//! short-circuiting, so one call site surfaces every problem at once. The
//! one exception is arity: at the wrong arity the positional pairing of
//! arguments to parameters is meaningless, so per-parameter checks are
//! suppressed and the verdict carries the arity error alone.

use log::trace;

use reify_types::{CallSite, TypeArgKind};

use crate::error::{CheckResult, ReifyError};
use crate::registry::{CallableSignature, SignatureRegistry};

/// Outcome of validating a single call site.
///
/// `ok` is true exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub ok: bool,
    pub errors: Vec<ReifyError>,
}

impl Verdict {
    /// A passing verdict with no errors.
    pub fn pass() -> Self {
        Verdict { ok: true, errors: Vec::new() }
    }

    fn from_errors(errors: Vec<ReifyError>) -> Self {
        Verdict { ok: errors.is_empty(), errors }
    }
}

/// Validates a call site against the registry.
///
/// Propagates `UnknownCallable` if the callee was never registered; that is
/// an upstream resolution bug, not a property of the call's type arguments,
/// so it is not folded into a verdict.
pub fn validate_call(registry: &SignatureRegistry, site: &CallSite) -> CheckResult<Verdict> {
    let signature = registry.lookup(site.callee, site.span)?;
    Ok(validate_against(signature, site))
}

/// Validates a call site against an already-resolved signature.
pub fn validate_against(signature: &CallableSignature, site: &CallSite) -> Verdict {
    let expected = signature.type_params.len();
    let got = site.type_args.len();

    trace!(
        "validating call to `{}` ({} type args against {} params)",
        site.callee_name,
        got,
        expected
    );

    // An empty argument list means "omitted", which step 2 judges per
    // parameter. A non-empty list must match the declared count exactly.
    if got > 0 && got != expected {
        return Verdict::from_errors(vec![ReifyError::ArityMismatch {
            callable: signature.name.clone(),
            expected,
            got,
            span: site.span,
        }]);
    }

    let mut errors = Vec::new();
    for (index, param) in signature.type_params.iter().enumerate() {
        if site.type_args_omitted() {
            // Omission is legal for erased parameters only.
            if param.reified {
                errors.push(ReifyError::MissingReifiedArgument {
                    param: param.name.clone(),
                    callable: signature.name.clone(),
                    span: site.span,
                });
            }
            continue;
        }

        let arg = &site.type_args[index];
        if param.reified {
            // Erasure must not flow into a reified slot: the slot requires a
            // type recoverable at runtime, and an erased enclosing parameter
            // has no runtime representation. A forwarded *reified* parameter
            // is recoverable and passes.
            if let TypeArgKind::Param { name, reified: false } = &arg.kind {
                errors.push(ReifyError::ErasedArgumentForReifiedParam {
                    param: param.name.clone(),
                    forwarded: name.clone(),
                    span: arg.span,
                });
            }
        } else if arg.reify_marker {
            // The call-site marker promises runtime recoverability an erased
            // parameter cannot provide.
            errors.push(ReifyError::ReifyMarkerOnErasedParam {
                param: param.name.clone(),
                span: arg.span,
            });
        }
    }

    Verdict::from_errors(errors)
}
