// src/registry.rs
//! Stores one signature per declared callable, addressable by id.

use miette::SourceSpan;
use rustc_hash::{FxHashMap, FxHashSet};

use reify_types::{CallableDecl, CallableId, TypeParamDef};

use crate::error::{CheckResult, ReifyError};

/// A registered callable signature: the checker's stored form of a
/// declaration. Created at registration time; never mutated afterwards.
///
/// Invariant: `type_params` names are unique (enforced by
/// [`SignatureRegistry::register`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableSignature {
    pub id: CallableId,
    pub name: String,
    /// Type parameters in declaration order.
    pub type_params: Vec<TypeParamDef>,
    /// Source span of the declaration.
    pub span: SourceSpan,
}

impl CallableSignature {
    /// True if any parameter requires a runtime-recoverable type argument.
    pub fn has_reified_params(&self) -> bool {
        self.type_params.iter().any(|p| p.reified)
    }
}

/// Holds one [`CallableSignature`] per declared callable.
///
/// Write-once per id during the registration phase, read-only thereafter.
/// `register` calls must not interleave with reads; complete registration
/// before starting any lookup. After that the registry can be shared
/// read-only across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct SignatureRegistry {
    signatures: FxHashMap<CallableId, CallableSignature>,
}

impl SignatureRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration.
    ///
    /// Fails with `DuplicateDeclaration` if the id is already registered and
    /// with `DuplicateTypeParamName` if the declaration repeats a parameter
    /// name. A failed registration stores nothing.
    pub fn register(&mut self, decl: CallableDecl) -> CheckResult<()> {
        if let Some(existing) = self.signatures.get(&decl.id) {
            return Err(ReifyError::DuplicateDeclaration {
                callable: decl.name,
                span: decl.span,
                previous_span: existing.span,
            });
        }

        let mut seen = FxHashSet::default();
        for param in &decl.type_params {
            if !seen.insert(param.name.as_str()) {
                return Err(ReifyError::DuplicateTypeParamName {
                    name: param.name.clone(),
                    callable: decl.name.clone(),
                    span: param.span,
                });
            }
        }

        self.signatures.insert(
            decl.id,
            CallableSignature {
                id: decl.id,
                name: decl.name,
                type_params: decl.type_params,
                span: decl.span,
            },
        );
        Ok(())
    }

    /// Looks up a signature by callable id.
    ///
    /// `error_span` is the position (normally the call site) reported if the
    /// id was never registered.
    pub fn lookup(&self, id: CallableId, error_span: SourceSpan) -> CheckResult<&CallableSignature> {
        self.signatures.get(&id).ok_or_else(|| ReifyError::UnknownCallable {
            callable: id,
            span: error_span,
        })
    }

    /// Number of registered callables.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reify_types::TypeParamDef;

    fn dummy_span() -> SourceSpan {
        SourceSpan::from((0, 0))
    }

    fn span_at(offset: usize) -> SourceSpan {
        SourceSpan::from((offset, 1))
    }

    fn decl(id: u32, name: &str, params: Vec<TypeParamDef>) -> CallableDecl {
        CallableDecl::new(CallableId(id), name, params, span_at(id as usize))
    }

    fn param(name: &str, reified: bool) -> TypeParamDef {
        TypeParamDef::new(name, reified, dummy_span())
    }

    #[test]
    fn register_then_lookup() {
        let mut registry = SignatureRegistry::new();
        registry
            .register(decl(1, "f", vec![param("T", false)]))
            .unwrap();

        let sig = registry.lookup(CallableId(1), dummy_span()).unwrap();
        assert_eq!(sig.name, "f");
        assert_eq!(sig.type_params.len(), 1);
        assert!(!sig.has_reified_params());
    }

    #[test]
    fn duplicate_id_reports_both_spans() {
        let mut registry = SignatureRegistry::new();
        registry.register(decl(1, "f", vec![])).unwrap();

        let err = registry.register(decl(1, "f", vec![])).unwrap_err();
        match err {
            ReifyError::DuplicateDeclaration { callable, previous_span, .. } => {
                assert_eq!(callable, "f");
                assert_eq!(previous_span, span_at(1));
            }
            other => panic!("expected DuplicateDeclaration, got {:?}", other),
        }
        // The original registration is untouched.
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_param_name_rejects_declaration() {
        let mut registry = SignatureRegistry::new();
        let err = registry
            .register(decl(2, "g", vec![param("T", true), param("T", false)]))
            .unwrap_err();

        assert!(matches!(
            err,
            ReifyError::DuplicateTypeParamName { ref name, ref callable, .. }
                if name == "T" && callable == "g"
        ));
        // Nothing was stored for the failed declaration.
        assert!(registry.lookup(CallableId(2), dummy_span()).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn lookup_unregistered_id_fails() {
        let registry = SignatureRegistry::new();
        let err = registry.lookup(CallableId(9), span_at(42)).unwrap_err();
        assert!(matches!(
            err,
            ReifyError::UnknownCallable { callable: CallableId(9), span } if span == span_at(42)
        ));
    }

    #[test]
    fn mixed_params_flagged_as_reified() {
        let mut registry = SignatureRegistry::new();
        registry
            .register(decl(3, "h", vec![param("T", true), param("U", false)]))
            .unwrap();
        let sig = registry.lookup(CallableId(3), dummy_span()).unwrap();
        assert!(sig.has_reified_params());
    }
}
