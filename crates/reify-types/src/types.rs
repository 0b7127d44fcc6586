// src/types.rs
//! Data model for resolved declarations and call sites.

use std::fmt;

use miette::SourceSpan;
use serde::{Deserialize, Serialize};

/// A unique identifier for a declared callable (function or method).
/// Assigned by the upstream resolver; opaque to the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallableId(pub u32);

impl fmt::Display for CallableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A generic type parameter as declared on a callable.
///
/// Reified vs. erased is a tagged field rather than two parameter kinds:
/// a single callable may mix both, and the checker's per-parameter loop
/// stays uniform over the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParamDef {
    /// Original name from source (e.g. "T").
    pub name: String,
    /// Whether the concrete type argument must be recoverable at runtime.
    pub reified: bool,
    /// Source span of the parameter declaration.
    pub span: SourceSpan,
}

impl TypeParamDef {
    pub fn new(name: impl Into<String>, reified: bool, span: SourceSpan) -> Self {
        TypeParamDef { name: name.into(), reified, span }
    }
}

/// A callable declaration as produced by the upstream resolver.
/// This is the registration input for the checker's signature registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableDecl {
    pub id: CallableId,
    /// Name used in diagnostics (e.g. "g" or "C::g").
    pub name: String,
    /// Type parameters in declaration order.
    pub type_params: Vec<TypeParamDef>,
    /// Source span of the declaration.
    pub span: SourceSpan,
}

impl CallableDecl {
    pub fn new(
        id: CallableId,
        name: impl Into<String>,
        type_params: Vec<TypeParamDef>,
        span: SourceSpan,
    ) -> Self {
        CallableDecl { id, name: name.into(), type_params, span }
    }
}

/// What a supplied type argument resolved to.
///
/// The checker does not interpret concrete types beyond presence and
/// position; the one distinction it needs is whether the argument is a
/// concrete type or a type parameter forwarded from the caller's own
/// enclosing generic scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArgKind {
    /// A fully resolved concrete type name (e.g. "int", "Vec<string>").
    Concrete(String),
    /// A type parameter of the enclosing declaration, forwarded as-is.
    /// `reified` records how the enclosing declaration tagged it.
    Param { name: String, reified: bool },
}

impl fmt::Display for TypeArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArgKind::Concrete(name) => write!(f, "{}", name),
            TypeArgKind::Param { name, .. } => write!(f, "{}", name),
        }
    }
}

/// A type argument written at a call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeArg {
    pub kind: TypeArgKind,
    /// Whether the caller wrote the call-site `reify` marker on this
    /// argument. The parser records it; the checker rejects it on
    /// arguments bound to erased parameters.
    pub reify_marker: bool,
    /// Source span of the argument as written.
    pub span: SourceSpan,
}

impl TypeArg {
    /// A concrete type argument without the call-site marker.
    pub fn concrete(name: impl Into<String>, span: SourceSpan) -> Self {
        TypeArg { kind: TypeArgKind::Concrete(name.into()), reify_marker: false, span }
    }

    /// A forwarded enclosing-scope type parameter.
    pub fn forwarded(name: impl Into<String>, reified: bool, span: SourceSpan) -> Self {
        TypeArg { kind: TypeArgKind::Param { name: name.into(), reified }, reify_marker: false, span }
    }

    /// Same argument with the call-site `reify` marker set.
    pub fn with_reify_marker(mut self) -> Self {
        self.reify_marker = true;
        self
    }
}

/// A value argument at a call site. The checker never interprets these;
/// they are carried so a call site round-trips through the core intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueArg {
    pub span: SourceSpan,
}

/// A single invocation, as resolved by the upstream phase.
/// Transient: constructed per call, consumed by the validator, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// The callable being invoked.
    pub callee: CallableId,
    /// Callee name as written, for diagnostics.
    pub callee_name: String,
    /// Explicit type arguments, in source order. Empty means the caller
    /// omitted the type argument list entirely.
    pub type_args: Vec<TypeArg>,
    /// Value arguments, in source order.
    pub value_args: Vec<ValueArg>,
    /// Source span of the whole call expression.
    pub span: SourceSpan,
}

impl CallSite {
    pub fn new(
        callee: CallableId,
        callee_name: impl Into<String>,
        type_args: Vec<TypeArg>,
        value_args: Vec<ValueArg>,
        span: SourceSpan,
    ) -> Self {
        CallSite {
            callee,
            callee_name: callee_name.into(),
            type_args,
            value_args,
            span,
        }
    }

    /// True if the caller wrote no type argument list at all.
    pub fn type_args_omitted(&self) -> bool {
        self.type_args.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_span() -> SourceSpan {
        SourceSpan::from((0, 0))
    }

    #[test]
    fn callable_id_display() {
        assert_eq!(CallableId(3).to_string(), "c3");
    }

    #[test]
    fn type_arg_constructors() {
        let concrete = TypeArg::concrete("int", dummy_span());
        assert_eq!(concrete.kind, TypeArgKind::Concrete("int".to_string()));
        assert!(!concrete.reify_marker);
        assert_eq!(concrete.kind.to_string(), "int");

        let forwarded = TypeArg::forwarded("T", true, dummy_span()).with_reify_marker();
        assert!(forwarded.reify_marker);
        assert!(matches!(
            forwarded.kind,
            TypeArgKind::Param { ref name, reified: true } if name == "T"
        ));
    }

    #[test]
    fn empty_type_arg_list_counts_as_omitted() {
        let call = CallSite::new(CallableId(0), "f", vec![], vec![], dummy_span());
        assert!(call.type_args_omitted());

        let explicit = CallSite::new(
            CallableId(0),
            "f",
            vec![TypeArg::concrete("int", dummy_span())],
            vec![],
            dummy_span(),
        );
        assert!(!explicit.type_args_omitted());
    }
}
