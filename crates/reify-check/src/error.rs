use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use reify_types::CallableId;

/// Result type for registry and validation operations.
pub type CheckResult<T> = Result<T, ReifyError>;

/// Errors produced by signature registration and call-site validation.
///
/// Registry-side variants (`DuplicateDeclaration`, `DuplicateTypeParamName`,
/// `UnknownCallable`) indicate bugs in the upstream declaration-collection or
/// resolution passes. The remaining variants are user-facing and end up in a
/// call site's verdict. All are recoverable; none aborts a checking run.
#[derive(Debug, Error, Diagnostic, Clone, Hash, PartialEq, Eq)]
pub enum ReifyError {
    /// A callable id was registered twice.
    #[error("Duplicate declaration: `{callable}` is already registered")]
    #[diagnostic(code(reify_check::duplicate_declaration))]
    DuplicateDeclaration {
        /// Name of the re-registered callable.
        callable: String,
        #[label("current declaration here")]
        span: SourceSpan,
        #[label("previously declared here")]
        previous_span: SourceSpan,
    },

    /// A declaration repeats a type-parameter name.
    #[error("Duplicate type parameter: `{name}` appears more than once on `{callable}`")]
    #[diagnostic(code(reify_check::duplicate_type_param))]
    DuplicateTypeParamName {
        /// The repeated parameter name.
        name: String,
        /// The callable declaring it.
        callable: String,
        #[label("second declaration of `{name}`")]
        span: SourceSpan,
    },

    /// A call site's callee was never registered.
    #[error("Unknown callable: no signature registered for {callable}")]
    #[diagnostic(code(reify_check::unknown_callable))]
    UnknownCallable {
        /// The unresolved callable id.
        callable: CallableId,
        #[label("call site here")]
        span: SourceSpan,
    },

    /// Wrong number of explicit type arguments.
    #[error("Wrong number of type arguments for `{callable}`: expected {expected}, found {got}")]
    #[diagnostic(code(reify_check::arity_mismatch))]
    ArityMismatch {
        /// The callable being invoked.
        callable: String,
        /// Number of declared type parameters.
        expected: usize,
        /// Number of supplied type arguments.
        got: usize,
        #[label("in this call")]
        span: SourceSpan,
    },

    /// A reified parameter got no explicit type argument.
    #[error("Missing type argument: reified parameter `{param}` of `{callable}` requires an explicit type argument")]
    #[diagnostic(
        code(reify_check::missing_reified_argument),
        help("supply a concrete type for `{param}`")
    )]
    MissingReifiedArgument {
        /// The reified parameter left without an argument.
        param: String,
        /// The callable declaring it.
        callable: String,
        #[label("type arguments omitted here")]
        span: SourceSpan,
    },

    /// An erased type parameter was forwarded into a reified slot.
    #[error("Erased type `{forwarded}` cannot be used for reified parameter `{param}`")]
    #[diagnostic(
        code(reify_check::erased_argument_for_reified_param),
        help("mark `{forwarded}` as reified on the enclosing declaration, or pass a concrete type")
    )]
    ErasedArgumentForReifiedParam {
        /// The reified parameter being instantiated.
        param: String,
        /// The forwarded erased parameter name.
        forwarded: String,
        #[label("`{forwarded}` is erased in the enclosing scope")]
        span: SourceSpan,
    },

    /// The call-site `reify` marker was written on an argument bound to an
    /// erased parameter.
    #[error("Invalid `reify` marker: parameter `{param}` is not reified")]
    #[diagnostic(code(reify_check::reify_marker_on_erased_param))]
    ReifyMarkerOnErasedParam {
        /// The erased parameter the marked argument binds to.
        param: String,
        #[label("marker written here")]
        span: SourceSpan,
    },
}

impl ReifyError {
    /// True for variants that indicate an upstream (resolver/collector) bug
    /// rather than a problem in the checked source.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ReifyError::DuplicateDeclaration { .. }
                | ReifyError::DuplicateTypeParamName { .. }
                | ReifyError::UnknownCallable { .. }
        )
    }
}
