use thiserror::Error;

use crate::segment::Span;

/// Recoverable oddities met while decoding. Decoding never fails; these
/// only report what was ignored or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecWarning {
    #[error("unknown layer type `{tag}` at {}..{}", span.start, span.end)]
    UnknownLayer { tag: String, span: Span },

    #[error("universal dependency head `{value}` is not a number, using -1")]
    MalformedHead { value: String },

    #[error("universal dependency `{value}` has no label")]
    MissingLabel { value: String },
}
