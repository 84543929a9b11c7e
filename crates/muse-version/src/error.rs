//! Version engine errors

/// Errors from version-thread operations
///
/// All variants mean the operation was rejected before any mutation; the
/// caller's proposal is untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Finalized versions accept no further optimization
    #[error("proposal version is finalized and cannot be changed")]
    AlreadyFinalized,

    /// The snapshot does not belong to this proposal thread's history
    #[error("snapshot is not part of this proposal's history")]
    ForeignSnapshot,

    /// No underlying refined brief text exists for the owning run
    #[error("no brief context available for this operation")]
    MissingBriefContext,

    /// Version counter would overflow (practically unreachable)
    #[error("version counter overflow")]
    VersionOverflow,
}
