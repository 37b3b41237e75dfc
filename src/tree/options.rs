/// What to do when a subdirectory cannot be listed mid-walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole walk on the first failure.
    #[default]
    Fail,
    /// Mark the directory as unreadable, log a warning, continue with its siblings.
    Skip,
}

/// Options for a walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Recovery policy for unreadable subdirectories. The root is always fail-fast.
    pub on_error: ErrorPolicy,
}
