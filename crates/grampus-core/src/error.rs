pub type Result<T> = std::result::Result<T, Error>;

/// Builder-misuse and configuration errors.
///
/// All of these are fatal to the current diagram session; nothing is retried
/// or recovered internally. Engine failures are reported separately by
/// `grampus-render`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported diagram configuration: {message}")]
    Configuration { message: String },

    #[error("the node name [{name}] is already in use in this diagram")]
    DuplicateName { name: String },

    #[error("unknown node [{name}]; nodes must be declared before they are connected")]
    UnknownNode { name: String },

    #[error("no cluster scope is open")]
    ScopeUnderflow,
}
