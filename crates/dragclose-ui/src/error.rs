use dragclose_foundation::ElementId;
use thiserror::Error;

/// Raised when a panel cannot be attached to its host layout.
///
/// A panel needs both a draggable container and a handle; without either it
/// cannot work, so none of these are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("draggable container id is not set")]
    MissingContainerId,
    #[error("draggable handle id is not set")]
    MissingHandleId,
    #[error("draggable container {0} not found in host layout")]
    ContainerNotFound(ElementId),
    #[error("draggable handle {0} not found in host layout")]
    HandleNotFound(ElementId),
}
