//! Convenience result type alias for Conveyor.

use crate::error::ConveyorError;

/// A specialized `Result` type for Conveyor operations.
///
/// Defined as a convenience so that every crate does not need to write
/// `Result<T, ConveyorError>` explicitly.
pub type CoreResult<T> = Result<T, ConveyorError>;
