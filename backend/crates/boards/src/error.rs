//! Boards Error Types
//!
//! [`BatchValidationError`] is the closed set of structural failures a batch
//! can have. [`BoardsError`] wraps it together with decode and storage
//! failures and integrates with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Boards-specific result type alias
pub type BoardsResult<T> = Result<T, BoardsError>;

/// Structural validation failures of a batch request.
///
/// Validators report the first violated rule only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchValidationError {
    /// The batch declares no boards
    #[error("at least one board is required")]
    NoBoards,

    /// The batch declares no blocks
    #[error("at least one block is required")]
    NoBlocks,

    /// A block's board reference does not resolve inside the batch
    #[error("block {block_id} doesn't belong to any board")]
    OrphanBlock { block_id: String },

    /// Board ids and board patches differ in length
    #[error("board ids and patches need to match")]
    BoardCountMismatch,

    /// Block ids and block patches differ in length
    #[error("block ids and patches need to match")]
    BlockCountMismatch,
}

/// Boards-specific error variants
#[derive(Debug, Error)]
pub enum BoardsError {
    /// Batch failed structural validation
    #[error(transparent)]
    Validation(#[from] BatchValidationError),

    /// Request body is not a valid batch document
    #[error("invalid request body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Board id not present in the store
    #[error("board {0} not found")]
    BoardNotFound(String),

    /// Block id not present in the store
    #[error("block {0} not found")]
    BlockNotFound(String),

    /// An entity with this id is already stored
    #[error("entity {0} already exists")]
    AlreadyExists(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BoardsError::Validation(_) | BoardsError::Decode(_) => StatusCode::BAD_REQUEST,
            BoardsError::BoardNotFound(_) | BoardsError::BlockNotFound(_) => StatusCode::NOT_FOUND,
            BoardsError::AlreadyExists(_) => StatusCode::CONFLICT,
            BoardsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardsError::Validation(_) | BoardsError::Decode(_) => ErrorKind::BadRequest,
            BoardsError::BoardNotFound(_) | BoardsError::BlockNotFound(_) => ErrorKind::NotFound,
            BoardsError::AlreadyExists(_) => ErrorKind::Conflict,
            BoardsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Client-facing view of this error, without the source chain
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            BoardsError::Validation(BatchValidationError::OrphanBlock { .. }) => {
                err.with_action("Point every block at a board sent in the same request")
            }
            BoardsError::Validation(
                BatchValidationError::BoardCountMismatch | BatchValidationError::BlockCountMismatch,
            ) => err.with_action("Send exactly one patch per id"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BoardsError::AlreadyExists(id) => {
                tracing::warn!(id = %id, "Boards id collision");
            }
            _ if self.kind().is_server_error() => {
                tracing::error!(error = %self, "Boards internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Boards request rejected");
            }
        }
    }
}

impl IntoResponse for BoardsError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<BoardsError> for AppError {
    fn from(err: BoardsError) -> Self {
        err.to_app_error().with_source(err)
    }
}
