//! Boards Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, batch requests, id remapping, repository traits
//! - `application/` - Use cases
//! - `infra/` - Storage implementations
//! - `presentation/` - HTTP handlers and router
//!
//! ## Batch Model
//! - Boards and blocks are created, patched and deleted together in one request
//! - A creation batch must be self-contained: every block points at a board of the same batch
//! - Created entities never keep caller-chosen ids; the server mints every id

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BoardsConfig;
pub use error::{BatchValidationError, BoardsError, BoardsResult};
pub use infra::memory::MemoryBoardsRepository;
pub use presentation::router::{boards_router, boards_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::batch::*;
    pub use crate::domain::entities::*;
    pub use crate::domain::patches::*;
}
