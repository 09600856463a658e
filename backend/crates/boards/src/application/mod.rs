//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod create_boards_and_blocks;
pub mod delete_boards_and_blocks;
pub mod patch_boards_and_blocks;

// Re-exports
pub use config::BoardsConfig;
pub use create_boards_and_blocks::CreateBoardsAndBlocksUseCase;
pub use delete_boards_and_blocks::DeleteBoardsAndBlocksUseCase;
pub use patch_boards_and_blocks::PatchBoardsAndBlocksUseCase;
