//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::batch::{BoardsAndBlocks, DeleteBoardsAndBlocks, PatchBoardsAndBlocks};
use crate::domain::entities::{Block, Board};
use crate::error::BoardsResult;

/// Boards-and-blocks repository trait
///
/// Every batch operation applies completely or not at all.
#[trait_variant::make(BoardsAndBlocksRepository: Send)]
pub trait LocalBoardsAndBlocksRepository {
    /// Store new boards and blocks. Fails if any id is already taken.
    async fn create_boards_and_blocks(&self, bab: &BoardsAndBlocks) -> BoardsResult<()>;

    /// Apply patches positionally and return the patched entities
    async fn patch_boards_and_blocks(
        &self,
        pbab: &PatchBoardsAndBlocks,
        update_at: i64,
    ) -> BoardsResult<BoardsAndBlocks>;

    /// Delete boards with the blocks they own, then the listed blocks
    async fn delete_boards_and_blocks(&self, dbab: &DeleteBoardsAndBlocks) -> BoardsResult<()>;

    /// Find board by ID
    async fn get_board(&self, board_id: &str) -> BoardsResult<Option<Board>>;

    /// Find block by ID
    async fn get_block(&self, block_id: &str) -> BoardsResult<Option<Block>>;
}
