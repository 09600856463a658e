//! Create Boards And Blocks Use Case
//!
//! Remaps the caller's placeholder ids and stores the batch.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::IdentifierSource;

use crate::domain::batch::BoardsAndBlocks;
use crate::domain::repository::BoardsAndBlocksRepository;
use crate::domain::services::generate_boards_and_blocks_ids;
use crate::error::BoardsResult;

/// Create boards and blocks use case
pub struct CreateBoardsAndBlocksUseCase<R, I>
where
    R: BoardsAndBlocksRepository,
    I: IdentifierSource,
{
    repo: Arc<R>,
    ids: Arc<I>,
}

impl<R, I> CreateBoardsAndBlocksUseCase<R, I>
where
    R: BoardsAndBlocksRepository,
    I: IdentifierSource,
{
    pub fn new(repo: Arc<R>, ids: Arc<I>) -> Self {
        Self { repo, ids }
    }

    /// Returns the stored batch, carrying the new ids.
    pub async fn execute(&self, bab: BoardsAndBlocks) -> BoardsResult<BoardsAndBlocks> {
        let mut created = generate_boards_and_blocks_ids(&bab, self.ids.as_ref())?;

        let now = Utc::now().timestamp_millis();
        for board in &mut created.boards {
            board.create_at = now;
            board.update_at = now;
        }
        for block in &mut created.blocks {
            block.create_at = now;
            block.update_at = now;
        }

        self.repo.create_boards_and_blocks(&created).await?;

        tracing::info!(
            boards = created.boards.len(),
            blocks = created.blocks.len(),
            "Created boards and blocks"
        );

        Ok(created)
    }
}
