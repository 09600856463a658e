//! Delete Boards And Blocks Use Case

use std::sync::Arc;

use crate::domain::batch::DeleteBoardsAndBlocks;
use crate::domain::repository::BoardsAndBlocksRepository;
use crate::error::BoardsResult;

/// Delete boards and blocks use case
pub struct DeleteBoardsAndBlocksUseCase<R>
where
    R: BoardsAndBlocksRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteBoardsAndBlocksUseCase<R>
where
    R: BoardsAndBlocksRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, dbab: DeleteBoardsAndBlocks) -> BoardsResult<()> {
        dbab.is_valid()?;

        self.repo.delete_boards_and_blocks(&dbab).await?;

        tracing::info!(
            boards = dbab.boards.len(),
            blocks = dbab.blocks.len(),
            "Deleted boards and blocks"
        );

        Ok(())
    }
}
