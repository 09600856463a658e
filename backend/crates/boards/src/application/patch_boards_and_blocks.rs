//! Patch Boards And Blocks Use Case

use std::sync::Arc;

use chrono::Utc;

use crate::domain::batch::{BoardsAndBlocks, PatchBoardsAndBlocks};
use crate::domain::repository::BoardsAndBlocksRepository;
use crate::error::BoardsResult;

/// Patch boards and blocks use case
pub struct PatchBoardsAndBlocksUseCase<R>
where
    R: BoardsAndBlocksRepository,
{
    repo: Arc<R>,
}

impl<R> PatchBoardsAndBlocksUseCase<R>
where
    R: BoardsAndBlocksRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, pbab: PatchBoardsAndBlocks) -> BoardsResult<BoardsAndBlocks> {
        pbab.is_valid()?;

        let patched = self
            .repo
            .patch_boards_and_blocks(&pbab, Utc::now().timestamp_millis())
            .await?;

        tracing::info!(
            boards = patched.boards.len(),
            blocks = patched.blocks.len(),
            "Patched boards and blocks"
        );

        Ok(patched)
    }
}
