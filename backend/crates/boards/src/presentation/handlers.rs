//! HTTP Handlers
//!
//! Bodies are taken as raw bytes and decoded with the batch types' own
//! `from_json`, so malformed input surfaces as `BoardsError::Decode`.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::id::IdentifierSource;

use crate::application::{
    CreateBoardsAndBlocksUseCase, DeleteBoardsAndBlocksUseCase, PatchBoardsAndBlocksUseCase,
};
use crate::domain::batch::{BoardsAndBlocks, DeleteBoardsAndBlocks, PatchBoardsAndBlocks};
use crate::domain::repository::BoardsAndBlocksRepository;
use crate::error::BoardsResult;

/// Shared state for boards handlers
pub struct BoardsAppState<R, I>
where
    R: BoardsAndBlocksRepository + Send + Sync + 'static,
    I: IdentifierSource + 'static,
{
    pub repo: Arc<R>,
    pub ids: Arc<I>,
}

// Manual impl: neither R nor I needs to be Clone behind the Arcs.
impl<R, I> Clone for BoardsAppState<R, I>
where
    R: BoardsAndBlocksRepository + Send + Sync + 'static,
    I: IdentifierSource + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            ids: Arc::clone(&self.ids),
        }
    }
}

/// POST /boards-and-blocks
pub async fn create_boards_and_blocks<R, I>(
    State(state): State<BoardsAppState<R, I>>,
    body: Bytes,
) -> BoardsResult<Json<BoardsAndBlocks>>
where
    R: BoardsAndBlocksRepository + Send + Sync + 'static,
    I: IdentifierSource + 'static,
{
    let bab = BoardsAndBlocks::from_json(body.as_ref())?;

    let use_case = CreateBoardsAndBlocksUseCase::new(state.repo.clone(), state.ids.clone());
    let created = use_case.execute(bab).await?;

    Ok(Json(created))
}

/// PATCH /boards-and-blocks
pub async fn patch_boards_and_blocks<R, I>(
    State(state): State<BoardsAppState<R, I>>,
    body: Bytes,
) -> BoardsResult<Json<BoardsAndBlocks>>
where
    R: BoardsAndBlocksRepository + Send + Sync + 'static,
    I: IdentifierSource + 'static,
{
    let pbab = PatchBoardsAndBlocks::from_json(body.as_ref())?;

    let use_case = PatchBoardsAndBlocksUseCase::new(state.repo.clone());
    let patched = use_case.execute(pbab).await?;

    Ok(Json(patched))
}

/// DELETE /boards-and-blocks
pub async fn delete_boards_and_blocks<R, I>(
    State(state): State<BoardsAppState<R, I>>,
    body: Bytes,
) -> BoardsResult<StatusCode>
where
    R: BoardsAndBlocksRepository + Send + Sync + 'static,
    I: IdentifierSource + 'static,
{
    let dbab = DeleteBoardsAndBlocks::from_json(body.as_ref())?;

    let use_case = DeleteBoardsAndBlocksUseCase::new(state.repo.clone());
    use_case.execute(dbab).await?;

    Ok(StatusCode::NO_CONTENT)
}
