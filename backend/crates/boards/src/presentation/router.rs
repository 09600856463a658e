//! Boards Router

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use kernel::id::{IdentifierSource, NanoidSource};
use std::sync::Arc;

use crate::application::config::BoardsConfig;
use crate::domain::repository::BoardsAndBlocksRepository;
use crate::infra::memory::MemoryBoardsRepository;
use crate::presentation::handlers::{self, BoardsAppState};

/// Create the boards router with the in-memory repository and nanoid ids
pub fn boards_router(repo: MemoryBoardsRepository, config: BoardsConfig) -> Router {
    boards_router_generic(repo, NanoidSource, config)
}

/// Create a generic boards router for any repository and identifier source
pub fn boards_router_generic<R, I>(repo: R, ids: I, config: BoardsConfig) -> Router
where
    R: BoardsAndBlocksRepository + Send + Sync + 'static,
    I: IdentifierSource + 'static,
{
    let state = BoardsAppState {
        repo: Arc::new(repo),
        ids: Arc::new(ids),
    };

    Router::new()
        .route(
            "/boards-and-blocks",
            post(handlers::create_boards_and_blocks::<R, I>)
                .patch(handlers::patch_boards_and_blocks::<R, I>)
                .delete(handlers::delete_boards_and_blocks::<R, I>),
        )
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .with_state(state)
}
