//! In-Memory Repository Implementation
//!
//! Keeps boards and blocks in maps behind one async lock. Each batch is
//! checked in full before anything is written, so a rejected batch leaves
//! the store unchanged.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::batch::{BoardsAndBlocks, DeleteBoardsAndBlocks, PatchBoardsAndBlocks};
use crate::domain::entities::{Block, Board};
use crate::domain::repository::BoardsAndBlocksRepository;
use crate::error::{BoardsError, BoardsResult};

#[derive(Debug, Default)]
struct Store {
    boards: HashMap<String, Board>,
    blocks: HashMap<String, Block>,
}

/// Memory-backed repository. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBoardsRepository {
    store: Arc<RwLock<Store>>,
}

impl MemoryBoardsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored boards
    pub async fn board_count(&self) -> usize {
        self.store.read().await.boards.len()
    }

    /// Number of stored blocks
    pub async fn block_count(&self) -> usize {
        self.store.read().await.blocks.len()
    }
}

fn first_taken<'a, I, V>(ids: I, existing: &HashMap<String, V>) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .find(|id| existing.contains_key(*id) || !seen.insert(*id))
}

impl BoardsAndBlocksRepository for MemoryBoardsRepository {
    async fn create_boards_and_blocks(&self, bab: &BoardsAndBlocks) -> BoardsResult<()> {
        let mut store = self.store.write().await;

        if let Some(id) = first_taken(bab.boards.iter().map(|b| b.id.as_str()), &store.boards) {
            return Err(BoardsError::AlreadyExists(id.to_string()));
        }
        if let Some(id) = first_taken(bab.blocks.iter().map(|b| b.id.as_str()), &store.blocks) {
            return Err(BoardsError::AlreadyExists(id.to_string()));
        }

        for board in &bab.boards {
            store.boards.insert(board.id.clone(), board.clone());
        }
        for block in &bab.blocks {
            store.blocks.insert(block.id.clone(), block.clone());
        }

        tracing::debug!(
            boards = bab.boards.len(),
            blocks = bab.blocks.len(),
            "Stored boards and blocks"
        );
        Ok(())
    }

    async fn patch_boards_and_blocks(
        &self,
        pbab: &PatchBoardsAndBlocks,
        update_at: i64,
    ) -> BoardsResult<BoardsAndBlocks> {
        let mut store = self.store.write().await;

        if let Some(id) = pbab
            .board_ids
            .iter()
            .find(|id| !store.boards.contains_key(id.as_str()))
        {
            return Err(BoardsError::BoardNotFound(id.clone()));
        }
        if let Some(id) = pbab
            .block_ids
            .iter()
            .find(|id| !store.blocks.contains_key(id.as_str()))
        {
            return Err(BoardsError::BlockNotFound(id.clone()));
        }

        let mut patched = BoardsAndBlocks::default();

        for (id, patch) in pbab.board_pairs() {
            let Some(current) = store.boards.get(id) else {
                return Err(BoardsError::Internal(format!("board {id} vanished during patch")));
            };
            let mut board = patch.patch(current);
            board.update_at = update_at;
            store.boards.insert(board.id.clone(), board.clone());
            patched.boards.push(board);
        }

        for (id, patch) in pbab.block_pairs() {
            let Some(current) = store.blocks.get(id) else {
                return Err(BoardsError::Internal(format!("block {id} vanished during patch")));
            };
            let mut block = patch.patch(current);
            block.update_at = update_at;
            store.blocks.insert(block.id.clone(), block.clone());
            patched.blocks.push(block);
        }

        tracing::debug!(
            boards = patched.boards.len(),
            blocks = patched.blocks.len(),
            "Patched boards and blocks"
        );
        Ok(patched)
    }

    async fn delete_boards_and_blocks(&self, dbab: &DeleteBoardsAndBlocks) -> BoardsResult<()> {
        let mut store = self.store.write().await;

        let doomed: HashSet<&str> = dbab.boards.iter().map(String::as_str).collect();
        store.boards.retain(|id, _| !doomed.contains(id.as_str()));
        store
            .blocks
            .retain(|_, block| !doomed.contains(block.board_id.as_str()));

        for block_id in &dbab.blocks {
            store.blocks.remove(block_id);
        }

        tracing::debug!(
            boards = dbab.boards.len(),
            blocks = dbab.blocks.len(),
            "Deleted boards and blocks"
        );
        Ok(())
    }

    async fn get_board(&self, board_id: &str) -> BoardsResult<Option<Board>> {
        Ok(self.store.read().await.boards.get(board_id).cloned())
    }

    async fn get_block(&self, block_id: &str) -> BoardsResult<Option<Block>> {
        Ok(self.store.read().await.blocks.get(block_id).cloned())
    }
}
