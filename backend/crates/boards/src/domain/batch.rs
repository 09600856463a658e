//! Batch Requests
//!
//! The three request shapes that operate on boards and blocks together,
//! with their structural validators and JSON decoding.

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Block, Board};
use crate::domain::patches::{BlockPatch, BoardPatch};
use crate::error::{BatchValidationError, BoardsResult};

/// Boards and blocks created together.
///
/// Before remapping, ids are caller-chosen placeholders and every block must
/// point at one of the boards in the same batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardsAndBlocks {
    pub boards: Vec<Board>,
    pub blocks: Vec<Block>,
}

impl BoardsAndBlocks {
    pub fn new(boards: Vec<Board>, blocks: Vec<Block>) -> Self {
        Self { boards, blocks }
    }

    /// Decode a batch from a JSON body.
    ///
    /// Missing arrays decode as empty; a body that is not a JSON object fails.
    pub fn from_json<R: Read>(reader: R) -> BoardsResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn is_valid(&self) -> Result<(), BatchValidationError> {
        if self.boards.is_empty() {
            return Err(BatchValidationError::NoBoards);
        }

        if self.blocks.is_empty() {
            return Err(BatchValidationError::NoBlocks);
        }

        let board_ids: HashSet<&str> = self.boards.iter().map(|b| b.id.as_str()).collect();

        if let Some(orphan) = self
            .blocks
            .iter()
            .find(|block| !board_ids.contains(block.board_id.as_str()))
        {
            return Err(BatchValidationError::OrphanBlock {
                block_id: orphan.id.clone(),
            });
        }

        Ok(())
    }
}

/// Boards and blocks to delete in one request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteBoardsAndBlocks {
    pub boards: Vec<String>,
    pub blocks: Vec<String>,
}

impl DeleteBoardsAndBlocks {
    pub fn new(boards: Vec<String>, blocks: Vec<String>) -> Self {
        Self { boards, blocks }
    }

    pub fn from_json<R: Read>(reader: R) -> BoardsResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Both lists must be non-empty. The lists are independent of each other.
    pub fn is_valid(&self) -> Result<(), BatchValidationError> {
        if self.boards.is_empty() {
            return Err(BatchValidationError::NoBoards);
        }

        if self.blocks.is_empty() {
            return Err(BatchValidationError::NoBlocks);
        }

        Ok(())
    }
}

/// Patches for several boards and blocks.
///
/// `board_patches[i]` applies to `board_ids[i]`, same for blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchBoardsAndBlocks {
    #[serde(rename = "boardIDs")]
    pub board_ids: Vec<String>,
    #[serde(rename = "boardPatches")]
    pub board_patches: Vec<BoardPatch>,
    #[serde(rename = "blockIDs")]
    pub block_ids: Vec<String>,
    #[serde(rename = "blockPatches")]
    pub block_patches: Vec<BlockPatch>,
}

impl PatchBoardsAndBlocks {
    pub fn from_json<R: Read>(reader: R) -> BoardsResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn is_valid(&self) -> Result<(), BatchValidationError> {
        if self.board_ids.is_empty() {
            return Err(BatchValidationError::NoBoards);
        }

        if self.board_ids.len() != self.board_patches.len() {
            return Err(BatchValidationError::BoardCountMismatch);
        }

        if self.block_ids.is_empty() {
            return Err(BatchValidationError::NoBlocks);
        }

        if self.block_ids.len() != self.block_patches.len() {
            return Err(BatchValidationError::BlockCountMismatch);
        }

        Ok(())
    }

    /// Board ids paired with their patches
    pub fn board_pairs(&self) -> impl Iterator<Item = (&str, &BoardPatch)> {
        self.board_ids
            .iter()
            .map(String::as_str)
            .zip(self.board_patches.iter())
    }

    /// Block ids paired with their patches
    pub fn block_pairs(&self) -> impl Iterator<Item = (&str, &BlockPatch)> {
        self.block_ids
            .iter()
            .map(String::as_str)
            .zip(self.block_patches.iter())
    }
}
