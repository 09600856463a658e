//! Patch Documents
//!
//! Partial updates for boards and blocks. `None` leaves the attribute alone.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::{Block, BlockType, Board, BoardType};

/// Partial update of a board
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub board_type: Option<BoardType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_description: Option<bool>,
    pub updated_properties: Map<String, Value>,
    pub deleted_properties: Vec<String>,
}

impl BoardPatch {
    /// Return a copy of `board` with this patch applied
    pub fn patch(&self, board: &Board) -> Board {
        let mut board = board.clone();

        if let Some(board_type) = self.board_type {
            board.board_type = board_type;
        }
        if let Some(title) = &self.title {
            board.title = title.clone();
        }
        if let Some(description) = &self.description {
            board.description = description.clone();
        }
        if let Some(icon) = &self.icon {
            board.icon = icon.clone();
        }
        if let Some(show_description) = self.show_description {
            board.show_description = show_description;
        }

        merge_map(
            &mut board.properties,
            &self.updated_properties,
            &self.deleted_properties,
        );
        board
    }
}

/// Partial update of a block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub block_type: Option<BlockType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub updated_fields: Map<String, Value>,
    pub deleted_fields: Vec<String>,
}

impl BlockPatch {
    /// Return a copy of `block` with this patch applied
    pub fn patch(&self, block: &Block) -> Block {
        let mut block = block.clone();

        if let Some(parent_id) = &self.parent_id {
            block.parent_id = parent_id.clone();
        }
        if let Some(schema) = self.schema {
            block.schema = schema;
        }
        if let Some(block_type) = &self.block_type {
            block.block_type = block_type.clone();
        }
        if let Some(title) = &self.title {
            block.title = title.clone();
        }

        merge_map(&mut block.fields, &self.updated_fields, &self.deleted_fields);
        block
    }
}

// Deletions win over updates for the same key.
fn merge_map(target: &mut Map<String, Value>, updated: &Map<String, Value>, deleted: &[String]) {
    for (key, value) in updated {
        target.insert(key.clone(), value.clone());
    }
    for key in deleted {
        target.remove(key);
    }
}
