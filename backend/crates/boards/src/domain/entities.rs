//! Domain Entities
//!
//! Boards own blocks through `Block::board_id`. Attributes other than the
//! identifiers are carried through unchanged by the batch logic.

use kernel::id::IdKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Board visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardType {
    #[default]
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "P")]
    Private,
}

/// Board entity - a container of blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Board {
    pub id: String,
    pub team_id: String,
    pub created_by: String,
    pub modified_by: String,
    #[serde(rename = "type")]
    pub board_type: BoardType,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub show_description: bool,
    pub is_template: bool,
    pub properties: Map<String, Value>,
    pub card_properties: Vec<Value>,
    pub create_at: i64,
    pub update_at: i64,
    pub delete_at: i64,
}

impl Board {
    /// Create a board with the given id and title, everything else defaulted
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Block type. Unknown types are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    Board,
    Card,
    View,
    Text,
    Checkbox,
    Comment,
    Image,
    Divider,
    #[default]
    Unknown,
    Other(String),
}

impl BlockType {
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Board => "board",
            BlockType::Card => "card",
            BlockType::View => "view",
            BlockType::Text => "text",
            BlockType::Checkbox => "checkbox",
            BlockType::Comment => "comment",
            BlockType::Image => "image",
            BlockType::Divider => "divider",
            BlockType::Unknown => "unknown",
            BlockType::Other(s) => s,
        }
    }

    /// Identifier kind minted for blocks of this type
    pub fn id_kind(&self) -> IdKind {
        match self {
            BlockType::Card => IdKind::Card,
            BlockType::View => IdKind::View,
            _ => IdKind::Block,
        }
    }
}

impl From<String> for BlockType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "board" => BlockType::Board,
            "card" => BlockType::Card,
            "view" => BlockType::View,
            "text" => BlockType::Text,
            "checkbox" => BlockType::Checkbox,
            "comment" => BlockType::Comment,
            "image" => BlockType::Image,
            "divider" => BlockType::Divider,
            "unknown" | "" => BlockType::Unknown,
            _ => BlockType::Other(s),
        }
    }
}

impl From<BlockType> for String {
    fn from(t: BlockType) -> Self {
        match t {
            BlockType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Block entity - an item owned by exactly one board
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    pub id: String,
    pub board_id: String,
    pub parent_id: String,
    pub created_by: String,
    pub modified_by: String,
    pub schema: i64,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub title: String,
    pub fields: Map<String, Value>,
    pub create_at: i64,
    pub update_at: i64,
    pub delete_at: i64,
}

impl Block {
    /// Create a block of `block_type` owned by `board_id`
    pub fn new(id: impl Into<String>, board_id: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            id: id.into(),
            board_id: board_id.into(),
            block_type,
            schema: 1,
            ..Default::default()
        }
    }

    /// Set the parent block (builder style)
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = parent_id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_json_field_names() {
        let board = Board::new("b1", "Roadmap");
        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(json["id"], "b1");
        assert_eq!(json["type"], "O");
        assert_eq!(json["showDescription"], false);
        assert!(json.get("cardProperties").is_some());
    }

    #[test]
    fn test_block_decodes_with_missing_fields() {
        let block: Block = serde_json::from_str(r#"{"id":"k1","boardId":"b1","type":"card"}"#)
            .unwrap();

        assert_eq!(block.id, "k1");
        assert_eq!(block.board_id, "b1");
        assert_eq!(block.block_type, BlockType::Card);
        assert!(block.parent_id.is_empty());
    }

    #[test]
    fn test_unknown_block_type_is_kept_verbatim() {
        let block: Block =
            serde_json::from_str(r#"{"id":"k1","boardId":"b1","type":"h1"}"#).unwrap();
        assert_eq!(block.block_type, BlockType::Other("h1".to_string()));

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "h1");
    }

    #[test]
    fn test_block_type_id_kind() {
        assert_eq!(BlockType::Card.id_kind(), IdKind::Card);
        assert_eq!(BlockType::View.id_kind(), IdKind::View);
        assert_eq!(BlockType::Text.id_kind(), IdKind::Block);
        assert_eq!(BlockType::Other("h1".into()).id_kind(), IdKind::Block);
    }
}
