//! Domain Services
//!
//! Identifier remapping for creation batches. Placeholder ids chosen by the
//! caller are replaced with freshly minted ones, and every reference inside
//! the batch follows the renaming.

use std::collections::HashMap;

use kernel::id::{IdKind, IdentifierSource};
use serde_json::Value;

use crate::domain::batch::BoardsAndBlocks;
use crate::domain::entities::Block;
use crate::error::BatchValidationError;

const CONTENT_ORDER_FIELD: &str = "contentOrder";

/// Assign fresh ids to every board and block of a creation batch.
///
/// Blocks are re-pointed at the new id of the board they referenced. The
/// output lists boards in input order; blocks come out grouped per board in
/// board order, each group keeping its original relative order.
///
/// Boards sharing a placeholder id each get their own fresh id, but the
/// blocks that referenced that placeholder all go to the first of them.
///
/// Nothing is minted when `bab` fails validation. `bab` itself is untouched.
pub fn generate_boards_and_blocks_ids<I>(
    bab: &BoardsAndBlocks,
    ids: &I,
) -> Result<BoardsAndBlocks, BatchValidationError>
where
    I: IdentifierSource + ?Sized,
{
    bab.is_valid()?;

    let mut blocks_by_board: HashMap<&str, Vec<Block>> = HashMap::new();
    for block in &bab.blocks {
        blocks_by_board
            .entry(block.board_id.as_str())
            .or_default()
            .push(block.clone());
    }

    let mut boards = Vec::with_capacity(bab.boards.len());
    let mut blocks = Vec::with_capacity(bab.blocks.len());

    for board in &bab.boards {
        let new_id = ids.mint(IdKind::Board);

        // a repeated placeholder id keeps its blocks on the first board
        if let Some(group) = blocks_by_board.remove(board.id.as_str()) {
            for mut block in group {
                block.board_id = new_id.clone();
                blocks.push(block);
            }
        }

        let mut board = board.clone();
        board.id = new_id;
        boards.push(board);
    }

    Ok(BoardsAndBlocks {
        boards,
        blocks: generate_block_ids(blocks, ids),
    })
}

/// Give every block a fresh id of its kind.
///
/// `parent_id` and `contentOrder` entries that name a block of this batch are
/// rewritten to that block's new id. `board_id` is never touched, and
/// references to anything outside the batch are left as they are.
pub fn generate_block_ids<I>(blocks: Vec<Block>, ids: &I) -> Vec<Block>
where
    I: IdentifierSource + ?Sized,
{
    let fresh: Vec<String> = blocks
        .iter()
        .map(|block| ids.mint(block.block_type.id_kind()))
        .collect();

    let mut renamed: HashMap<String, String> = HashMap::with_capacity(blocks.len());
    for (block, new_id) in blocks.iter().zip(&fresh) {
        renamed
            .entry(block.id.clone())
            .or_insert_with(|| new_id.clone());
    }

    let lookup = |id: &str| renamed.get(id).cloned().unwrap_or_else(|| id.to_string());

    blocks
        .into_iter()
        .zip(fresh)
        .map(|(mut block, new_id)| {
            block.parent_id = lookup(&block.parent_id);

            if let Some(order) = block.fields.get_mut(CONTENT_ORDER_FIELD) {
                remap_content_order(order, &renamed, &block.id);
            }

            block.id = new_id;
            block
        })
        .collect()
}

// contentOrder is a list whose entries are either a block id or a row of ids.
fn remap_content_order(order: &mut Value, renamed: &HashMap<String, String>, block_id: &str) {
    let Value::Array(entries) = order else {
        tracing::warn!(block_id = %block_id, "contentOrder is not an array, left unchanged");
        return;
    };

    for entry in entries.iter_mut() {
        match entry {
            Value::String(id) => rename_in_place(id, renamed),
            Value::Array(row) => {
                for cell in row.iter_mut() {
                    match cell {
                        Value::String(id) => rename_in_place(id, renamed),
                        other => tracing::warn!(
                            block_id = %block_id,
                            value = %other,
                            "unexpected contentOrder cell, left unchanged"
                        ),
                    }
                }
            }
            other => tracing::warn!(
                block_id = %block_id,
                value = %other,
                "unexpected contentOrder entry, left unchanged"
            ),
        }
    }
}

fn rename_in_place(id: &mut String, renamed: &HashMap<String, String>) {
    if let Some(new_id) = renamed.get(id.as_str()) {
        *id = new_id.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BlockType, Board};
    use kernel::id::SequentialSource;
    use serde_json::json;
    use std::collections::HashSet;

    fn card(id: &str, board_id: &str) -> Block {
        Block::new(id, board_id, BlockType::Card)
    }

    fn sample() -> BoardsAndBlocks {
        BoardsAndBlocks::new(
            vec![Board::new("b1", "one"), Board::new("b2", "two")],
            vec![card("k1", "b1"), card("k2", "b1"), card("k3", "b2")],
        )
    }

    #[test]
    fn test_remap_assigns_fresh_ids_and_repoints_blocks() {
        let ids = SequentialSource::new();
        let input = sample();

        let out = generate_boards_and_blocks_ids(&input, &ids).unwrap();

        assert_eq!(out.boards.len(), 2);
        assert_eq!(out.blocks.len(), 3);

        let new_b1 = &out.boards[0].id;
        let new_b2 = &out.boards[1].id;
        assert_eq!(out.boards[0].title, "one");
        assert_eq!(out.boards[1].title, "two");

        let owners: Vec<&str> = out.blocks.iter().map(|b| b.board_id.as_str()).collect();
        assert_eq!(owners, vec![new_b1.as_str(), new_b1.as_str(), new_b2.as_str()]);

        let all: HashSet<&str> = out
            .boards
            .iter()
            .map(|b| b.id.as_str())
            .chain(out.blocks.iter().map(|b| b.id.as_str()))
            .collect();
        assert_eq!(all.len(), 5);
        for old in ["b1", "b2", "k1", "k2", "k3"] {
            assert!(!all.contains(old));
        }
        assert_eq!(ids.minted(), 5);

        // the input batch is left as it was
        assert_eq!(input, sample());
    }

    #[test]
    fn test_remap_block_id_equal_to_minted_board_id_keeps_its_board() {
        let ids = SequentialSource::new();
        let input = BoardsAndBlocks::new(
            vec![Board::new("x", "")],
            vec![card("b00000000000000000001", "x")],
        );

        let out = generate_boards_and_blocks_ids(&input, &ids).unwrap();

        assert_eq!(out.boards[0].id, "b00000000000000000001");
        assert_eq!(out.blocks[0].board_id, out.boards[0].id);
        assert_eq!(out.blocks[0].id, "c00000000000000000002");
    }

    #[test]
    fn test_remap_repeated_board_placeholder_keeps_blocks_on_first_board() {
        let ids = SequentialSource::new();
        let input = BoardsAndBlocks::new(
            vec![Board::new("b1", "first"), Board::new("b1", "second")],
            vec![card("k1", "b1"), card("k2", "b1")],
        );

        let out = generate_boards_and_blocks_ids(&input, &ids).unwrap();

        assert_ne!(out.boards[0].id, out.boards[1].id);
        assert_eq!(out.blocks.len(), 2);
        assert!(out.blocks.iter().all(|b| b.board_id == out.boards[0].id));
    }

    #[test]
    fn test_remap_uses_nanoid_ids_by_default() {
        let out = generate_boards_and_blocks_ids(&sample(), &kernel::id::NanoidSource).unwrap();
        assert!(out.boards.iter().all(|b| b.id.starts_with('b')));
        assert!(out.blocks.iter().all(|b| b.id.starts_with('c')));
    }

    #[test]
    fn test_remap_groups_blocks_per_board() {
        let ids = SequentialSource::new();
        let input = BoardsAndBlocks::new(
            vec![Board::new("b1", ""), Board::new("b2", "")],
            vec![card("k1", "b2"), card("k2", "b1"), card("k3", "b2"), card("k4", "b1")],
        );

        let out = generate_boards_and_blocks_ids(&input, &ids).unwrap();

        // board ids are minted first (b..1, b..2), blocks afterwards in output order
        let owners: Vec<&str> = out.blocks.iter().map(|b| b.board_id.as_str()).collect();
        assert_eq!(
            owners,
            vec![
                "b00000000000000000001",
                "b00000000000000000001",
                "b00000000000000000002",
                "b00000000000000000002",
            ]
        );
        let block_ids: Vec<&str> = out.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            block_ids,
            vec![
                "c00000000000000000003",
                "c00000000000000000004",
                "c00000000000000000005",
                "c00000000000000000006",
            ]
        );
    }

    #[test]
    fn test_remap_invalid_batch_mints_nothing() {
        let ids = SequentialSource::new();
        let input = BoardsAndBlocks::new(vec![Board::new("b1", "")], vec![card("k1", "bX")]);

        let err = generate_boards_and_blocks_ids(&input, &ids).unwrap_err();

        assert_eq!(
            err,
            BatchValidationError::OrphanBlock {
                block_id: "k1".into()
            }
        );
        assert_eq!(ids.minted(), 0);

        let err = generate_boards_and_blocks_ids(&BoardsAndBlocks::default(), &ids).unwrap_err();
        assert_eq!(err, BatchValidationError::NoBoards);
        assert_eq!(ids.minted(), 0);
    }

    #[test]
    fn test_block_ids_follow_parent_and_content_order() {
        let ids = SequentialSource::new();
        let mut parent = card("k1", "B");
        parent
            .fields
            .insert("contentOrder".into(), json!(["k2", ["k3", "outside"]]));
        let blocks = vec![
            parent,
            Block::new("k2", "B", BlockType::Text).with_parent("k1"),
            Block::new("k3", "B", BlockType::Image).with_parent("k1"),
            Block::new("k4", "B", BlockType::View).with_parent("elsewhere"),
        ];

        let out = generate_block_ids(blocks, &ids);

        assert_eq!(out[0].id, "c00000000000000000001");
        assert_eq!(out[1].id, "a00000000000000000002");
        assert_eq!(out[3].id, "v00000000000000000004");
        assert_eq!(out[1].parent_id, out[0].id);
        assert_eq!(out[2].parent_id, out[0].id);
        assert_eq!(out[3].parent_id, "elsewhere");
        assert!(out.iter().all(|b| b.board_id == "B"));
        assert_eq!(
            out[0].fields["contentOrder"],
            json!(["a00000000000000000002", ["a00000000000000000003", "outside"]])
        );
    }

    #[test]
    fn test_block_ids_leave_board_id_alone() {
        let ids = SequentialSource::new();
        let blocks = vec![card("k1", "B"), card("k2", "k1")];

        let out = generate_block_ids(blocks, &ids);

        assert_eq!(out[1].board_id, "k1");
    }

    #[test]
    fn test_block_ids_malformed_content_order_is_kept() {
        let ids = SequentialSource::new();
        let mut block = card("k1", "B");
        block.fields.insert("contentOrder".into(), json!("k1"));
        block.fields.insert("other".into(), json!({"nested": "k1"}));

        let out = generate_block_ids(vec![block], &ids);

        assert_eq!(out[0].fields["contentOrder"], json!("k1"));
        assert_eq!(out[0].fields["other"], json!({"nested": "k1"}));
    }

    #[test]
    fn test_duplicate_block_ids_still_get_distinct_ids() {
        let ids = SequentialSource::new();
        let out = generate_block_ids(vec![card("k1", "B"), card("k1", "B")], &ids);
        assert_ne!(out[0].id, out[1].id);
    }
}
