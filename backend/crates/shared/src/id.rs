//! Identifier Generation
//!
//! Entity identifiers are plain strings: a one-letter kind prefix followed by
//! a URL-safe random body. Minting goes through [`IdentifierSource`] so the
//! process-wide generator can be swapped for a deterministic one in tests.
//!
//! ## Usage
//! ```rust
//! use kernel::id::{IdKind, IdentifierSource, NanoidSource};
//!
//! let id = NanoidSource.mint(IdKind::Board);
//! assert!(id.starts_with('b'));
//! assert_eq!(id.len(), 22);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use nid::Nanoid;

/// Kind of entity an identifier is minted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Board,
    Card,
    View,
    Block,
}

impl IdKind {
    /// One-letter prefix carried by every id of this kind
    #[inline]
    pub const fn prefix(&self) -> char {
        match self {
            IdKind::Board => 'b',
            IdKind::Card => 'c',
            IdKind::View => 'v',
            IdKind::Block => 'a',
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdKind::Board => "board",
            IdKind::Card => "card",
            IdKind::View => "view",
            IdKind::Block => "block",
        };
        f.write_str(name)
    }
}

/// Source of globally unique identifiers.
///
/// Implementations are shared between in-flight requests and must never hand
/// out the same identifier twice, whichever thread calls `mint`.
pub trait IdentifierSource: Send + Sync {
    /// Mint a fresh identifier for an entity of `kind`
    fn mint(&self, kind: IdKind) -> String;
}

/// Production source: prefix + 21-character nanoid
#[derive(Debug, Clone, Copy, Default)]
pub struct NanoidSource;

impl IdentifierSource for NanoidSource {
    fn mint(&self, kind: IdKind) -> String {
        let body: Nanoid = Nanoid::new();
        format!("{}{}", kind.prefix(), body.as_str())
    }
}

/// Deterministic source: prefix + zero-padded counter.
///
/// Ids are `b00000000000000000001`, `a00000000000000000002`, ... in mint order.
#[derive(Debug, Default)]
pub struct SequentialSource {
    next: AtomicU64,
}

impl SequentialSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids minted so far
    pub fn minted(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl IdentifierSource for SequentialSource {
    fn mint(&self, kind: IdKind) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}{:020}", kind.prefix(), n)
    }
}
