//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Board, Block) and patch documents
//! - Batch request shapes and their validators
//! - Domain services (identifier remapping)
//! - Repository traits (interfaces)

pub mod batch;
pub mod entities;
pub mod patches;
pub mod repository;
pub mod services;
