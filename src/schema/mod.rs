//! Emitter-agnostic model definitions and the two text emitters.
//!
//! This module provides structured definitions for user-authored data models,
//! allowing both output dialects to be generated from a single source of
//! truth.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `FieldType` - Enum of field data types (String, Int, Boolean, DateTime)
//!    - `Field` / `Model` - A named model with ordered, typed fields
//!    - `RelationKind` / `Relation` - A directed, typed association between models
//!    - `Snapshot` - The immutable models + relations value fed to the emitters
//!
//! 2. **Emitters** (`emitters/`):
//!    - `PrismaEmitter` - Prisma schema blocks with implicit id/timestamp
//!      fields and relation-derived reference fields
//!    - `TypeScriptEmitter` - `static from(...)` factory methods with
//!      relation-derived foreign-key parameters
//!
//! Both emitters are pure functions over the snapshot: same input, same
//! bytes out.

pub mod definition;
pub mod emitters;

pub use definition::{
    DefinitionError, Field, FieldType, Model, Relation, RelationKind, RelationSide, Snapshot,
};
pub use emitters::{PrismaEmitter, TypeScriptEmitter};
