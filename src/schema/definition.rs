//! Core model definition types.
//!
//! Provides an emitter-agnostic type system for describing user-defined data
//! models and the relations between them. These types form the foundation for
//! both Prisma schema and TypeScript factory generation, and double as the
//! serde data model for JSON definition documents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents a field data type.
///
/// Serialized under its Prisma spelling, which is also what the schema
/// emitter prints via `prisma_type()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// String/text data
    #[default]
    String,
    /// Integer data
    Int,
    /// Boolean data
    Boolean,
    /// Date and time data
    DateTime,
}

impl FieldType {
    /// Returns the Prisma type name for this field type.
    pub fn prisma_type(&self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Int => "Int",
            FieldType::Boolean => "Boolean",
            FieldType::DateTime => "DateTime",
        }
    }
}

/// Represents a user-defined field in a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name (e.g., "title", "email")
    pub name: String,

    /// Field data type
    #[serde(rename = "type")]
    pub data_type: FieldType,
}

/// Represents a user-defined model.
///
/// Field order is preserved and significant: it drives emitted field order
/// and factory-method parameter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model name (unique among committed models, non-empty)
    pub name: String,

    /// User fields in insertion order
    pub fields: Vec<Field>,
}

impl Model {
    /// Returns the TypeScript class name: the model name with its first
    /// character upper-cased.
    pub fn class_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Cardinality of a relation between two models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    /// One-to-one
    #[default]
    OneToOne,
    /// One-to-many
    OneToMany,
    /// Many-to-one
    ManyToOne,
    /// Many-to-many
    ManyToMany,
}

/// Which end of a relation a model sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationSide {
    From,
    To,
}

/// A directed, typed association between two models.
///
/// Endpoints reference models by name (weak reference). The store prunes
/// relations when a referenced model is deleted; the emitters treat a lookup
/// miss as "no related model found".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Name of the model on the `from` end
    pub from_model: String,

    /// Name of the model on the `to` end
    pub to_model: String,

    /// Relation cardinality
    #[serde(rename = "type")]
    pub kind: RelationKind,
}

impl Relation {
    /// Returns true if either endpoint names the given model.
    pub fn touches(&self, model_name: &str) -> bool {
        self.from_model == model_name || self.to_model == model_name
    }

    /// Returns which end of this relation the given model sits on.
    ///
    /// The `from` end is checked first: a self-relation resolves to
    /// `RelationSide::From`.
    pub fn side_of(&self, model_name: &str) -> Option<RelationSide> {
        if self.from_model == model_name {
            Some(RelationSide::From)
        } else if self.to_model == model_name {
            Some(RelationSide::To)
        } else {
            None
        }
    }

    /// Returns the endpoint name opposite the given model.
    pub fn other_end(&self, model_name: &str) -> &str {
        if self.from_model == model_name {
            &self.to_model
        } else {
            &self.from_model
        }
    }

    /// Returns true if the given model's factory method takes a foreign-key
    /// parameter for this relation.
    ///
    /// `oneToOne` and `manyToOne` contribute one on both ends; `oneToMany`
    /// only on the `to` end; `manyToMany` never.
    pub fn takes_foreign_key(&self, model_name: &str) -> bool {
        match self.kind {
            RelationKind::OneToOne | RelationKind::ManyToOne => true,
            RelationKind::OneToMany => self.to_model == model_name,
            RelationKind::ManyToMany => false,
        }
    }
}

/// Finds a committed model by name.
pub fn find_model<'a>(models: &'a [Model], name: &str) -> Option<&'a Model> {
    models.iter().find(|m| m.name == name)
}

/// An immutable view of the committed models and relations.
///
/// This is the value both emitters consume, and the shape of a JSON
/// definition document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Committed models in insertion order
    #[serde(default)]
    pub models: Vec<Model>,

    /// Relations in insertion order
    #[serde(default)]
    pub relations: Vec<Relation>,
}

#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Failed to read definition file {path}: {message}")]
    FileReadFailed { path: String, message: String },

    #[error("Invalid JSON in definition file: {message}")]
    JsonParseFailed { message: String },
}

impl Snapshot {
    /// Load a snapshot from a JSON definition document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is invalid.
    pub fn from_file(path: &Path) -> Result<Self, DefinitionError> {
        let content = fs::read_to_string(path).map_err(|e| DefinitionError::FileReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| DefinitionError::JsonParseFailed {
            message: e.to_string(),
        })
    }
}
