//! In-memory model/relation store.
//!
//! Holds the committed models and relations plus the in-progress model draft,
//! and exposes the user-facing edit operations. Every mutation is guarded by
//! precondition checks that silently no-op on invalid input (empty draft
//! name, fewer than two models, out-of-range index); none of them can fail.
//!
//! The store itself is never passed to the emitters. Generation runs against
//! `snapshot()`, an immutable copy of the committed state.

use std::mem;

use crate::schema::definition::{Field, FieldType, Model, Relation, RelationKind, Snapshot};

/// Mutable session state: committed models/relations and the model draft.
#[derive(Debug, Clone, Default)]
pub struct Store {
    models: Vec<Model>,
    relations: Vec<Relation>,
    draft: Model,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed models in insertion order.
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Relations in insertion order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// The in-progress model draft.
    pub fn draft(&self) -> &Model {
        &self.draft
    }

    /// Appends a blank field (empty name, type `String`) to the draft.
    pub fn add_field(&mut self) {
        self.draft.fields.push(Field {
            name: String::new(),
            data_type: FieldType::String,
        });
    }

    /// Sets the draft model's name.
    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Edits one draft field by position. Out-of-range index no-ops.
    pub fn set_draft_field(&mut self, index: usize, name: impl Into<String>, data_type: FieldType) {
        if let Some(field) = self.draft.fields.get_mut(index) {
            field.name = name.into();
            field.data_type = data_type;
        }
    }

    /// Commits the draft to the store and clears it.
    ///
    /// No-ops if the draft name is empty or the draft has no fields.
    pub fn add_model(&mut self) {
        if self.draft.name.is_empty() || self.draft.fields.is_empty() {
            return;
        }
        self.models.push(mem::take(&mut self.draft));
    }

    /// Removes one field from one committed model by position.
    pub fn delete_field(&mut self, model_index: usize, field_index: usize) {
        if let Some(model) = self.models.get_mut(model_index) {
            if field_index < model.fields.len() {
                model.fields.remove(field_index);
            }
        }
    }

    /// Removes one model by position, cascading removal of every relation
    /// naming it on either end.
    pub fn delete_model(&mut self, model_index: usize) {
        if model_index >= self.models.len() {
            return;
        }
        let removed = self.models.remove(model_index);
        self.relations.retain(|r| !r.touches(&removed.name));
    }

    /// Appends a default relation: `oneToOne` between the store's first two
    /// models. No-ops with fewer than two models.
    pub fn add_relation(&mut self) {
        if self.models.len() < 2 {
            return;
        }
        self.relations.push(Relation {
            from_model: self.models[0].name.clone(),
            to_model: self.models[1].name.clone(),
            kind: RelationKind::OneToOne,
        });
    }

    /// Edits one relation by position. Out-of-range index no-ops.
    pub fn set_relation(
        &mut self,
        index: usize,
        from_model: impl Into<String>,
        to_model: impl Into<String>,
        kind: RelationKind,
    ) {
        if let Some(relation) = self.relations.get_mut(index) {
            relation.from_model = from_model.into();
            relation.to_model = to_model.into();
            relation.kind = kind;
        }
    }

    /// Removes one relation by position. Out-of-range index no-ops.
    pub fn delete_relation(&mut self, index: usize) {
        if index < self.relations.len() {
            self.relations.remove(index);
        }
    }

    /// Returns the committed state as an immutable snapshot.
    ///
    /// The draft is not part of the snapshot; only committed models generate
    /// output.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            models: self.models.clone(),
            relations: self.relations.clone(),
        }
    }
}
