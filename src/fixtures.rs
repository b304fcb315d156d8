//! Shared test fixtures: sample models, snapshots, and definition documents.

use crate::schema::definition::{Field, FieldType, Model, Relation, RelationKind, Snapshot};

/// Builds a field.
pub fn field(name: &str, data_type: FieldType) -> Field {
    Field {
        name: name.to_string(),
        data_type,
    }
}

/// Builds a model from (field name, field type) pairs.
pub fn model(name: &str, fields: &[(&str, FieldType)]) -> Model {
    Model {
        name: name.to_string(),
        fields: fields.iter().map(|(n, t)| field(n, *t)).collect(),
    }
}

/// Builds a relation.
pub fn relation(from: &str, to: &str, kind: RelationKind) -> Relation {
    Relation {
        from_model: from.to_string(),
        to_model: to.to_string(),
        kind,
    }
}

/// The standard two-model snapshot: `User { name, email }`,
/// `Post { title }`, and one `User -> Post` relation of the given kind.
pub fn user_post_snapshot(kind: RelationKind) -> Snapshot {
    Snapshot {
        models: vec![
            model("User", &[("name", FieldType::String), ("email", FieldType::String)]),
            model("Post", &[("title", FieldType::String)]),
        ],
        relations: vec![relation("User", "Post", kind)],
    }
}

/// A definition document exercising fields, the `role` cast, and a
/// `oneToMany` relation. Used by command execute tests.
pub const BLOG_DEFINITION: &str = r#"{
    "models": [
        {
            "name": "User",
            "fields": [
                {"name": "email", "type": "String"},
                {"name": "role", "type": "String"}
            ]
        },
        {
            "name": "Post",
            "fields": [
                {"name": "title", "type": "String"},
                {"name": "published", "type": "Boolean"}
            ]
        }
    ],
    "relations": [
        {"fromModel": "User", "toModel": "Post", "type": "oneToMany"}
    ]
}"#;

/// A definition document with no models.
pub const EMPTY_DEFINITION: &str = r#"{"models": [], "relations": []}"#;
