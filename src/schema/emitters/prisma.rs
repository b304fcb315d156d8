//! Prisma schema emitter.
//!
//! Generates Prisma schema text (`model ... { ... }` blocks) from the
//! model/relation snapshot. The output format is deterministic: model blocks
//! follow store order, fields follow stored field order, and relation-derived
//! fields follow stored relation order. No sorting, no deduplication.

use crate::schema::definition::{find_model, Model, Relation, RelationKind, RelationSide};

/// Emitter for generating Prisma schema text from model definitions.
pub struct PrismaEmitter;

impl PrismaEmitter {
    /// Generate a Prisma model block for a single model.
    ///
    /// Produces output in the format:
    /// ```prisma
    /// model User {
    ///   id Int @id @default(autoincrement())
    ///   email String
    ///   posts Post[]
    ///   createdAt DateTime @default(now())
    ///   updatedAt DateTime @updatedAt
    ///
    ///   @@map("users")
    /// }
    /// ```
    ///
    /// The identity field and the two timestamp fields are implicit; user
    /// fields and relation-derived fields sit between them. A relation
    /// endpoint that names no committed model contributes nothing.
    pub fn emit_model(model: &Model, models: &[Model], relations: &[Relation]) -> String {
        let mut lines = Vec::new();

        lines.push(format!("model {} {{", model.name));
        lines.push("  id Int @id @default(autoincrement())".to_string());

        for field in &model.fields {
            lines.push(format!("  {} {}", field.name, field.data_type.prisma_type()));
        }

        for relation in relations {
            let Some(side) = relation.side_of(&model.name) else {
                continue;
            };
            let Some(related) = find_model(models, relation.other_end(&model.name)) else {
                continue;
            };
            let lower = related.name.to_lowercase();

            match (side, relation.kind) {
                (RelationSide::From, RelationKind::OneToOne) => {
                    lines.push(format!("  {} {}?", lower, related.name));
                }
                (RelationSide::From, RelationKind::OneToMany | RelationKind::ManyToMany) => {
                    lines.push(format!("  {}s {}[]", lower, related.name));
                }
                // The from side of a manyToOne emits no field; the relation
                // surfaces on the to side only.
                (RelationSide::From, RelationKind::ManyToOne) => {}
                (RelationSide::To, _) => {
                    lines.push(format!(
                        "  {} {} @relation(fields: [{}Id], references: [id])",
                        lower, related.name, lower
                    ));
                    lines.push(format!("  {}Id Int", lower));
                }
            }
        }

        lines.push("  createdAt DateTime @default(now())".to_string());
        lines.push("  updatedAt DateTime @updatedAt".to_string());
        lines.push(String::new());
        lines.push(format!("  @@map(\"{}s\")", model.name.to_lowercase()));
        lines.push("}".to_string());

        lines.join("\n")
    }

    /// Generate the full schema document for all models.
    ///
    /// Model blocks follow store order, each followed by a blank line.
    /// An empty model list produces an empty string.
    pub fn emit(models: &[Model], relations: &[Relation]) -> String {
        models
            .iter()
            .map(|model| format!("{}\n\n", Self::emit_model(model, models, relations)))
            .collect()
    }
}
