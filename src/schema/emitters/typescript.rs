//! TypeScript factory-method emitter.
//!
//! Generates `static from(...)` factory snippets, one per model, mapping a
//! persistence-layer record onto the model's in-memory class. Mirrors the
//! relation logic of the Prisma emitter with a different output grammar:
//! relations contribute foreign-key parameters rather than reference fields.

use crate::schema::definition::{Model, Relation};

/// Emitter for generating TypeScript factory methods from model definitions.
pub struct TypeScriptEmitter;

impl TypeScriptEmitter {
    /// Generate the factory method for a single model.
    ///
    /// Produces output in the format:
    /// ```typescript
    /// static from({
    ///   id,
    ///   title,
    ///     userId,
    /// }: PostPrisma) {
    ///   return new Post({
    ///     id: id,
    ///     title: title,
    ///     userId: userId,
    ///   });
    /// }
    /// ```
    ///
    /// Parameters are the identity field, each user field in stored order,
    /// then one `<other>Id` per foreign-key-bearing relation in stored order.
    /// A field literally named `role` is narrowed with an `as Role` cast on
    /// assignment; every other field passes through unmodified.
    pub fn emit_factory(model: &Model, relations: &[Relation]) -> String {
        let class_name = model.class_name();
        let foreign_keys: Vec<String> = relations
            .iter()
            .filter(|r| r.touches(&model.name) && r.takes_foreign_key(&model.name))
            .map(|r| r.other_end(&model.name).to_lowercase())
            .collect();

        let mut lines = Vec::new();

        lines.push("static from({".to_string());
        lines.push("  id,".to_string());
        for field in &model.fields {
            lines.push(format!("  {},", field.name));
        }
        for lower in &foreign_keys {
            lines.push(format!("    {}Id,", lower));
        }
        lines.push(format!("}}: {}Prisma) {{", class_name));

        lines.push(format!("  return new {}({{", class_name));
        lines.push("    id: id,".to_string());
        for field in &model.fields {
            if field.name == "role" {
                lines.push(format!("    {}: {} as Role,", field.name, field.name));
            } else {
                lines.push(format!("    {}: {},", field.name, field.name));
            }
        }
        for lower in &foreign_keys {
            lines.push(format!("    {}Id: {}Id,", lower, lower));
        }
        lines.push("  });".to_string());
        lines.push("}".to_string());

        lines.join("\n")
    }

    /// Generate factory methods for all models.
    ///
    /// Snippets follow store order, each followed by a blank line. An empty
    /// model list produces an empty string.
    pub fn emit(models: &[Model], relations: &[Relation]) -> String {
        models
            .iter()
            .map(|model| format!("{}\n\n", Self::emit_factory(model, relations)))
            .collect()
    }
}
