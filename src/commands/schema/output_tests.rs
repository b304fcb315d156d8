//! Output formatting tests for schema command.

#[cfg(test)]
mod tests {
    use super::super::execute::SchemaResult;
    use crate::fixtures::user_post_snapshot;
    use crate::schema::definition::RelationKind;
    use crate::schema::emitters::PrismaEmitter;
    use rstest::{fixture, rstest};

    const EMPTY_TABLE: &str = "No models defined.";

    const USER_POST_TABLE: &str = "\
model User {
  id Int @id @default(autoincrement())
  name String
  email String
  posts Post[]
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt

  @@map(\"users\")
}

model Post {
  id Int @id @default(autoincrement())
  title String
  user User @relation(fields: [userId], references: [id])
  userId Int
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt

  @@map(\"posts\")
}";

    #[fixture]
    fn empty_result() -> SchemaResult {
        SchemaResult::default()
    }

    #[fixture]
    fn user_post_result() -> SchemaResult {
        let snapshot = user_post_snapshot(RelationKind::OneToMany);
        SchemaResult {
            schema: PrismaEmitter::emit(&snapshot.models, &snapshot.relations),
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: SchemaResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_user_post,
        fixture: user_post_result,
        fixture_type: SchemaResult,
        expected: USER_POST_TABLE,
    }

    #[rstest]
    fn test_format_json_preserves_exact_bytes(user_post_result: SchemaResult) {
        use crate::output::{OutputFormat, Outputable};

        let output = user_post_result.format(OutputFormat::Json);
        let parsed: serde_json::Value =
            serde_json::from_str(&output).expect("Should produce valid JSON");

        // The JSON pane carries the emitter output untrimmed.
        let schema = parsed["schema"].as_str().expect("schema should be a string");
        assert!(schema.ends_with("}\n\n"));
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: user_post_result,
        fixture_type: SchemaResult,
        contains: ["schema"],
    }
}
