//! Execute tests for schema command.

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::super::SchemaCmd;
    use crate::fixtures::{BLOG_DEFINITION, EMPTY_DEFINITION};

    crate::definition_fixture! {
        fixture_name: blog_definition,
        json: BLOG_DEFINITION,
    }

    crate::definition_fixture! {
        fixture_name: empty_definition,
        json: EMPTY_DEFINITION,
    }

    crate::execute_test! {
        test_name: test_schema_emits_model_blocks,
        fixture: blog_definition,
        cmd: SchemaCmd {},
        assertions: |result| {
            assert!(result.schema.contains("model User {"));
            assert!(result.schema.contains("model Post {"));
            assert!(result.schema.contains("  id Int @id @default(autoincrement())\n"));
            assert!(result.schema.contains("  createdAt DateTime @default(now())\n"));
            assert!(result.schema.contains("  updatedAt DateTime @updatedAt\n"));
        },
    }

    crate::execute_test! {
        test_name: test_schema_relation_fields,
        fixture: blog_definition,
        cmd: SchemaCmd {},
        assertions: |result| {
            assert!(result.schema.contains("  posts Post[]\n"));
            assert!(result.schema.contains("  userId Int\n"));
        },
    }

    crate::execute_test! {
        test_name: test_schema_empty_definition,
        fixture: empty_definition,
        cmd: SchemaCmd {},
        assertions: |result| {
            assert_eq!(result.schema, "");
        },
    }

    crate::execute_missing_definition_test! {
        cmd_type: SchemaCmd,
        cmd: SchemaCmd {},
    }

    crate::execute_invalid_json_test! {
        cmd_type: SchemaCmd,
        cmd: SchemaCmd {},
    }
}
