//! Declarative macros for generating CLI parsing tests.
//!
//! This module provides macros to reduce boilerplate in CLI argument parsing
//! tests. Instead of writing repetitive test functions, you can declare the
//! test cases and let the macro generate the actual test code.

/// Generate a test that verifies a command line parses to the expected
/// command variant.
#[macro_export]
macro_rules! cli_variant_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        variant: $variant:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from(["schema_gen", $($arg),+]).unwrap();
            assert!(
                matches!(args.command, crate::commands::Command::$variant(_)),
                concat!("Expected ", stringify!($variant), " command")
            );
        }
    };
}

/// Generate a test for a global (Args-level) option value.
#[macro_export]
macro_rules! cli_global_option_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from(["schema_gen", $($arg),+]).unwrap();
            assert_eq!(args.$field, $expected,
                concat!("Field ", stringify!($field), " mismatch"));
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
///
/// # Example
///
/// ```ignore
/// cli_error_test! {
///     test_name: test_bad_format_rejected,
///     args: ["generate", "--format", "yaml"],
/// }
/// ```
#[macro_export]
macro_rules! cli_error_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),*] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["schema_gen", $($arg),*]);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a fixture that writes a definition document to a temp file.
///
/// This creates the standard definition-file fixture used by execute tests.
#[macro_export]
macro_rules! definition_fixture {
    (
        fixture_name: $name:ident,
        json: $json:expr $(,)?
    ) => {
        #[fixture]
        fn $name() -> tempfile::NamedTempFile {
            use std::io::Write;
            let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
            file.write_all($json.as_bytes())
                .expect("Failed to write temp file");
            file
        }
    };
}

/// Generate a test that executes a command against a definition fixture and
/// runs assertions on the result.
///
/// # Example
/// ```ignore
/// execute_test! {
///     test_name: test_generate_blog,
///     fixture: blog_definition,
///     cmd: GenerateCmd {},
///     assertions: |result| {
///         assert!(result.schema.contains("model User {"));
///     },
/// }
/// ```
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        assertions: $assertions:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: tempfile::NamedTempFile) {
            use crate::commands::Execute;
            let result = $cmd.execute($fixture.path()).expect("Command should succeed");
            fn __apply<T>(r: T, f: impl FnOnce(T)) { f(r) }
            __apply(result, $assertions);
        }
    };
}

/// Generate a test that verifies command execution fails when the definition
/// document does not exist.
#[macro_export]
macro_rules! execute_missing_definition_test {
    (
        cmd_type: $cmd_type:ty,
        cmd: $cmd:expr $(,)?
    ) => {
        #[rstest]
        fn test_missing_definition() {
            use crate::commands::Execute;
            let cmd: $cmd_type = $cmd;
            let result = cmd.execute(std::path::Path::new("./no_such_definition.json"));
            assert!(result.is_err());
        }
    };
}

/// Generate a test that verifies command execution fails on malformed JSON.
#[macro_export]
macro_rules! execute_invalid_json_test {
    (
        cmd_type: $cmd_type:ty,
        cmd: $cmd:expr $(,)?
    ) => {
        #[rstest]
        fn test_invalid_json() {
            use crate::commands::Execute;
            use std::io::Write;
            let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
            file.write_all(b"{ invalid json }")
                .expect("Failed to write temp file");
            let cmd: $cmd_type = $cmd;
            let result = cmd.execute(file.path());
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies table output matches expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
///
/// # Example
/// ```ignore
/// output_table_test! {
///     test_name: test_to_table_empty,
///     fixture: empty_result,
///     fixture_type: GenerateResult,
///     expected: EMPTY_TABLE,
/// }
/// ```
#[macro_export]
macro_rules! output_table_test {
    // With format parameter (Json, Toon)
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    // Default table format
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies table output contains expected strings.
///
/// Use this when exact string matching is too brittle.
#[macro_export]
macro_rules! output_table_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            let output = $fixture.to_table();
            $(
                assert!(output.contains($needle), concat!("Table output should contain: ", $needle));
            )*
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
///
/// # Example
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json,
///     fixture: blog_result,
///     fixture_type: GenerateResult,
///     assertions: {
///         "schema": "model User {\n...",
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
