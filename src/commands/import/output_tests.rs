//! Output formatting tests for import command.

#[cfg(test)]
mod tests {
    use super::super::execute::ImportResult;
    use crate::loader::RunOutcome;
    use rstest::{fixture, rstest};

    const COMMAND: &str = r#"ogr2ogr -f PostgreSQL PG:"dbname=geomars user=postgres password=password" costard_craters_min_3.json"#;

    const EXITED_TABLE_OUTPUT: &str = "\
ogr2ogr -f PostgreSQL PG:\"dbname=geomars user=postgres password=password\" costard_craters_min_3.json
Child returned 2";

    const EXITED_JSON_OUTPUT: &str = r#"{
  "command": "ogr2ogr -f PostgreSQL PG:\"dbname=geomars user=postgres password=password\" costard_craters_min_3.json",
  "dry_run": false,
  "outcome": {
    "status": "exited",
    "code": 2
  }
}"#;

    #[fixture]
    fn exited_result() -> ImportResult {
        ImportResult {
            command: COMMAND.to_string(),
            dry_run: false,
            outcome: Some(RunOutcome::Exited { code: 2 }),
            streamed: false,
        }
    }

    #[fixture]
    fn dry_run_result() -> ImportResult {
        ImportResult {
            command: COMMAND.to_string(),
            dry_run: true,
            outcome: None,
            streamed: false,
        }
    }

    #[fixture]
    fn signaled_result() -> ImportResult {
        ImportResult {
            command: COMMAND.to_string(),
            dry_run: false,
            outcome: Some(RunOutcome::Signaled { signal: 15 }),
            streamed: false,
        }
    }

    #[fixture]
    fn streamed_result() -> ImportResult {
        ImportResult {
            streamed: true,
            ..exited_result()
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_exited,
        fixture: exited_result,
        fixture_type: ImportResult,
        expected: EXITED_TABLE_OUTPUT,
    }

    crate::output_table_test! {
        test_name: test_to_table_dry_run,
        fixture: dry_run_result,
        fixture_type: ImportResult,
        expected: COMMAND,
    }

    crate::output_table_test! {
        test_name: test_to_table_streamed_is_empty,
        fixture: streamed_result,
        fixture_type: ImportResult,
        expected: "",
    }

    crate::output_table_contains_test! {
        test_name: test_to_table_signaled,
        fixture: signaled_result,
        fixture_type: ImportResult,
        contains: ["Child was terminated by signal 15"],
    }

    crate::output_table_test! {
        test_name: test_format_json,
        fixture: exited_result,
        fixture_type: ImportResult,
        expected: EXITED_JSON_OUTPUT,
        format: Json,
    }

    crate::output_json_test! {
        test_name: test_format_json_dry_run,
        fixture: dry_run_result,
        fixture_type: ImportResult,
        assertions: {
            "dry_run": true,
            "outcome": serde_json::Value::Null,
        },
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: exited_result,
        fixture_type: ImportResult,
        contains: ["dry_run: false", "status: exited"],
    }
}
