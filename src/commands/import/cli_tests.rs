//! CLI parsing tests for import command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    // =========================================================================
    // Macro-generated tests (standard patterns)
    // =========================================================================

    crate::cli_defaults_test! {
        command: "import",
        variant: Import,
        required_args: [],
        defaults: {
            file: None::<PathBuf>,
            tool: None::<String>,
            dry_run: false,
            connection.dbname: None::<String>,
            connection.port: None::<u16>,
        },
    }

    crate::cli_option_test! {
        command: "import",
        variant: Import,
        test_name: test_with_file,
        args: ["--file", "craters.json"],
        field: file,
        expected: Some(PathBuf::from("craters.json")),
    }

    crate::cli_option_test! {
        command: "import",
        variant: Import,
        test_name: test_with_tool_short,
        args: ["-t", "/usr/local/bin/ogr2ogr"],
        field: tool,
        expected: Some("/usr/local/bin/ogr2ogr".to_string()),
    }

    crate::cli_option_test! {
        command: "import",
        variant: Import,
        test_name: test_with_dbname,
        args: ["-d", "mars"],
        field: connection.dbname,
        expected: Some("mars".to_string()),
    }

    crate::cli_option_test! {
        command: "import",
        variant: Import,
        test_name: test_with_user,
        args: ["-U", "loader"],
        field: connection.user,
        expected: Some("loader".to_string()),
    }

    crate::cli_option_test! {
        command: "import",
        variant: Import,
        test_name: test_with_port,
        args: ["--port", "5433"],
        field: connection.port,
        expected: Some(5433),
    }

    crate::cli_option_test! {
        command: "import",
        variant: Import,
        test_name: test_with_dry_run,
        args: ["--dry-run"],
        field: dry_run,
        expected: true,
    }

    crate::cli_error_test! {
        command: "import",
        test_name: test_port_must_be_numeric,
        args: ["--port", "abc"],
    }

    crate::cli_error_test! {
        command: "import",
        test_name: test_port_out_of_range,
        args: ["--port", "70000"],
    }

    // =========================================================================
    // Edge case tests
    // =========================================================================

    #[rstest]
    fn test_file_is_not_validated_at_parse_time() {
        let result =
            Args::try_parse_from(["geoload", "import", "--file", "nonexistent_file.json"]);
        assert!(result.is_ok());
    }
}
