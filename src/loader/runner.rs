//! Launches the load command and reports how it ended.

use std::io::{self, Write};
use tracing::info;

use super::command::LoadCommand;
use super::config::LoaderConfig;
use super::outcome::RunOutcome;

/// Runs one load command synchronously.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    config: LoaderConfig,
}

impl CommandRunner {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn command(&self) -> LoadCommand {
        LoadCommand::new(&self.config)
    }

    /// Launch the command, wait for it, and classify the result.
    ///
    /// Writes nothing to the console; failures to launch come back as
    /// [`RunOutcome::LaunchFailed`] rather than as an error.
    pub fn execute(&self) -> RunOutcome {
        let command = self.command();
        info!(
            command = %LoadCommand::new(&self.config.redacted()),
            "launching load command"
        );

        match command.to_process().status() {
            Ok(status) => {
                let outcome = RunOutcome::from_status(status);
                info!(%outcome, success = outcome.is_success(), "load command finished");
                outcome
            }
            Err(e) => {
                info!(error = %e, program = command.program(), "failed to launch load command");
                RunOutcome::launch_failed(&e)
            }
        }
    }

    /// Print the command line to `out`, run it, then print the outcome to `err`.
    ///
    /// Console write errors are ignored so that the outcome is always returned.
    pub fn run_reporting<O, E>(&self, out: &mut O, err: &mut E) -> RunOutcome
    where
        O: Write,
        E: Write,
    {
        let _ = writeln!(out, "{}", self.command());
        let _ = out.flush();

        let outcome = self.execute();

        let _ = writeln!(err, "{}", outcome);
        let _ = err.flush();
        outcome
    }

    /// [`run_reporting`](Self::run_reporting) on the process stdout and stderr.
    pub fn run(&self) -> RunOutcome {
        self.run_reporting(&mut io::stdout(), &mut io::stderr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::process_lock;
    #[cfg(unix)]
    use crate::test_utils::stub_tool;
    use rstest::{fixture, rstest};
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    const DEFAULT_LINE_TAIL: &str =
        r#" -f PostgreSQL PG:"dbname=geomars user=postgres password=password" costard_craters_min_3.json"#;

    #[fixture]
    fn stub_dir() -> TempDir {
        tempdir().unwrap()
    }

    fn runner_for(tool: &str) -> CommandRunner {
        CommandRunner::new(LoaderConfig {
            tool: tool.to_string(),
            ..LoaderConfig::default()
        })
    }

    fn run_captured(runner: &CommandRunner) -> (RunOutcome, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = runner.run_reporting(&mut out, &mut err);
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[rstest]
    fn test_command_comes_from_config() {
        let runner = runner_for("ogr2ogr");
        assert_eq!(runner.command(), LoadCommand::new(runner.config()));
    }

    #[rstest]
    fn test_missing_tool_reports_launch_failure(stub_dir: TempDir) {
        let _lock = process_lock();
        let missing: PathBuf = stub_dir.path().join("no-such-ogr2ogr");
        let runner = runner_for(missing.to_str().unwrap());

        let (outcome, out, err) = run_captured(&runner);

        let expected = std::io::Error::from_raw_os_error(2).to_string();
        assert_eq!(
            outcome,
            RunOutcome::LaunchFailed {
                message: expected.clone()
            }
        );
        assert_eq!(out, format!("{}{}\n", missing.display(), DEFAULT_LINE_TAIL));
        assert_eq!(err, format!("Execution failed: {}\n", expected));
    }

    #[cfg(unix)]
    #[rstest]
    fn test_successful_tool(stub_dir: TempDir) {
        let _lock = process_lock();
        let tool = stub_tool(stub_dir.path(), "ogr2ogr", "exit 0");
        let runner = runner_for(tool.to_str().unwrap());

        let (outcome, out, err) = run_captured(&runner);

        assert_eq!(outcome, RunOutcome::Exited { code: 0 });
        assert_eq!(out, format!("{}{}\n", tool.display(), DEFAULT_LINE_TAIL));
        assert_eq!(err, "Child returned 0\n");
    }

    #[cfg(unix)]
    #[rstest]
    fn test_failing_tool(stub_dir: TempDir) {
        let _lock = process_lock();
        let tool = stub_tool(stub_dir.path(), "ogr2ogr", "exit 2");
        let runner = runner_for(tool.to_str().unwrap());

        let (outcome, _out, err) = run_captured(&runner);

        assert_eq!(outcome, RunOutcome::Exited { code: 2 });
        assert_eq!(err, "Child returned 2\n");
    }

    #[cfg(unix)]
    #[rstest]
    fn test_signaled_tool(stub_dir: TempDir) {
        let _lock = process_lock();
        let tool = stub_tool(stub_dir.path(), "ogr2ogr", "kill -9 $$");
        let runner = runner_for(tool.to_str().unwrap());

        let (outcome, _out, err) = run_captured(&runner);

        assert_eq!(outcome, RunOutcome::Signaled { signal: 9 });
        assert_eq!(err, "Child was terminated by signal 9\n");
    }

    #[cfg(unix)]
    #[rstest]
    fn test_tool_receives_unquoted_arguments(stub_dir: TempDir) {
        let _lock = process_lock();
        let args_file = stub_dir.path().join("args.txt");
        let body = format!("printf '%s\\n' \"$@\" > '{}'", args_file.display());
        let tool = stub_tool(stub_dir.path(), "ogr2ogr", &body);
        let runner = runner_for(tool.to_str().unwrap());

        let outcome = runner.execute();

        assert!(outcome.is_success());
        let received = std::fs::read_to_string(&args_file).unwrap();
        assert_eq!(
            received,
            "-f\nPostgreSQL\nPG:dbname=geomars user=postgres password=password\ncostard_craters_min_3.json\n"
        );
    }

    #[cfg(unix)]
    #[rstest]
    fn test_execute_returns_exit_code(stub_dir: TempDir) {
        let _lock = process_lock();
        let tool = stub_tool(stub_dir.path(), "ogr2ogr", "exit 5");
        let runner = runner_for(tool.to_str().unwrap());

        assert_eq!(runner.execute(), RunOutcome::Exited { code: 5 });
    }
}
