//! The check command: the whole Locate → Parse → Analyze → Report pipeline.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::analyzer::collect_issues;
use crate::error::{EnvcheckError, Result};
use crate::locator::{find_env_file, CANDIDATE_FILES};
use crate::parser::parse;
use crate::report::{HumanFormatter, Report};

use super::CommandResult;

/// Runs one full check against a directory.
pub struct CheckCommand {
    dir: PathBuf,
    use_color: bool,
}

impl CheckCommand {
    /// Create a check command for the given directory.
    pub fn new(dir: &Path, use_color: bool) -> Self {
        Self {
            dir: dir.to_path_buf(),
            use_color,
        }
    }

    /// Execute the pipeline, writing the report to `writer`.
    ///
    /// Finding no candidate file is a normal outcome: an informational
    /// message is written and the run ends successfully. A located file
    /// that cannot be read is the one condition that propagates as an
    /// error.
    pub fn execute<W: Write>(&self, writer: &mut W) -> Result<CommandResult> {
        let Some(path) = find_env_file(&self.dir) else {
            writeln!(
                writer,
                "No environment file found (looked for {}).",
                CANDIDATE_FILES.join(", ")
            )?;
            writeln!(writer, "Nothing to check here.")?;
            return Ok(CommandResult::success());
        };

        // The file can vanish or lose permissions between the existence
        // check above and this read; both surface here. Decoding is
        // lossy: malformed UTF-8 becomes replacement characters and falls
        // out as unparsable lines rather than ending the run.
        let bytes = fs::read(&path).map_err(|e| EnvcheckError::ReadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let parsed = parse(&content);
        tracing::debug!(
            "Parsed {}: {} variable(s), {} unparsable line(s)",
            path.display(),
            parsed.variables.len(),
            parsed.issues.len()
        );

        let issues = collect_issues(&parsed);
        let report = Report::new(path, parsed.variables, issues);

        HumanFormatter::new(self.use_color).format(&report, writer)?;

        Ok(CommandResult::success())
    }
}
