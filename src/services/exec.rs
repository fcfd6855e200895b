use crate::domain::models::ExecReport;
use anyhow::Context;
use log::{debug, info};
use std::path::Path;
use std::process::Command;

/// Invoke an external command synchronously with stdio inherited.
///
/// Failure to start the command (missing program or script) is an error.
/// A non-zero child exit is not: it lands in `ExecReport::exit_code` so the
/// caller can propagate it as the process exit code. A child killed by a
/// signal reports exit code 1.
pub fn run(
    program: &Path,
    args: &[&str],
    workdir: &Path,
    dry_run: bool,
) -> anyhow::Result<ExecReport> {
    let shown = program.display().to_string();
    let owned_args: Vec<String> = args.iter().map(|a| a.to_string()).collect();

    if dry_run {
        info!("would run {} {}", shown, owned_args.join(" "));
        return Ok(ExecReport {
            program: shown,
            args: owned_args,
            exit_code: 0,
            dry_run: true,
        });
    }

    debug!("running {} {:?} in {}", shown, owned_args, workdir.display());
    let status = Command::new(program)
        .args(args)
        .current_dir(workdir)
        .status()
        .with_context(|| format!("running {shown}"))?;

    Ok(ExecReport {
        program: shown,
        args: owned_args,
        exit_code: status.code().unwrap_or(1),
        dry_run: false,
    })
}
