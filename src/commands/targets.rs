use crate::cli::{Cli, Target};
use crate::domain::models::{ExecReport, TARGET_DOCS};
use crate::services::{clean, exec, fetch, help, output};
use anyhow::Context;
use std::process::ExitCode;

pub fn handle_target(cli: &Cli) -> anyhow::Result<ExitCode> {
    // Absolute, so script paths and the child cwd agree under `-C`.
    let workdir = cli
        .directory
        .canonicalize()
        .with_context(|| format!("resolving working directory {}", cli.directory.display()))?;
    let workdir = workdir.as_path();

    match cli.target.clone().unwrap_or(Target::Help) {
        Target::Lint => {
            let report = exec::run(
                std::path::Path::new("tox"),
                &["-e", "lint"],
                workdir,
                cli.dry_run,
            )?;
            finish_exec(cli, report)
        }
        Target::Clean => {
            let report = clean::clean_build_dirs(workdir, cli.dry_run)?;
            output::print_one(cli.json, report, |r| {
                if r.removed.is_empty() {
                    "nothing to clean".to_string()
                } else if r.dry_run {
                    format!("would remove {}", r.removed.join(" "))
                } else {
                    format!("removed {}", r.removed.join(" "))
                }
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Target::Charms => {
            // Build dirs must be gone before the build script starts.
            clean::clean_build_dirs(workdir, cli.dry_run)?;
            let script = workdir.join("scripts").join("build_charms.sh");
            let report = exec::run(&script, &[], workdir, cli.dry_run)?;
            finish_exec(cli, report)
        }
        Target::PullClassicSnap => {
            let report = fetch::pull_snap(&cli.snap_url, workdir, cli.dry_run)?;
            output::print_one(cli.json, report, |r| {
                if r.dry_run {
                    format!("would fetch {}", r.url)
                } else {
                    format!("saved {} ({} bytes)", r.file, r.bytes)
                }
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Target::PushCharmsToEdge => {
            let script = workdir.join("scripts").join("push_charms.sh");
            let report = exec::run(&script, &["edge"], workdir, cli.dry_run)?;
            finish_exec(cli, report)
        }
        Target::Help => {
            let entries = help::documented(TARGET_DOCS);
            let width = help::column_width(&entries);
            let color = !cli.json && help::stdout_wants_color();
            output::print_out(cli.json, &entries, |e| help::format_row(e, width, color))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Report the invocation when asked to, then surface the child's exit code
/// as our own.
fn finish_exec(cli: &Cli, report: ExecReport) -> anyhow::Result<ExitCode> {
    if cli.json {
        output::print_one(true, &report, |_| String::new())?;
    } else if report.dry_run {
        if report.args.is_empty() {
            println!("would run {}", report.program);
        } else {
            println!("would run {} {}", report.program, report.args.join(" "));
        }
    }
    Ok(match u8::try_from(report.exit_code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    })
}
