use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One row of the static target documentation table.
///
/// The `help` target is driven entirely by this table; targets whose
/// `description` is `None` exist but are not listed.
pub struct TargetDoc {
    pub name: &'static str,
    pub description: Option<&'static str>,
}

pub const TARGET_DOCS: &[TargetDoc] = &[
    TargetDoc {
        name: "lint",
        description: Some("Run linter against charm source"),
    },
    TargetDoc {
        name: "clean",
        description: Some("Remove build dirs, temp files, and artifacts"),
    },
    TargetDoc {
        name: "charms",
        description: Some("Build all charms"),
    },
    TargetDoc {
        name: "pull-classic-snap",
        description: Some("Pull the classic slurm snap"),
    },
    TargetDoc {
        name: "push-charms-to-edge",
        description: Some("Push charms to edge channel on the charm store"),
    },
    TargetDoc {
        name: "help",
        description: Some("Show the target listing"),
    },
];

/// A listed target, resolved from [`TARGET_DOCS`].
#[derive(Serialize, Clone)]
pub struct HelpEntry {
    pub name: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct CleanReport {
    pub removed: Vec<String>,
    pub skipped: Vec<String>,
    pub dry_run: bool,
}

#[derive(Serialize, Debug)]
pub struct ExecReport {
    pub program: String,
    pub args: Vec<String>,
    pub exit_code: i32,
    pub dry_run: bool,
}

#[derive(Serialize)]
pub struct FetchReport {
    pub url: String,
    pub file: String,
    pub bytes: u64,
    pub dry_run: bool,
}
