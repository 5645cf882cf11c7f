use std::fmt::{Display, Formatter};
use std::process::Command;

use crate::resolver::LaunchPlan;

#[derive(Debug)]
pub enum LaunchError {
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn { program, source } => {
                write!(f, "failed to launch {program}: {source}")
            }
        }
    }
}

impl std::error::Error for LaunchError {}

/// Spawns the planned program detached and returns as soon as it has
/// started. Exit codes are never observed; the only failure mode is the
/// program failing to start at all.
pub fn run_detached(plan: &LaunchPlan) -> Result<(), LaunchError> {
    Command::new(&plan.program)
        .args(&plan.args)
        .spawn()
        .map(|_child| ())
        .map_err(|source| LaunchError::Spawn {
            program: plan.program.clone(),
            source,
        })
}
