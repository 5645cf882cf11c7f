use std::path::Path;

use walkdir::WalkDir;

use crate::platform::Platform;

const MAX_SUGGESTION_DISTANCE: usize = 2;
const MIN_CONTAINMENT_LEN: usize = 3;
const BUNDLE_SCAN_DEPTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppValidation {
    Valid,
    Invalid { message: String },
}

impl AppValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Application names discoverable on this platform, kept in enumeration
/// order: bundle directories first, then search-path entries.
#[derive(Debug, Default, Clone)]
pub struct CandidatePool {
    pub bundles: Vec<String>,
    pub executables: Vec<String>,
}

impl CandidatePool {
    fn combined(&self) -> Vec<&str> {
        self.bundles
            .iter()
            .chain(self.executables.iter())
            .map(String::as_str)
            .collect()
    }
}

/// Checks that `name` is launchable on this platform, suggesting a close
/// match when it is not.
pub fn validate_app(name: &str, platform: &Platform) -> AppValidation {
    validate_with_pool(name, &enumerate_candidates(platform))
}

/// Same check over a caller-supplied candidate pool; the fuzzy rules never
/// touch the filesystem.
pub fn validate_with_pool(name: &str, pool: &CandidatePool) -> AppValidation {
    let trimmed = name.trim();
    if app_exists(trimmed, pool) {
        return AppValidation::Valid;
    }

    let message = match best_match(trimmed, &pool.combined()) {
        Some(suggestion) => format!(
            "Application '{trimmed}' not found. Did you mean '{suggestion}'?"
        ),
        None => format!(
            "Application '{trimmed}' not found. Check that it is installed and on your PATH."
        ),
    };

    AppValidation::Invalid { message }
}

fn app_exists(name: &str, pool: &CandidatePool) -> bool {
    if name.is_empty() {
        return false;
    }

    // Bundle names come from a case-preserving but case-insensitive world;
    // executables on the search path match exactly.
    pool.bundles
        .iter()
        .any(|bundle| bundle.eq_ignore_ascii_case(name))
        || pool.executables.iter().any(|exe| exe == name)
}

/// Fuzzy lookup, rules in priority order: case-insensitive exact match, then
/// edit distance within 2, then case-insensitive substring containment in
/// either direction (both sides at least 3 characters). Within a rule the
/// first candidate in enumeration order wins.
pub fn best_match<'a>(name: &str, candidates: &[&'a str]) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }

    let lowered = name.to_lowercase();

    if let Some(found) = candidates
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
    {
        return Some(found);
    }

    if let Some(found) = candidates.iter().copied().find(|candidate| {
        edit_distance(&candidate.to_lowercase(), &lowered) <= MAX_SUGGESTION_DISTANCE
    }) {
        return Some(found);
    }

    if lowered.chars().count() >= MIN_CONTAINMENT_LEN {
        if let Some(found) = candidates.iter().copied().find(|candidate| {
            let candidate_lowered = candidate.to_lowercase();
            candidate_lowered.chars().count() >= MIN_CONTAINMENT_LEN
                && (candidate_lowered.contains(&lowered) || lowered.contains(&candidate_lowered))
        }) {
            return Some(found);
        }
    }

    None
}

/// Classic dynamic-programming string edit distance with unit costs for
/// insertion, deletion, and substitution. Full matrix, no early exit.
pub fn edit_distance(left: &str, right: &str) -> usize {
    let left_chars: Vec<char> = left.chars().collect();
    let right_chars: Vec<char> = right.chars().collect();
    let rows = left_chars.len();
    let cols = right_chars.len();

    if rows == 0 {
        return cols;
    }
    if cols == 0 {
        return rows;
    }

    let mut matrix = vec![vec![0_usize; cols + 1]; rows + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=cols {
        matrix[0][j] = j;
    }

    for i in 1..=rows {
        for j in 1..=cols {
            let cost = usize::from(left_chars[i - 1] != right_chars[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[rows][cols]
}

pub fn enumerate_candidates(platform: &Platform) -> CandidatePool {
    CandidatePool {
        bundles: installed_bundles(platform),
        executables: path_executables(),
    }
}

fn installed_bundles(platform: &Platform) -> Vec<String> {
    let mut bundles = Vec::new();
    for directory in platform.bundle_directories() {
        for entry in WalkDir::new(&directory)
            .min_depth(1)
            .max_depth(BUNDLE_SCAN_DEPTH)
            .into_iter()
            .filter_map(Result::ok)
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("app") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                bundles.push(stem.to_string());
            }
        }
    }

    bundles
}

fn path_executables() -> Vec<String> {
    let Some(path_var) = std::env::var_os("PATH") else {
        return Vec::new();
    };

    let mut executables = Vec::new();
    for directory in std::env::split_paths(&path_var) {
        let Ok(entries) = std::fs::read_dir(&directory) else {
            continue;
        };
        for entry in entries.filter_map(Result::ok) {
            let path = entry.path();
            if !is_executable(&path) {
                continue;
            }
            if let Some(name) = executable_name(&path) {
                executables.push(name);
            }
        }
    }

    executables
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    const EXECUTABLE_EXTENSIONS: [&str; 4] = ["exe", "bat", "cmd", "com"];

    if !path.is_file() {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            EXECUTABLE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(windows)]
fn executable_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(ToString::to_string)
}

#[cfg(not(windows))]
fn executable_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
}
