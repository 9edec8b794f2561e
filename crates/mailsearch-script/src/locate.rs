use crate::candidates::{Candidate, expand_with, process_env};
use crate::info::ScriptInfo;
use mailsearch_core::{MailsearchError, Result};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of checking one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CandidateStatus {
    Found,
    Missing,
    NotAFile,
    NotExecutable,
    /// The template references a variable that is not set
    Unexpanded { variable: String },
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateStatus::Found => write!(f, "found"),
            CandidateStatus::Missing => write!(f, "missing"),
            CandidateStatus::NotAFile => write!(f, "not a file"),
            CandidateStatus::NotExecutable => write!(f, "not executable"),
            CandidateStatus::Unexpanded { variable } => write!(f, "{} is not set", variable),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCheck {
    pub candidate: Candidate,
    /// Expanded path, when expansion succeeded
    pub path: Option<PathBuf>,
    #[serde(flatten)]
    pub status: CandidateStatus,
}

impl CandidateCheck {
    /// One line for the not-found report
    pub fn describe(&self) -> String {
        match &self.path {
            Some(path) => format!("{} ({})", path.display(), self.status),
            None => format!("{} ({})", self.candidate.template, self.status),
        }
    }

    /// The script this check points at, if it qualified
    pub fn to_info(&self) -> Option<ScriptInfo> {
        match (&self.status, &self.path) {
            (CandidateStatus::Found, Some(path)) => Some(ScriptInfo {
                path: path.clone(),
                template: self.candidate.template.clone(),
                source: self.candidate.source,
            }),
            _ => None,
        }
    }
}

/// Every candidate checked, in priority order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocateReport {
    pub checks: Vec<CandidateCheck>,
}

impl LocateReport {
    /// The highest-priority usable script
    pub fn found(&self) -> Option<ScriptInfo> {
        self.checks.iter().find_map(CandidateCheck::to_info)
    }

    pub fn searched_locations(&self) -> Vec<String> {
        self.checks.iter().map(CandidateCheck::describe).collect()
    }
}

/// Check a single candidate against the filesystem
pub fn check_candidate(
    candidate: &Candidate,
    lookup: impl Fn(&str) -> Option<String>,
) -> CandidateCheck {
    let path = match expand_with(&candidate.template, lookup) {
        Ok(path) => path,
        Err(variable) => {
            return CandidateCheck {
                candidate: candidate.clone(),
                path: None,
                status: CandidateStatus::Unexpanded { variable },
            };
        }
    };

    let status = file_status(&path);
    log::debug!("candidate {} -> {}", path.display(), status);

    CandidateCheck {
        candidate: candidate.clone(),
        path: Some(path),
        status,
    }
}

fn file_status(path: &Path) -> CandidateStatus {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return CandidateStatus::Missing,
    };

    if !metadata.is_file() {
        return CandidateStatus::NotAFile;
    }

    if is_executable(&metadata) {
        CandidateStatus::Found
    } else {
        CandidateStatus::NotExecutable
    }
}

#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &std::fs::Metadata) -> bool {
    true
}

/// Check every candidate without stopping at the first hit
pub fn inspect_candidates_with(
    candidates: &[Candidate],
    lookup: impl Fn(&str) -> Option<String>,
) -> LocateReport {
    LocateReport {
        checks: candidates
            .iter()
            .map(|c| check_candidate(c, &lookup))
            .collect(),
    }
}

pub fn inspect_candidates(candidates: &[Candidate]) -> LocateReport {
    inspect_candidates_with(candidates, process_env)
}

/// Find the first existing, executable candidate
///
/// Stops at the first hit. Nothing is cached: every call re-checks the
/// filesystem.
///
/// # Errors
///
/// [`MailsearchError::ScriptNotFound`] listing every candidate checked.
pub fn locate_script_with(
    candidates: &[Candidate],
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ScriptInfo> {
    let mut checks = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let check = check_candidate(candidate, &lookup);
        if let Some(info) = check.to_info() {
            log::debug!("using {} ({})", info.path.display(), info.source);
            return Ok(info);
        }
        checks.push(check);
    }

    Err(MailsearchError::ScriptNotFound {
        searched: LocateReport { checks }.searched_locations(),
    })
}

pub fn locate_script(candidates: &[Candidate]) -> Result<ScriptInfo> {
    locate_script_with(candidates, process_env)
}
