// Loads a seed directory from a JSON file shaped like the `GET /activities` response.

use crate::modules::activities::core::activity::Activities;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed file {path} is not a valid activity directory: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("seed file {0} lists no activities")]
    Empty(PathBuf),

    #[error("activity {0:?} must allow at least one participant")]
    NoCapacity(String),

    #[error("activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

pub fn load_seed_file(path: &Path) -> Result<Activities, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let activities: Activities = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if activities.is_empty() {
        return Err(SeedError::Empty(path.to_path_buf()));
    }
    validate(&activities)?;
    Ok(activities)
}

fn validate(activities: &Activities) -> Result<(), SeedError> {
    for (name, activity) in activities {
        if activity.max_participants == 0 {
            return Err(SeedError::NoCapacity(name.clone()));
        }
        let mut seen = HashSet::new();
        if let Some(email) = activity.participants.iter().find(|e| !seen.insert(*e)) {
            return Err(SeedError::DuplicateParticipant {
                activity: name.clone(),
                email: email.clone(),
            });
        }
    }
    Ok(())
}
