use crate::models::profile::Profile;
use log::info;
use std::fs;
use std::path::{ Path, PathBuf };
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse profile file '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid profile: {0}")]
    Invalid(String),
}

fn validate(profile: &Profile) -> Result<(), ProfileError> {
    if profile.personal.name.trim().is_empty() {
        return Err(ProfileError::Invalid("personal.name must not be empty".to_string()));
    }
    Ok(())
}

pub fn parse_profile(text: &str, path: &Path) -> Result<Profile, ProfileError> {
    let profile: Profile = serde_json::from_str(text).map_err(|source| ProfileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&profile)?;
    Ok(profile)
}

pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Arc<Profile>, ProfileError> {
    let path = path.as_ref();
    let file_content = fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = parse_profile(&file_content, path)?;
    info!("Loaded profile for '{}' from: {}", profile.personal.name, path.display());
    Ok(Arc::new(profile))
}

/// Loads the profile at `path`, or the built-in one when no path is set.
pub fn resolve_profile(path: Option<&str>) -> Result<Arc<Profile>, ProfileError> {
    match path.filter(|p| !p.trim().is_empty()) {
        Some(p) => load_profile(p),
        None => {
            info!("No profile path configured, using the built-in profile");
            Ok(Arc::new(Profile::builtin()))
        }
    }
}
