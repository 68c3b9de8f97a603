//! Reads extractor records from disk and converts them into scorer-facing profiles.
//!
//! A file holds either the bare record or the extractor's envelope
//! `{"success": bool, "data": {...}, "error": "..."}`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

use crate::errors::MatchError;
use crate::models::profile::{
    CandidateProfile, CandidateRecord, JobRecord, JobRequirements, PersonalityScale,
};

#[derive(Debug, Deserialize)]
struct ExtractorEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

pub async fn load_candidate(
    path: &Path,
    default_scale: PersonalityScale,
) -> Result<CandidateProfile, MatchError> {
    let record: CandidateRecord = read_record(path).await?;
    debug!(
        path = %path.display(),
        skills = record.skills.len(),
        "loaded candidate record"
    );
    record
        .into_profile(default_scale)
        .map_err(|e| e.at_path(path))
}

pub async fn load_job(
    path: &Path,
    default_scale: PersonalityScale,
) -> Result<JobRequirements, MatchError> {
    let record: JobRecord = read_record(path).await?;
    debug!(
        path = %path.display(),
        required_skills = record.required_skills.len(),
        "loaded job record"
    );
    record
        .into_requirements(default_scale)
        .map_err(|e| e.at_path(path))
}

/// Loads every candidate file concurrently, at most `max_concurrent` at a time.
/// Output order matches `paths`. The first failure aborts the batch.
pub async fn load_candidates(
    paths: &[PathBuf],
    default_scale: PersonalityScale,
    max_concurrent: usize,
) -> Result<Vec<CandidateProfile>, MatchError> {
    let permits = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut tasks = JoinSet::new();

    for (index, path) in paths.iter().cloned().enumerate() {
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let profile = load_candidate(&path, default_scale).await?;
            Ok::<_, MatchError>((index, profile))
        });
    }

    let mut slots: Vec<Option<CandidateProfile>> = vec![None; paths.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, profile) = joined??;
        slots[index] = Some(profile);
    }

    Ok(slots.into_iter().flatten().collect())
}

async fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, MatchError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| MatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_record(path, &bytes)
}

fn parse_record<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T, MatchError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| MatchError::invalid_record(path, e))?;

    // `success` alone could be a record field; an envelope also carries `data` or `error`.
    let is_envelope = value
        .as_object()
        .map(|obj| {
            obj.contains_key("success") && (obj.contains_key("data") || obj.contains_key("error"))
        })
        .unwrap_or(false);

    let record = if is_envelope {
        let envelope: ExtractorEnvelope =
            serde_json::from_value(value).map_err(|e| MatchError::invalid_record(path, e))?;
        if !envelope.success {
            return Err(MatchError::Extractor(envelope.error.unwrap_or_else(|| {
                format!("{} reported failure without a message", path.display())
            })));
        }
        envelope.data.ok_or_else(|| {
            MatchError::InvalidArgument(format!("{}: envelope has no data", path.display()))
        })?
    } else {
        value
    };

    serde_json::from_value(record).map_err(|e| MatchError::invalid_record(path, e))
}
