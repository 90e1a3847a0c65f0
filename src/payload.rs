// Submission payload: the JSON body the grader expects.

use crate::artifact::{ArtifactReadError, ArtifactSource};
use crate::config::Configuration;
use crate::prompt::Credentials;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Output captured for one part.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PartOutput {
    pub output: String,
}

/// Body of the submission request. Field names match the grader's API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub assignment_key: String,
    pub submitter_email: String,
    pub secret: String,
    pub parts: BTreeMap<String, PartOutput>,
}

/// Assemble the payload for one attempt.
///
/// Artifact `i` is bound to the id of `configuration.parts()[i]`. The first
/// artifact that cannot be read aborts the build, so no payload exists unless
/// every part has its output.
pub fn build_submission<S: ArtifactSource + ?Sized>(
    configuration: &Configuration,
    credentials: &Credentials,
    source: &S,
) -> Result<SubmissionPayload, ArtifactReadError> {
    let parts = configuration
        .parts()
        .iter()
        .enumerate()
        .map(|(index, part)| {
            let output = source.read_artifact(index)?;
            Ok((part.id.clone(), PartOutput { output }))
        })
        .collect::<Result<BTreeMap<_, _>, ArtifactReadError>>()?;

    debug!(parts = parts.len(), "built submission payload");
    Ok(SubmissionPayload {
        assignment_key: configuration.assignment_key().to_string(),
        submitter_email: credentials.email.clone(),
        secret: credentials.token.clone(),
        parts,
    })
}
