//! iRODS metadata retrieval through the baton command-line tools
//!
//! baton reads a JSON description of an iRODS path on stdin and writes the
//! same object back, decorated with whatever was asked for. For metadata:
//!
//! ```text
//! $ echo '{"collection": "/seq/1", "data_object": "1.bam"}' | baton-list --avu
//! {"collection": "/seq/1", "data_object": "1.bam",
//!  "avus": [{"attribute": "study_id", "value": "3765"}]}
//! ```

use crate::BatonError;
use cookiemonster_domain::{MetadataRetriever, MetadataSnapshot, RetrievalError};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::trace;

const BATON_LIST: &str = "baton-list";

/// Where baton lives and which iRODS zone to talk to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatonConfig {
    /// Directory containing the baton binaries
    pub bin: PathBuf,

    /// iRODS zone
    pub zone: String,
}

#[derive(Debug, Serialize)]
struct DataObjectRequest<'a> {
    collection: &'a str,
    data_object: &'a str,
}

#[derive(Debug, Deserialize)]
struct DataObjectReply {
    #[serde(default)]
    avus: Vec<Avu>,
    error: Option<ErrorReply>,
}

#[derive(Debug, Deserialize)]
struct Avu {
    attribute: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    code: i64,
    message: String,
}

/// Metadata retriever backed by `baton-list --avu`
#[derive(Debug, Clone)]
pub struct BatonRetriever {
    config: BatonConfig,
}

impl BatonRetriever {
    /// Create a retriever using the given baton installation
    pub fn new(config: BatonConfig) -> Self {
        Self { config }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(self.config.bin.join(BATON_LIST));
        command.arg("--avu").arg("--zone").arg(&self.config.zone);
        command
    }

    fn list_avus(&self, identifier: &str) -> Result<MetadataSnapshot, BatonError> {
        let request = build_request(identifier)?;
        let program = self.config.bin.join(BATON_LIST).display().to_string();
        trace!(command = %program, request = %request, "calling baton");

        let spawn_error = |source: std::io::Error| BatonError::Spawn {
            command: program.clone(),
            source,
        };
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(request.as_bytes()).map_err(spawn_error)?;
        }
        let output = child.wait_with_output().map_err(spawn_error)?;

        if !output.status.success() {
            return Err(BatonError::Exit {
                command: program,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        parse_reply(&String::from_utf8_lossy(&output.stdout))
    }
}

impl MetadataRetriever for BatonRetriever {
    fn retrieve(&self, identifier: &str) -> Result<MetadataSnapshot, RetrievalError> {
        self.list_avus(identifier)
            .map_err(|e| e.into_retrieval_error(identifier))
    }
}

/// Build the baton JSON request for a data object path
fn build_request(identifier: &str) -> Result<String, BatonError> {
    let (collection, data_object) = identifier
        .rsplit_once('/')
        .filter(|(collection, data_object)| collection.starts_with('/') && !data_object.is_empty())
        .ok_or_else(|| BatonError::InvalidPath(identifier.to_string()))?;
    Ok(serde_json::to_string(&DataObjectRequest {
        collection,
        data_object,
    })?)
}

/// Turn a baton reply into a snapshot, one key per AVU attribute
fn parse_reply(reply: &str) -> Result<MetadataSnapshot, BatonError> {
    let reply: DataObjectReply = serde_json::from_str(reply.trim())?;
    if let Some(error) = reply.error {
        return Err(BatonError::Irods {
            code: error.code,
            message: error.message,
        });
    }
    let snapshot = reply
        .avus
        .into_iter()
        .fold(MetadataSnapshot::builder(), |builder, avu| {
            builder.value(avu.attribute, avu.value)
        })
        .build();
    Ok(snapshot)
}
