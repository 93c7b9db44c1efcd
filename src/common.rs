use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a check. Nothing here is retried.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: attohttpc::Error,
    },

    #[error("Response from {url} is not valid JSON")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing or invalid field {field:?}{}", in_video(.index))]
    Schema {
        field: &'static str,
        index: Option<usize>,
    },

    #[error("Failed writing to {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Channel identifier must not be empty")]
    InvalidChannel,
}

fn in_video(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" in video {}", i),
        None => "".into(),
    }
}

/// Identifier for a channel on the video service
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelID {
    pub id: String,
}

impl ChannelID {
    pub fn new(id: &str) -> Result<ChannelID, CheckError> {
        if id.is_empty() {
            return Err(CheckError::InvalidChannel);
        }
        Ok(ChannelID { id: id.into() })
    }

    pub fn id_str(&self) -> &str {
        &self.id
    }
}
