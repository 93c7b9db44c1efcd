use crate::common::CheckError;

/// One video from a channel listing, kept as the raw JSON the service sent.
/// Only `url` is required, and only once it is written out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct VideoRecord(serde_json::Value);

impl VideoRecord {
    #[cfg(test)]
    pub fn with_url(url: &str) -> VideoRecord {
        VideoRecord(serde_json::json!({ "url": url }))
    }

    #[cfg(test)]
    pub fn from_json(value: serde_json::Value) -> VideoRecord {
        VideoRecord(value)
    }

    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(|u| u.as_str())
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(|t| t.as_str())
    }

    /// The video URL, or a schema error naming the record's position
    pub fn url_at(&self, index: usize) -> Result<&str, CheckError> {
        self.url().ok_or(CheckError::Schema {
            field: "url",
            index: Some(index),
        })
    }
}

/// Source for the videos in a channel. Wrap or replace this to change how
/// the request is made (timeouts, retries) without touching callers.
pub trait ChannelData {
    /// Videos in the channel, in the order the service lists them
    fn videos(&self) -> Result<Vec<VideoRecord>, CheckError>;
}
