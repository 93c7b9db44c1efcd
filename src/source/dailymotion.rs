use std::time::Duration;

use log::{debug, trace, warn};

use crate::common::{ChannelID, CheckError};
use crate::config::Config;
use crate::source::base::{ChannelData, VideoRecord};

/*
GET /channel/:id/videos

{
  page: Int,
  limit: Int,
  explicit: Bool,
  total: Int,
  has_more: Bool,
  list: [
    {
      id: String,
      title: String,
      channel: String,
      owner: String,
      url: String
    }
  ]
}
*/
#[derive(Serialize, Deserialize, Debug, Clone)]
struct VideoPage {
    list: Vec<VideoRecord>,
    #[serde(default)]
    has_more: serde_json::Value,
}

fn request_data(url: &str, timeout: Option<Duration>) -> Result<serde_json::Value, CheckError> {
    debug!("Retrieving URL {}", &url);
    let mut req = attohttpc::get(url);
    if let Some(t) = timeout {
        req = req.timeout(t);
    }
    let network = |source| CheckError::Network {
        url: url.into(),
        source,
    };
    let resp = req.send().map_err(network)?;
    if !resp.is_success() {
        warn!("Got status {} from {}, parsing body anyway", resp.status(), &url);
    }
    let text = resp.text().map_err(network)?;
    trace!("Raw response: {}", &text);
    let data = serde_json::from_str(&text).map_err(|source| CheckError::Parse {
        url: url.into(),
        source,
    })?;
    Ok(data)
}

/// Object to query the video list of a given channel
#[derive(Debug)]
pub struct DailymotionQuery<'a> {
    api_base: &'a str,
    chan_id: &'a ChannelID,
    timeout: Option<Duration>,
}

impl<'a> DailymotionQuery<'a> {
    pub fn new(cfg: &'a Config) -> DailymotionQuery<'a> {
        DailymotionQuery {
            api_base: cfg.api_base(),
            chan_id: cfg.channel(),
            timeout: cfg.timeout,
        }
    }

    fn videos_url(&self) -> String {
        format!(
            "{prefix}/channel/{chanid}/videos",
            prefix = self.api_base,
            chanid = self.chan_id.id_str()
        )
    }
}

impl<'a> ChannelData for DailymotionQuery<'a> {
    fn videos(&self) -> Result<Vec<VideoRecord>, CheckError> {
        let url = self.videos_url();
        let raw = request_data(&url, self.timeout)?;
        let page: VideoPage = serde_json::from_value(raw).map_err(|e| {
            debug!("Unexpected response shape from {}: {}", &url, e);
            CheckError::Schema {
                field: "list",
                index: None,
            }
        })?;

        // Only the first page is ever read
        if page.has_more == serde_json::Value::Bool(true) {
            debug!("{} has more pages, ignoring them", &url);
        }
        debug!("Got {} videos for {:?}", page.list.len(), self.chan_id.id_str());
        Ok(page.list)
    }
}
