use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::common::ChannelID;

const DEFAULT_CHANNEL: &str = "CelestialVisions";
const DEFAULT_OUTPUT: &str = "urls.txt";

fn api_prefix() -> String {
    #[cfg(test)]
    let prefix: String = mockito::server_url();

    #[cfg(not(test))]
    let prefix: String = std::env::var("DMCHECK_API_URL")
        .ok()
        .unwrap_or_else(|| "https://api.dailymotion.com".into());

    normalise_base(&prefix)
}

/// Paths are appended with a leading `/`, so drop any trailing ones
fn normalise_base(base: &str) -> String {
    base.trim_end_matches('/').into()
}

/// Settings fixed for the lifetime of one invocation
#[derive(Debug, Clone)]
pub struct Config {
    api_base: String,
    channel: ChannelID,
    output_path: PathBuf,
    /// No timeout unless asked for
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn load() -> Config {
        Config {
            api_base: api_prefix(),
            channel: ChannelID {
                id: DEFAULT_CHANNEL.into(),
            },
            output_path: DEFAULT_OUTPUT.into(),
            timeout: None,
        }
    }

    pub fn with_api_base(mut self, base: &str) -> Config {
        self.api_base = normalise_base(base);
        self
    }

    pub fn with_channel(mut self, channel: ChannelID) -> Config {
        self.channel = channel;
        self
    }

    pub fn with_output_path<P: Into<PathBuf>>(mut self, path: P) -> Config {
        self.output_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Config {
        self.timeout = timeout;
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn channel(&self) -> &ChannelID {
        &self.channel
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
