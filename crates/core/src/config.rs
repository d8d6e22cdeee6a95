use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

/// Photograph drawn behind the card content when no override is configured.
const DEFAULT_BACKGROUND_IMAGE_URL: &str =
    "https://uspic4.ok.com/post/image/dc8c5bfc-a434-4ab1-b561-d1795d50cce3.jpg?ow=1224&oh=814";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub og: OgConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self { Self { port: 3000 } }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OgConfig {
    pub background_image_url: Url,
}

impl Default for OgConfig {
    fn default() -> Self {
        Self { background_image_url: Url::parse(DEFAULT_BACKGROUND_IMAGE_URL).unwrap() }
    }
}

impl Config {
    /// Load configuration from a YAML file. A missing file yields the defaults,
    /// so the service runs without any configuration present.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = std::io::BufReader::new(std::fs::File::open(path)?);
        Ok(serde_yaml::from_reader(file)?)
    }
}
