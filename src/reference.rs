use std::fmt::{Display, Formatter, Result};

pub const PLAYER_URL: &str = "https://player.vimeo.com/video/";

const HTTP_PREFIX: &str = "http";
const CONFIG_SEGMENT: &str = "config";
const SLASH: &str = "/";

/// Location of the player config document for a video reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigUrl {
  video: String,
  config: String,
}

impl ConfigUrl {
  /// Builds the config URL from a full URL or a bare video id. Bare ids are
  /// appended to `player_url`.
  pub fn from_reference(reference: &str, player_url: &str) -> ConfigUrl {
    let mut video = if reference.starts_with(HTTP_PREFIX) {
      reference.to_string()
    } else if player_url.ends_with(SLASH) {
      format!("{player_url}{reference}")
    } else {
      format!("{player_url}{SLASH}{reference}")
    };

    if !video.ends_with(SLASH) {
      video.push_str(SLASH);
    }

    let config = format!("{video}{CONFIG_SEGMENT}");
    ConfigUrl { video, config }
  }

  /// The video URL without its trailing slash, for display.
  pub fn video(&self) -> &str {
    &self.video[..self.video.len() - SLASH.len()]
  }

  pub fn as_str(&self) -> &str {
    &self.config
  }
}

impl Display for ConfigUrl {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(&self.config)
  }
}
