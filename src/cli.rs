use std::path::PathBuf;

use clap::Parser;
use vimeo_dl::PLAYER_URL;

pub(crate) const USAGE: &str =
  "You must specify video URL or VIDEO ID\n\nUsage:\n\tvimeo [VIDEO_URL][VIDEO_ID]\n\n";

/// Download a Vimeo video in the best progressive quality the player offers.
#[derive(Parser)]
#[clap(name = "vimeo", version)]
pub(crate) struct Cli {
  /// Player URL of the video (e.g. `https://player.vimeo.com/video/76979871`) or just its id.
  pub(crate) video: Option<String>,
  /// Base URL bare video ids are appended to.
  #[clap(long, env = "VIMEO_PLAYER_URL", default_value = PLAYER_URL)]
  pub(crate) player_url: String,
  /// Directory the video file is written to.
  #[clap(long, short, default_value = ".")]
  pub(crate) output_dir: PathBuf,
  /// Seconds to wait for a connection, and for the whole player config request.
  #[clap(long, default_value = "30")]
  pub(crate) timeout: u64,
}
