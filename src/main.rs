mod cli;

use std::time::Duration;

use cli::{Cli, USAGE};

use clap::Parser;
use vimeo_dl::{http, Download, Error, VideoLoader, VimeoDownloadService};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
  let Cli {
    video,
    player_url,
    output_dir,
    timeout,
  } = Cli::parse();

  let Some(video) = video else {
    print!("{USAGE}");
    return Ok(());
  };

  let timeout = Duration::from_secs(timeout);
  let service = VimeoDownloadService {
    client: http::client(timeout)?,
    player_url,
    timeout,
  };

  service
    .download_video(&video, &output_dir)
    .await
    .map(|Download { bytes, .. }| println!("{bytes} bytes downloaded"))
}
