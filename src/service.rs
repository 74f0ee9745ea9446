use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::error::Error;
use crate::model::{Download, VideoConfig};
use crate::progress::SpinnerHelper;
use crate::reference::ConfigUrl;

#[async_trait]
pub trait VideoLoader {
    async fn download_video(&self, reference: &str, output_dir: &Path) -> Result<Download, Error>;
}

pub struct VimeoDownloadService {
    pub client: Client,
    pub player_url: String,
    pub timeout: Duration,
}

#[async_trait]
impl VideoLoader for VimeoDownloadService {
    async fn download_video(&self, reference: &str, output_dir: &Path) -> Result<Download, Error> {
        let config_url = ConfigUrl::from_reference(reference, &self.player_url);
        println!("Downloading video {}...please wait", config_url.video());

        let spinner = SpinnerHelper::create(format!("Fetching player config: {config_url}"))?;
        let config = match self.get_video_config(&config_url).await {
            Ok(config) => config,
            Err(e) => {
                spinner.abandon_with_message(format!("FAILURE – could not load {config_url}"));
                return Err(e);
            }
        };

        let stream_url = match config.best_progressive() {
            Some(best) => {
                spinner.finish_with_message(format!("Selected {}p progressive stream", best.height));
                best.url.as_str()
            }
            None => {
                spinner.abandon_with_message("FAILURE – no progressive stream available");
                return Err(Error::NoRenditionsError(format!(
                    "No progressive renditions available for {video}",
                    video = config_url.video()
                )));
            }
        };

        self.download_stream(stream_url, output_dir).await
    }
}

impl VimeoDownloadService {
    pub async fn get_video_config(&self, config_url: &ConfigUrl) -> Result<VideoConfig, Error> {
        let response = self
            .client
            .get(config_url.as_str())
            .timeout(self.timeout)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let response_body = response.text().await?;
                Ok(serde_json::from_str::<VideoConfig>(&response_body)?)
            }
            status => Err(Error::ConfigFetchError(format!(
                "Could not load player config from {config_url}. Status code: {status}. Body: {body}",
                body = response.text().await?
            ))),
        }
    }

    pub async fn download_stream(&self, stream_url: &str, output_dir: &Path) -> Result<Download, Error> {
        let path = output_dir.join(file_name(stream_url)?);
        let mut out = File::create(&path).await?;

        let response = self.client.get(stream_url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let mut bytes = 0u64;
                let mut stream = response.bytes_stream();
                while let Some(chunk) = stream.next().await {
                    let chunk = chunk?;
                    out.write_all(&chunk).await?;
                    bytes += chunk.len() as u64;
                }
                out.flush().await?;

                Ok(Download { path, bytes })
            }
            status => Err(Error::DownloadError(format!(
                "Something went wrong downloading {stream_url}. Status code: {status}"
            ))),
        }
    }
}

/// Derives the output file name from the last non-empty segment of the URL
/// path. The query string plays no part in it.
pub fn file_name(stream_url: &str) -> Result<PathBuf, Error> {
    let url = Url::parse(stream_url)?;
    let decoded = urlencoding::decode_binary(url.path().as_bytes());
    let path = String::from_utf8_lossy(&decoded);

    path.split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .map(PathBuf::from)
        .ok_or_else(|| Error::InvalidFileNameError(format!("No file name in stream url {stream_url}")))
}
