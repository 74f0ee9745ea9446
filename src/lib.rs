//! Downloads the tallest progressive rendition of a Vimeo video.
//!
//! A video reference (player URL or bare id) is turned into the player config
//! URL, the config is fetched and the best progressive stream is written to a
//! local file named after the stream's last path segment.

pub mod error;
pub mod http;
pub mod model;
pub mod progress;
pub mod reference;
pub mod service;

pub use error::Error;
pub use model::{Download, Progressive, VideoConfig};
pub use reference::{ConfigUrl, PLAYER_URL};
pub use service::{file_name, VideoLoader, VimeoDownloadService};
