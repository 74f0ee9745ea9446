use std::time::Duration;

use reqwest::redirect::{Action, Attempt, Policy};
use reqwest::Client;

use crate::error::Error;

const MAX_REDIRECTS: usize = 10;

/// Builds the client shared by the config fetch and the stream download.
///
/// Signed CDN links come back as redirects whose paths are already
/// percent-encoded. Redirect targets are followed exactly as the server sent
/// them, without decoding or re-encoding the path.
pub fn client(connect_timeout: Duration) -> Result<Client, Error> {
  Ok(
    Client::builder()
      .connect_timeout(connect_timeout)
      .redirect(Policy::custom(follow_escaped))
      .build()?,
  )
}

fn follow_escaped(attempt: Attempt) -> Action {
  if attempt.previous().len() >= MAX_REDIRECTS {
    attempt.error(format!("stopped after {MAX_REDIRECTS} redirects"))
  } else {
    attempt.follow()
  }
}
