use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum Error {
  ReqwestError(reqwest::Error),
  JsonError(serde_json::Error),
  IoError(std::io::Error),
  UrlParseError(url::ParseError),
  TemplateError(indicatif::style::TemplateError),
  ConfigFetchError(String),
  DownloadError(String),
  NoRenditionsError(String),
  InvalidFileNameError(String),
}

impl std::error::Error for Error {}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Error::ReqwestError(e) => std::fmt::Display::fmt(e, f),
      Error::JsonError(e) => write!(f, "invalid player config: {e}"),
      Error::IoError(e) => std::fmt::Display::fmt(e, f),
      Error::UrlParseError(e) => write!(f, "invalid stream url: {e}"),
      Error::TemplateError(e) => std::fmt::Display::fmt(e, f),
      Error::ConfigFetchError(e) => std::fmt::Display::fmt(e, f),
      Error::DownloadError(e) => std::fmt::Display::fmt(e, f),
      Error::NoRenditionsError(e) => std::fmt::Display::fmt(e, f),
      Error::InvalidFileNameError(e) => std::fmt::Display::fmt(e, f),
    }
  }
}

impl From<reqwest::Error> for Error {
  fn from(reqwest_error: reqwest::Error) -> Self {
    Error::ReqwestError(reqwest_error)
  }
}

impl From<serde_json::Error> for Error {
  fn from(serde_json_error: serde_json::Error) -> Self {
    Error::JsonError(serde_json_error)
  }
}

impl From<std::io::Error> for Error {
  fn from(io_error: std::io::Error) -> Self {
    Error::IoError(io_error)
  }
}

impl From<url::ParseError> for Error {
  fn from(parse_error: url::ParseError) -> Self {
    Error::UrlParseError(parse_error)
  }
}

impl From<indicatif::style::TemplateError> for Error {
  fn from(template_error: indicatif::style::TemplateError) -> Self {
    Error::TemplateError(template_error)
  }
}
