use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// The player config document served at `<video>/config`. Only the progressive
/// renditions are modelled; everything else in the payload is ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub request: Request,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    #[serde(deserialize_with = "null_as_default")]
    pub files: Files,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Files {
    #[serde(deserialize_with = "null_as_default")]
    pub progressive: Vec<Progressive>,
}

/// One single-file encoding of the video at a fixed resolution.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progressive {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i32,
}

impl VideoConfig {
    pub fn best_progressive(&self) -> Option<&Progressive> {
        select_best(&self.request.files.progressive)
    }
}

/// Picks the rendition with the greatest height. Ties keep the first one seen.
pub fn select_best(renditions: &[Progressive]) -> Option<&Progressive> {
    renditions
        .iter()
        .fold((-1, None), |(max_height, best), rendition| {
            if rendition.height > max_height {
                (rendition.height, Some(rendition))
            } else {
                (max_height, best)
            }
        })
        .1
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A finished download.
#[derive(Debug, PartialEq)]
pub struct Download {
    pub path: PathBuf,
    pub bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::{select_best, Progressive, VideoConfig};

    fn progressive(url: &str, height: i32) -> Progressive {
        Progressive { url: url.to_string(), height }
    }

    #[test]
    fn given_no_renditions_when_select_best_then_nothing_is_selected() {
        assert_eq!(select_best(&[]), None);
    }

    #[test]
    fn given_single_rendition_when_select_best_then_it_is_selected() {
        let renditions = vec![progressive("x", 1080)];

        let best = select_best(&renditions).map(|p| p.url.as_str());

        assert_eq!(best, Some("x"));
    }

    #[test]
    fn given_equal_heights_when_select_best_then_first_seen_wins() {
        let renditions = vec![progressive("a", 360), progressive("b", 720), progressive("c", 720)];

        let best = select_best(&renditions).map(|p| p.url.as_str());

        assert_eq!(best, Some("b"));
    }

    #[test]
    fn given_unsorted_renditions_when_select_best_then_tallest_is_selected() {
        let renditions = vec![progressive("mid", 540), progressive("top", 1080), progressive("low", 240)];

        let best = select_best(&renditions).map(|p| p.url.as_str());

        assert_eq!(best, Some("top"));
    }

    #[test]
    fn given_zero_height_when_select_best_then_it_still_beats_the_sentinel() {
        let renditions = vec![progressive("audio-ish", 0)];

        let best = select_best(&renditions).map(|p| p.url.as_str());

        assert_eq!(best, Some("audio-ish"));
    }

    #[test]
    fn given_unknown_and_missing_fields_when_parse_then_defaults_are_used() {
        // Given
        let body = r#"{
            "cdn_url": "https://f.vimeocdn.com",
            "video": {"id": 76979871, "title": "The New Vimeo Player"},
            "request": {"files": {"dash": {}, "progressive": [{"url": "https://h/v.mp4", "fps": 25}]}}
        }"#;

        // When
        let config = serde_json::from_str::<VideoConfig>(body).unwrap();

        // Then
        assert_eq!(config.request.files.progressive, vec![progressive("https://h/v.mp4", 0)]);
    }

    #[test]
    fn given_null_fields_when_parse_then_they_default_and_720_is_selected() {
        // Given
        let body = r#"{"request":{"files":{"progressive":[
            {"url":"http://h/a.mp4","height":null},
            {"url":null,"height":240},
            {"url":"http://h/b.mp4","height":720}
        ]}}}"#;

        // When
        let config = serde_json::from_str::<VideoConfig>(body).unwrap();

        // Then
        assert_eq!(config.request.files.progressive[0].height, 0);
        assert_eq!(config.request.files.progressive[1].url, "");
        assert_eq!(config.best_progressive().map(|p| p.url.as_str()), Some("http://h/b.mp4"));
    }

    #[test]
    fn given_null_containers_when_parse_then_no_rendition_is_available() {
        for body in [
            r#"{"request":{"files":{"progressive":null,"dash":{}}}}"#,
            r#"{"request":{"files":null}}"#,
            r#"{"request":null}"#,
        ] {
            let config = serde_json::from_str::<VideoConfig>(body).unwrap();

            assert!(config.best_progressive().is_none(), "{body}");
        }
    }

    #[test]
    fn given_document_without_files_when_parse_then_no_rendition_is_available() {
        let config = serde_json::from_str::<VideoConfig>(r#"{"request": {}}"#).unwrap();

        assert!(config.best_progressive().is_none());
    }
}
