use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use super::Platform;

/// `/city/<id>/<ST>/<City-Name>`
static REDFIN_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/city/\d+/([A-Za-z]{2})/([A-Za-z][A-Za-z_\-]*)").unwrap());

/// `/<ST>/<City_Name>/`
static TRULIA_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([A-Za-z]{2})/([A-Za-z][A-Za-z_\-]*)(?:/|$)").unwrap());

/// `/<city-name>-<st>/` anywhere in the path.
static SLUG_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([a-z]+(?:-[a-z]+)*)-([a-z]{2})(?:/|$)").unwrap());

/// Geographic scope implied by a listing URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            state: Some(state.into()),
        }
    }
}

/// Best-effort city/state extraction from the URL path. Returns an empty
/// location when the path has no recognisable city segment.
pub fn infer_location(platform: Platform, url: &str) -> Location {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return Location::default();
    };
    let path = parsed.path();

    let (state, city) = match platform {
        Platform::Redfin => captures(&REDFIN_PATH_REGEX, path),
        Platform::Trulia => captures(&TRULIA_PATH_REGEX, path),
        _ => captures(&SLUG_PATH_REGEX, &path.to_lowercase()).map(|(city, state)| (state, city)),
    }
    .unzip();

    Location {
        city: city.map(|c| title_case(&c)),
        state: state.map(|s| s.to_uppercase()),
    }
}

fn captures(regex: &Regex, path: &str) -> Option<(String, String)> {
    let caps = regex.captures(path)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

fn title_case(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
