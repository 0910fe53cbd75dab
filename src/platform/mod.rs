//! Fast, local classification of listing URLs.
//!
//! Nothing here touches the network. `detect` is best effort and is confirmed
//! by the classification backend (see `crate::validation`).

pub mod location;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub use location::{Location, infer_location};

/// Listing platforms we know how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "apartments.com")]
    ApartmentsCom,
    #[serde(rename = "hotpads")]
    Hotpads,
    #[serde(rename = "redfin")]
    Redfin,
    #[serde(rename = "trulia")]
    Trulia,
    #[serde(rename = "zillow_fsbo")]
    ZillowFsbo,
    #[serde(rename = "zillow_frbo")]
    ZillowFrbo,
    #[serde(rename = "fsbo")]
    Fsbo,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::ApartmentsCom,
        Platform::Hotpads,
        Platform::Redfin,
        Platform::Trulia,
        Platform::ZillowFsbo,
        Platform::ZillowFrbo,
        Platform::Fsbo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::ApartmentsCom => "apartments.com",
            Platform::Hotpads => "hotpads",
            Platform::Redfin => "redfin",
            Platform::Trulia => "trulia",
            Platform::ZillowFsbo => "zillow_fsbo",
            Platform::ZillowFrbo => "zillow_frbo",
            Platform::Fsbo => "fsbo",
        }
    }

    /// Storage partition listings from this platform are routed into.
    pub fn default_table(&self) -> &'static str {
        match self {
            Platform::ApartmentsCom => "apartments_frbo",
            Platform::Hotpads => "hotpads_listings",
            Platform::Redfin => "redfin_listings",
            Platform::Trulia => "trulia_listings",
            Platform::ZillowFsbo => "zillow_fsbo_listings",
            Platform::ZillowFrbo => "zillow_frbo_listings",
            Platform::Fsbo => "fsbo_listings",
        }
    }

    /// Example search URL shown as a placeholder when adding a new source.
    pub fn default_url(&self) -> &'static str {
        match self {
            Platform::ApartmentsCom => "https://www.apartments.com/chicago-il/",
            Platform::Hotpads => "https://hotpads.com/chicago-il/apartments-for-rent",
            Platform::Redfin => "https://www.redfin.com/city/29470/IL/Chicago",
            Platform::Trulia => "https://www.trulia.com/IL/Chicago/",
            Platform::ZillowFsbo => "https://www.zillow.com/chicago-il/fsbo/",
            Platform::ZillowFrbo => "https://www.zillow.com/chicago-il/for_rent/",
            Platform::Fsbo => "https://www.forsalebyowner.com/search/list/chicago-illinois",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::ApartmentsCom => "Apartments.com",
            Platform::Hotpads => "HotPads",
            Platform::Redfin => "Redfin",
            Platform::Trulia => "Trulia",
            Platform::ZillowFsbo => "Zillow FSBO",
            Platform::ZillowFrbo => "Zillow FRBO",
            Platform::Fsbo => "ForSaleByOwner",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Example URL for a platform id; empty for ids we don't know.
pub fn default_url_for(id: &str) -> &'static str {
    id.parse::<Platform>().map(|p| p.default_url()).unwrap_or("")
}

/// Human-readable name for a platform id; unknown ids are returned unchanged.
pub fn display_name_for(id: &str) -> &str {
    match id.parse::<Platform>() {
        Ok(p) => p.display_name(),
        Err(_) => id,
    }
}

type Rule = (fn(&str) -> bool, fn(&str) -> Platform);

/// Detection rules, evaluated in order against the lower-cased URL. The first
/// matching rule wins, even when a later one would match as well.
const RULES: &[Rule] = &[
    (|u: &str| u.contains("apartments.com"), |_: &str| Platform::ApartmentsCom),
    (|u: &str| u.contains("hotpads.com"), |_: &str| Platform::Hotpads),
    (|u: &str| u.contains("redfin.com"), |_: &str| Platform::Redfin),
    (|u: &str| u.contains("trulia.com"), |_: &str| Platform::Trulia),
    (|u: &str| u.contains("zillow.com"), zillow_flavor),
    (|u: &str| u.contains("forsalebyowner.com"), |_: &str| Platform::Fsbo),
];

fn zillow_flavor(url: &str) -> Platform {
    if ["for-sale", "for_sale", "fsbo"].iter().any(|m| url.contains(m)) {
        Platform::ZillowFsbo
    } else if ["for-rent", "for_rent", "frbo"].iter().any(|m| url.contains(m)) {
        Platform::ZillowFrbo
    } else {
        Platform::ZillowFsbo
    }
}

/// Guess the platform of a listing URL from substrings of its host and path.
pub fn detect(url: &str) -> Option<Platform> {
    let lower = url.to_lowercase();
    RULES
        .iter()
        .find(|(matches, _)| matches(&lower))
        .map(|(_, platform)| platform(&lower))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("URL is required")]
    EmptyUrl,

    #[error("URL must start with http:// or https://")]
    BadScheme,

    #[error("invalid URL format: {0}")]
    MalformedUrl(String),
}

/// Cheap syntax check run before any network call.
pub fn validate_format(url: &str) -> Result<Url, FormatError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(FormatError::EmptyUrl);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FormatError::BadScheme);
    }
    Url::parse(url).map_err(|e| FormatError::MalformedUrl(e.to_string()))
}

/// Local classification of a listing URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub platform: Platform,
    pub table: &'static str,
    pub location: Location,
}

/// Detect the platform and derive its partition and geographic scope.
/// Returns `None` when no platform matches.
pub fn classify(url: &str) -> Option<Classification> {
    let platform = detect(url)?;
    Some(Classification {
        platform,
        table: platform.default_table(),
        location: infer_location(platform, url),
    })
}
