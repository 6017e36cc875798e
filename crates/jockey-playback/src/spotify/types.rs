//! Spotify Web API deserialization types.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SpTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpSearchResponse {
    pub tracks: Option<SpTracks>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpTracks {
    #[serde(default)]
    pub items: Vec<SpTrackItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpTrackItem {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpArtist>,
    pub external_urls: Option<SpExternalUrls>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpArtist {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpExternalUrls {
    pub spotify: Option<String>,
}
