use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Which kind of record a query pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
pub enum ResultKind {
    #[default]
    #[value(name = "tracks")]
    Track,
    #[value(name = "artists")]
    Artist,
}

impl ResultKind {
    /// Path segment of the top-items endpoint.
    pub fn as_path(&self) -> &'static str {
        match self {
            ResultKind::Track => "tracks",
            ResultKind::Artist => "artists",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultKind::Track => "Tracks",
            ResultKind::Artist => "Artists",
        }
    }
}

/// Affinity window the provider computes the ranking over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
pub enum TimeWindow {
    ShortTerm,
    #[default]
    MediumTerm,
    LongTerm,
}

impl TimeWindow {
    /// Value of the `time_range` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            TimeWindow::ShortTerm => "short_term",
            TimeWindow::MediumTerm => "medium_term",
            TimeWindow::LongTerm => "long_term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::ShortTerm => "~1 Month",
            TimeWindow::MediumTerm => "~6 Months",
            TimeWindow::LongTerm => "~2 Years",
        }
    }
}

/// The (result kind, time window) pair selecting what gets paginated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Query {
    pub result_kind: ResultKind,
    pub window: TimeWindow,
}

impl Query {
    pub fn new(result_kind: ResultKind, window: TimeWindow) -> Self {
        Self {
            result_kind,
            window,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "My Top {} ({})", self.result_kind.label(), self.window.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Exhausted,
    Failed,
}

impl FetchStatus {
    /// Whether the current query accepts no further page requests.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchStatus::Exhausted | FetchStatus::Failed)
    }
}

// Provider payloads. Every field is optional and decoded on its own, so a
// badly typed field becomes `None` and a broken list element becomes an empty
// item in place, instead of failing the whole page.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPage {
    #[serde(deserialize_with = "lenient_list")]
    pub items: Vec<RawItem>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawItem {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_optional_list")]
    pub artists: Option<Vec<RawArtistRef>>,
    #[serde(deserialize_with = "lenient")]
    pub album: Option<RawAlbum>,
    #[serde(deserialize_with = "lenient")]
    pub duration_ms: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub external_urls: Option<ExternalUrls>,
    #[serde(deserialize_with = "lenient")]
    pub preview_url: Option<String>,
    #[serde(deserialize_with = "lenient_optional_list")]
    pub images: Option<Vec<RawImage>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawArtistRef {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAlbum {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_optional_list")]
    pub images: Option<Vec<RawImage>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawImage {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub height: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalUrls {
    #[serde(deserialize_with = "lenient")]
    pub spotify: Option<String>,
}

/// Response of `GET /albums/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAlbumWithTracks {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_list")]
    pub images: Option<Vec<RawImage>>,
    pub tracks: RawPage,
}

/// Decodes a value, falling back to `T::default()` when it has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A list must be present; each element that does not decode becomes
/// `T::default()` at its position.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.into_iter().map(decode_or_default).collect())
}

fn lenient_optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(Some(values.into_iter().map(decode_or_default).collect())),
        _ => Ok(None),
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}

// Normalized records consumed by the presentation.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: Option<String>,
    pub title: String,
    pub artists: Vec<ArtistName>,
    pub album_name: Option<String>,
    pub image_url: Option<String>,
    pub duration_ms: u64,
    pub external_url: Option<String>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub id: Option<String>,
    pub name: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizedRecord {
    Track(TrackRecord),
    Artist(ArtistRecord),
}

impl NormalizedRecord {
    pub fn id(&self) -> Option<&str> {
        match self {
            NormalizedRecord::Track(t) => t.id.as_deref(),
            NormalizedRecord::Artist(a) => a.id.as_deref(),
        }
    }

    /// Key for list rendering: the provider id, or the position when the
    /// provider omitted one. The positional fallback is not stable across
    /// data changes.
    pub fn key(&self, index: usize) -> String {
        match self.id() {
            Some(id) => id.to_string(),
            None => index.to_string(),
        }
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            NormalizedRecord::Track(_) => ResultKind::Track,
            NormalizedRecord::Artist(_) => ResultKind::Artist,
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub title: String,
    pub artists: String,
    pub album: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub name: String,
    pub image: String,
}
