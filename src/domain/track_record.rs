use serde::Deserialize;

/// One entry of the overview file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    #[serde(default)]
    pub name: String,
    pub comment: Option<String>,
    pub time_created: Option<DateReference>,
    #[serde(default)]
    pub points: SeriesReference,
    #[serde(default)]
    pub altitudes: SeriesReference,
    #[serde(default, rename = "dates")]
    pub timestamps: SeriesReference,
    #[serde(default)]
    pub tags: Vec<String>,
    pub distance: Option<f64>,
    pub duration: Option<f64>,
}

impl TrackRecord {
    /// The comment, treating an empty string as not provided.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|comment| !comment.trim().is_empty())
    }

    pub fn start_time_iso(&self) -> Option<&str> {
        self.time_created.as_ref().and_then(|date| date.iso.as_deref())
    }

    pub fn keywords(&self) -> Option<String> {
        let tags: Vec<&str> = self.tags.iter().map(|tag| tag.trim()).filter(|tag| !tag.is_empty()).collect();
        if tags.is_empty() { None } else { Some(tags.join(", ")) }
    }
}

/// Pointer to an auxiliary JSON file holding one series of a track.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeriesReference {
    #[serde(default)]
    pub name: String,
    pub url: Option<String>,
}

impl SeriesReference {
    /// The remote location, if any. Blank URLs count as absent.
    pub fn remote_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DateReference {
    pub iso: Option<String>,
}
