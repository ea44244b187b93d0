//! # Domain Models
//!
//! These structs represent the persisted shape of the LMS: one `AppState`
//! document holding the branding config and every course.
//! Field names serialize in camelCase to stay compatible with documents
//! written by earlier versions of the front end.

use serde::{Deserialize, Serialize};

/// Root aggregate. The only unit that is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub config: LmsConfig,
    /// Most recent first.
    pub courses: Vec<Course>,
}

impl AppState {
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }
}

/// Site-wide branding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LmsConfig {
    /// URL or `data:` URI
    pub logo: String,
    pub brand_name: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    /// Forwarded untouched; nothing in the core reads these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supabase_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supabase_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    /// URL or `data:` URI
    pub thumbnail: String,
    pub is_public: bool,
    /// Epoch milliseconds
    pub created_at: i64,
    pub lessons: Vec<Lesson>,
    pub assets: Vec<LearningAsset>,
    pub mentor: Mentor,
}

impl Course {
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn asset(&self, asset_id: &str) -> Option<&LearningAsset> {
        self.assets.iter().find(|a| a.id == asset_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Video,
    Text,
}

impl std::fmt::Display for LessonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonType::Video => f.write_str("video"),
            LessonType::Text => f.write_str("text"),
        }
    }
}

impl std::str::FromStr for LessonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "video" => Ok(LessonType::Video),
            "text" => Ok(LessonType::Text),
            other => Err(format!("unknown lesson type '{other}' (expected video or text)")),
        }
    }
}

/// An ordered unit of course content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: LessonType,
    /// Only meaningful for `LessonType::Video`.
    #[serde(default)]
    pub video_url: String,
    /// Plain text body
    pub content: String,
    /// Rich text (HTML) supplement
    #[serde(default)]
    pub description: String,
    /// Sequence length at creation time. Never re-packed.
    pub order: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    File,
    Link,
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::File => f.write_str("file"),
            AssetType::Link => f.write_str("link"),
        }
    }
}

impl std::str::FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(AssetType::File),
            "link" => Ok(AssetType::Link),
            other => Err(format!("unknown asset type '{other}' (expected file or link)")),
        }
    }
}

/// A supplementary resource attached to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningAsset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub url: String,
}

/// The instructor profile shown on a course page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// URL or `data:` URI
    pub photo: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub socials: Socials,
}

/// Social handles keyed by platform. Absent platforms are omitted on write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Socials {
    /// `(platform, handle)` pairs for the platforms that are set.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("twitter", self.twitter.as_deref()),
            ("linkedin", self.linkedin.as_deref()),
            ("instagram", self.instagram.as_deref()),
        ]
        .into_iter()
        .filter_map(|(platform, handle)| handle.map(|h| (platform, h)))
    }
}
