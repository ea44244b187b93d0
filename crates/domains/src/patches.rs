//! # Patches
//!
//! Typed partial updates coming from edit forms. A `None` field leaves the
//! target untouched; a `Some` field replaces it.

use serde::{Deserialize, Serialize};

use crate::models::{AssetType, Course, LearningAsset, Lesson, LessonType, LmsConfig};

/// Replaces `$target.$field` for every `Some` field of `$patch`.
macro_rules! apply_fields {
    ($patch:expr, $target:expr, [$($field:ident),+ $(,)?]) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPatch {
    pub logo: Option<String>,
    pub brand_name: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges into `config`. An empty brand name is ignored so the brand
    /// can never be blanked out.
    pub fn apply(self, config: &mut LmsConfig) {
        let ConfigPatch {
            logo,
            brand_name,
            hero_title,
            hero_subtitle,
            supabase_url,
            supabase_key,
        } = self;

        if let Some(name) = brand_name.filter(|n| !n.trim().is_empty()) {
            config.brand_name = name;
        }
        if let Some(logo) = logo {
            config.logo = logo;
        }
        if let Some(title) = hero_title {
            config.hero_title = title;
        }
        if let Some(subtitle) = hero_subtitle {
            config.hero_subtitle = subtitle;
        }
        if supabase_url.is_some() {
            config.supabase_url = supabase_url;
        }
        if supabase_key.is_some() {
            config.supabase_key = supabase_key;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub is_public: Option<bool>,
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply(self, course: &mut Course) {
        apply_fields!(self, course, [title, description, thumbnail, is_public]);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPatch {
    pub title: Option<String>,
    pub kind: Option<LessonType>,
    pub video_url: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
}

impl LessonPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply(self, lesson: &mut Lesson) {
        apply_fields!(self, lesson, [title, kind, video_url, content, description]);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub kind: Option<AssetType>,
    pub url: Option<String>,
}

impl AssetPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply(self, asset: &mut LearningAsset) {
        apply_fields!(self, asset, [name, kind, url]);
    }
}
