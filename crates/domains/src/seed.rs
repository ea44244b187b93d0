//! # Seed Data
//!
//! The fallback `AppState` used when storage is empty or unreadable, plus
//! the placeholder values new entities are created with.

use crate::ids;
use crate::models::{
    AppState, AssetType, Course, LearningAsset, Lesson, LessonType, LmsConfig, Mentor, Socials,
};

pub const BRAND_NAME: &str = "Arunika Academy";

pub const NEW_COURSE_TITLE: &str = "Judul Kursus Baru";
pub const NEW_COURSE_DESCRIPTION: &str = "Deskripsi singkat materi pembelajaran...";
pub const NEW_COURSE_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?auto=format&fit=crop&w=800&q=80";

pub const NEW_VIDEO_LESSON_TITLE: &str = "Video Materi Baru";
pub const NEW_TEXT_LESSON_TITLE: &str = "Halaman Materi Baru";
pub const NEW_LESSON_CONTENT: &str = "Tuliskan detail materi di sini...";
pub const DEFAULT_VIDEO_URL: &str = "https://www.youtube.com/embed/qz0aGYrrlhU";

pub const NEW_ASSET_NAME: &str = "Resource Baru";
pub const NEW_ASSET_URL: &str = "#";

pub fn initial_config() -> LmsConfig {
    LmsConfig {
        logo: "https://cdn-icons-png.flaticon.com/512/3222/3222800.png".into(),
        brand_name: BRAND_NAME.into(),
        hero_title: "Belajar Kreatif, Tanpa Batas!".into(),
        hero_subtitle: "Platform LMS profesional untuk masa depan yang lebih cerah dengan kurikulum terpadu."
            .into(),
        supabase_url: None,
        supabase_key: None,
    }
}

/// Mentor attached to the seeded example course.
pub fn default_mentor() -> Mentor {
    Mentor {
        name: "Arunika Mentor".into(),
        role: "Senior Educator".into(),
        bio: "Berpengalaman lebih dari 10 tahun di industri kreatif dan edukasi teknologi.".into(),
        photo: "https://i.pravatar.cc/150?u=arunika".into(),
        website: "https://arunika.edu".into(),
        socials: Socials {
            twitter: Some("@arunika".into()),
            linkedin: Some("arunika-academy".into()),
            instagram: None,
        },
    }
}

/// Mentor given to a freshly added course.
pub fn new_course_mentor() -> Mentor {
    Mentor {
        name: "Mentor Baru".into(),
        role: "Instruktur".into(),
        bio: "Bio mentor di sini...".into(),
        photo: "https://i.pravatar.cc/150".into(),
        website: String::new(),
        socials: Socials::default(),
    }
}

pub fn new_lesson_title(kind: LessonType) -> &'static str {
    match kind {
        LessonType::Video => NEW_VIDEO_LESSON_TITLE,
        LessonType::Text => NEW_TEXT_LESSON_TITLE,
    }
}

/// The hardcoded fallback state: default branding and one example course.
pub fn initial_state() -> AppState {
    AppState {
        config: initial_config(),
        courses: vec![example_course(ids::now_millis())],
    }
}

fn example_course(created_at: i64) -> Course {
    Course {
        id: "course-1".into(),
        title: "Dasar Pemrograman Web".into(),
        description: "Pelajari dasar-dasar HTML, CSS, dan JavaScript dengan cara yang menyenangkan."
            .into(),
        thumbnail:
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=800&q=80"
                .into(),
        is_public: true,
        created_at,
        lessons: vec![
            Lesson {
                id: "lesson-1-1".into(),
                title: "Pengenalan HTML".into(),
                kind: LessonType::Video,
                video_url: DEFAULT_VIDEO_URL.into(),
                content: "HTML adalah bahasa standar untuk membuat halaman web.".into(),
                description: String::new(),
                order: 0,
            },
            Lesson {
                id: "lesson-1-2".into(),
                title: "Materi Text: Dasar Tag".into(),
                kind: LessonType::Text,
                video_url: String::new(),
                content: "Berikut adalah daftar tag dasar HTML yang harus Anda ketahui...".into(),
                description: String::new(),
                order: 1,
            },
        ],
        assets: vec![LearningAsset {
            id: "a1".into(),
            name: "Cheat Sheet HTML/CSS".into(),
            kind: AssetType::Link,
            url: "#".into(),
        }],
        mentor: default_mentor(),
    }
}
