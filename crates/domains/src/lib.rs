//! arunika/crates/domains/src/lib.rs
//!
//! The persisted data model and port definitions for the Arunika LMS.

pub mod error;
pub mod ids;
pub mod models;
pub mod patches;
pub mod ports;
pub mod seed;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use patches::*;
pub use ports::*;

#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn test_lesson_serializes_camel_case_with_type_tag() {
        let lesson = Lesson {
            id: "l-1".into(),
            title: "Intro".into(),
            kind: LessonType::Video,
            video_url: "https://example.com/v".into(),
            content: "body".into(),
            description: "<p>more</p>".into(),
            order: 0,
        };
        let json = serde_json::to_value(&lesson).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["videoUrl"], "https://example.com/v");
        assert_eq!(json["order"], 0);
    }

    #[test]
    fn test_lesson_without_video_url_or_description_parses() {
        let json = r#"{"id":"l-2","title":"T","type":"text","content":"c","order":1}"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.kind, LessonType::Text);
        assert!(lesson.video_url.is_empty());
        assert!(lesson.description.is_empty());
    }

    #[test]
    fn test_socials_omit_missing_platforms() {
        let mentor = Mentor {
            name: "Jane".into(),
            socials: Socials {
                twitter: Some("@jane".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let json = serde_json::to_value(&mentor).unwrap();
        assert_eq!(json["socials"], serde_json::json!({ "twitter": "@jane" }));
        assert_eq!(mentor.socials.iter().collect::<Vec<_>>(), vec![("twitter", "@jane")]);
    }

    #[test]
    fn test_course_uses_camel_case_flags() {
        let course = &crate::seed::initial_state().courses[0];
        let json = serde_json::to_value(course).unwrap();
        assert_eq!(json["isPublic"], true);
        assert!(json["createdAt"].is_i64());
        assert_eq!(json["assets"][0]["type"], "link");
    }

    #[test]
    fn test_lesson_type_parses_case_insensitively() {
        assert_eq!("VIDEO".parse::<LessonType>(), Ok(LessonType::Video));
        assert!("audio".parse::<LessonType>().is_err());
        assert_eq!("file".parse::<AssetType>(), Ok(AssetType::File));
    }
}
