//! # State Mutation API
//!
//! Every operation consumes the current `AppState` and returns the next one.
//! Targeting a course, lesson, or asset that does not exist is a silent
//! no-op: the state comes back unchanged and a `debug` event is emitted.

use domains::ids::{self, ASSET_PREFIX, COURSE_PREFIX, LESSON_PREFIX};
use domains::{
    seed, AppState, AssetPatch, AssetType, ConfigPatch, Course, CoursePatch, LearningAsset,
    Lesson, LessonPatch, LessonType, Mentor,
};
use tracing::debug;

pub fn update_config(mut state: AppState, patch: ConfigPatch) -> AppState {
    patch.apply(&mut state.config);
    state
}

/// Prepends a placeholder course so it shows first in the catalog.
pub fn add_course(mut state: AppState) -> AppState {
    let now = ids::now_millis();
    let id = ids::next_id(COURSE_PREFIX, now, state.courses.iter().map(|c| c.id.as_str()));

    let course = Course {
        id,
        title: seed::NEW_COURSE_TITLE.into(),
        description: seed::NEW_COURSE_DESCRIPTION.into(),
        thumbnail: seed::NEW_COURSE_THUMBNAIL.into(),
        is_public: true,
        created_at: now,
        lessons: Vec::new(),
        assets: Vec::new(),
        mentor: seed::new_course_mentor(),
    };
    state.courses.insert(0, course);
    state
}

pub fn update_course(state: AppState, course_id: &str, patch: CoursePatch) -> AppState {
    with_course(state, course_id, |course| patch.apply(course))
}

/// Removes the course along with its lessons, assets, and mentor.
pub fn delete_course(mut state: AppState, course_id: &str) -> AppState {
    let before = state.courses.len();
    state.courses.retain(|c| c.id != course_id);
    if state.courses.len() == before {
        debug!(course_id, "delete_course: no such course");
    }
    state
}

/// Appends a placeholder lesson. Only video lessons get a pre-filled URL.
pub fn add_lesson(state: AppState, course_id: &str, kind: LessonType) -> AppState {
    with_course(state, course_id, |course| {
        let id = ids::next_id(
            LESSON_PREFIX,
            ids::now_millis(),
            course.lessons.iter().map(|l| l.id.as_str()),
        );
        let video_url = match kind {
            LessonType::Video => seed::DEFAULT_VIDEO_URL.to_string(),
            LessonType::Text => String::new(),
        };

        course.lessons.push(Lesson {
            id,
            title: seed::new_lesson_title(kind).into(),
            kind,
            video_url,
            content: seed::NEW_LESSON_CONTENT.into(),
            description: String::new(),
            order: u32::try_from(course.lessons.len()).unwrap_or(u32::MAX),
        });
    })
}

pub fn update_lesson(
    state: AppState,
    course_id: &str,
    lesson_id: &str,
    patch: LessonPatch,
) -> AppState {
    with_course(state, course_id, |course| {
        match course.lessons.iter_mut().find(|l| l.id == lesson_id) {
            Some(lesson) => patch.apply(lesson),
            None => debug!(course_id, lesson_id, "update_lesson: no such lesson"),
        }
    })
}

/// Removes the lesson. Remaining `order` values are left as they were.
pub fn delete_lesson(state: AppState, course_id: &str, lesson_id: &str) -> AppState {
    with_course(state, course_id, |course| {
        let before = course.lessons.len();
        course.lessons.retain(|l| l.id != lesson_id);
        if course.lessons.len() == before {
            debug!(course_id, lesson_id, "delete_lesson: no such lesson");
        }
    })
}

pub fn add_asset(state: AppState, course_id: &str) -> AppState {
    with_course(state, course_id, |course| {
        let id = ids::next_id(
            ASSET_PREFIX,
            ids::now_millis(),
            course.assets.iter().map(|a| a.id.as_str()),
        );
        course.assets.push(LearningAsset {
            id,
            name: seed::NEW_ASSET_NAME.into(),
            kind: AssetType::Link,
            url: seed::NEW_ASSET_URL.into(),
        });
    })
}

pub fn update_asset(
    state: AppState,
    course_id: &str,
    asset_id: &str,
    patch: AssetPatch,
) -> AppState {
    with_course(state, course_id, |course| {
        match course.assets.iter_mut().find(|a| a.id == asset_id) {
            Some(asset) => patch.apply(asset),
            None => debug!(course_id, asset_id, "update_asset: no such asset"),
        }
    })
}

pub fn delete_asset(state: AppState, course_id: &str, asset_id: &str) -> AppState {
    with_course(state, course_id, |course| {
        let before = course.assets.len();
        course.assets.retain(|a| a.id != asset_id);
        if course.assets.len() == before {
            debug!(course_id, asset_id, "delete_asset: no such asset");
        }
    })
}

/// Replaces the course's mentor wholesale.
pub fn update_mentor(state: AppState, course_id: &str, mentor: Mentor) -> AppState {
    with_course(state, course_id, |course| course.mentor = mentor)
}

/// Runs `edit` on the matching course, or returns `state` untouched.
fn with_course<F>(mut state: AppState, course_id: &str, edit: F) -> AppState
where
    F: FnOnce(&mut Course),
{
    match state.courses.iter_mut().find(|c| c.id == course_id) {
        Some(course) => edit(course),
        None => debug!(course_id, "no such course"),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::Socials;

    fn seeded() -> AppState {
        seed::initial_state()
    }

    #[test]
    fn add_course_prepends_one_course() {
        let before = seeded();
        let after = add_course(before.clone());

        assert_eq!(after.courses.len(), before.courses.len() + 1);
        let new = &after.courses[0];
        assert!(new.id.starts_with("course-"));
        assert!(new.lessons.is_empty() && new.assets.is_empty());
        assert!(new.is_public);
        assert_eq!(&after.courses[1..], &before.courses[..]);
    }

    #[test]
    fn add_then_delete_course_restores_list() {
        let before = seeded();
        let added = add_course(before.clone());
        let new_id = added.courses[0].id.clone();

        let after = delete_course(added, &new_id);
        assert_eq!(after.courses, before.courses);
    }

    #[test]
    fn back_to_back_adds_get_distinct_ids() {
        let state = add_course(add_course(seeded()));
        assert_ne!(state.courses[0].id, state.courses[1].id);

        let state = add_lesson(add_lesson(state, "course-1", LessonType::Text), "course-1", LessonType::Text);
        let lessons = &state.course("course-1").unwrap().lessons;
        assert_ne!(lessons[2].id, lessons[3].id);
    }

    #[test]
    fn delete_missing_course_is_noop() {
        let before = seeded();
        let after = delete_course(before.clone(), "nope");
        assert_eq!(after, before);
    }

    #[test]
    fn add_lesson_fills_video_url_only_for_video() {
        let state = add_lesson(seeded(), "course-1", LessonType::Video);
        let video = state.course("course-1").unwrap().lessons.last().unwrap().clone();
        assert_eq!(video.kind, LessonType::Video);
        assert!(!video.video_url.is_empty());
        assert_eq!(video.title, seed::NEW_VIDEO_LESSON_TITLE);

        let state = add_lesson(state, "course-1", LessonType::Text);
        let text = state.course("course-1").unwrap().lessons.last().unwrap();
        assert_eq!(text.kind, LessonType::Text);
        assert!(text.video_url.is_empty());
        assert_eq!(text.title, seed::NEW_TEXT_LESSON_TITLE);
    }

    #[test]
    fn add_lesson_order_is_sequence_length() {
        let state = add_lesson(seeded(), "course-1", LessonType::Text);
        let lessons = &state.course("course-1").unwrap().lessons;
        assert_eq!(lessons.len(), 3);
        assert_eq!(lessons[2].order, 2);
    }

    #[test]
    fn add_lesson_to_missing_course_is_noop() {
        let before = seeded();
        let after = add_lesson(before.clone(), "ghost", LessonType::Video);
        assert_eq!(after, before);
    }

    #[test]
    fn delete_lesson_keeps_remaining_order() {
        let state = delete_lesson(seeded(), "course-1", "lesson-1-1");
        let lessons = &state.course("course-1").unwrap().lessons;
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].id, "lesson-1-2");
        assert_eq!(lessons[0].order, 1);
    }

    #[test]
    fn update_lesson_changes_only_target() {
        let state = update_lesson(
            seeded(),
            "course-1",
            "lesson-1-2",
            LessonPatch {
                title: Some("Tags".into()),
                description: Some("<b>bold</b>".into()),
                ..Default::default()
            },
        );
        let course = state.course("course-1").unwrap();
        assert_eq!(course.lesson("lesson-1-2").unwrap().title, "Tags");
        assert_eq!(course.lesson("lesson-1-2").unwrap().description, "<b>bold</b>");
        assert_eq!(course.lesson("lesson-1-1").unwrap().title, "Pengenalan HTML");
    }

    #[test]
    fn update_missing_lesson_is_noop() {
        let before = seeded();
        let after = update_lesson(before.clone(), "course-1", "nope", LessonPatch::default());
        assert_eq!(after, before);
    }

    #[test]
    fn asset_lifecycle() {
        let state = add_asset(seeded(), "course-1");
        let course = state.course("course-1").unwrap();
        assert_eq!(course.assets.len(), 2);
        let new_id = course.assets[1].id.clone();
        assert!(new_id.starts_with("a-"));
        assert_eq!(course.assets[1].kind, AssetType::Link);

        let state = update_asset(
            state,
            "course-1",
            &new_id,
            AssetPatch {
                name: Some("Slides".into()),
                kind: Some(AssetType::File),
                url: Some("data:application/pdf;base64,AAAA".into()),
            },
        );
        let asset = state.course("course-1").unwrap().asset(&new_id).unwrap();
        assert_eq!(asset.name, "Slides");
        assert_eq!(asset.kind, AssetType::File);

        let state = delete_asset(state, "course-1", &new_id);
        assert_eq!(state.course("course-1").unwrap().assets.len(), 1);
    }

    #[test]
    fn update_mentor_leaves_content_untouched() {
        let before = seeded();
        let mentor = Mentor {
            name: "Jane".into(),
            role: "Coach".into(),
            bio: String::new(),
            photo: String::new(),
            website: String::new(),
            socials: Socials::default(),
        };
        let after = update_mentor(before.clone(), "course-1", mentor);

        assert_eq!(after.courses[0].mentor.name, "Jane");
        assert_eq!(after.courses[0].lessons, before.courses[0].lessons);
        assert_eq!(after.courses[0].assets, before.courses[0].assets);
    }

    #[test]
    fn update_course_toggles_visibility() {
        let state = update_course(
            seeded(),
            "course-1",
            CoursePatch {
                is_public: Some(false),
                ..Default::default()
            },
        );
        assert!(!state.courses[0].is_public);
        assert_eq!(state.courses[0].title, "Dasar Pemrograman Web");
    }

    #[test]
    fn update_config_merges_fields() {
        let state = update_config(
            seeded(),
            ConfigPatch {
                hero_title: Some("Hello".into()),
                ..Default::default()
            },
        );
        assert_eq!(state.config.hero_title, "Hello");
        assert_eq!(state.config.brand_name, seed::BRAND_NAME);
    }
}
