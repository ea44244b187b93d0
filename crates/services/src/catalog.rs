//! # Catalog
//!
//! Read-only views for learners: the public course list, the course page
//! with its current lesson, and shareable links.

use domains::{AppState, Course, Lesson};

/// Public courses in stored order (most recent first).
///
/// Only the listing honours `is_public`. A hidden course still opens through
/// its share link or a [`CourseView`].
pub fn public_courses(state: &AppState) -> impl Iterator<Item = &Course> {
    state.courses.iter().filter(|c| c.is_public)
}

/// Link a learner can open to land on the course page.
pub fn share_link(base_url: &str, course_id: &str) -> String {
    let base = base_url.trim_end_matches('#');
    format!("{base}#/course/{course_id}")
}

/// A learner's view of one course.
///
/// Tracks which lesson is selected. With no selection, or when the selected
/// lesson has since been removed, the first lesson is current. Visibility is
/// not checked here: anyone holding the id can open a hidden course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseView {
    course_id: String,
    selected: Option<String>,
}

impl CourseView {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            selected: None,
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Remembers `lesson_id` as the learner's pick until they pick another.
    pub fn select(&mut self, lesson_id: impl Into<String>) {
        self.selected = Some(lesson_id.into());
    }

    pub fn course<'a>(&self, state: &'a AppState) -> Option<&'a Course> {
        state.course(&self.course_id)
    }

    pub fn current_lesson<'a>(&self, state: &'a AppState) -> Option<&'a Lesson> {
        let course = self.course(state)?;
        self.selected
            .as_deref()
            .and_then(|id| course.lesson(id))
            .or_else(|| course.lessons.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutations;
    use domains::{seed, CoursePatch};

    #[test]
    fn public_courses_skips_hidden() {
        let state = mutations::add_course(seed::initial_state());
        let hidden_id = state.courses[0].id.clone();
        let state = mutations::update_course(
            state,
            &hidden_id,
            CoursePatch {
                is_public: Some(false),
                ..Default::default()
            },
        );

        let ids: Vec<&str> = public_courses(&state).map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["course-1"]);
    }

    #[test]
    fn hidden_course_still_opens_by_id() {
        let state = mutations::update_course(
            seed::initial_state(),
            "course-1",
            CoursePatch {
                is_public: Some(false),
                ..Default::default()
            },
        );

        assert_eq!(public_courses(&state).count(), 0);
        let view = CourseView::new("course-1");
        assert_eq!(view.course(&state).unwrap().id, "course-1");
        assert_eq!(view.current_lesson(&state).unwrap().id, "lesson-1-1");
    }

    #[test]
    fn current_lesson_defaults_to_first() {
        let state = seed::initial_state();
        let view = CourseView::new("course-1");
        assert_eq!(view.current_lesson(&state).unwrap().id, "lesson-1-1");
    }

    #[test]
    fn current_lesson_keeps_selection() {
        let state = seed::initial_state();
        let mut view = CourseView::new("course-1");
        view.select("lesson-1-2");
        assert_eq!(view.current_lesson(&state).unwrap().id, "lesson-1-2");

        // Unrelated edits do not reset the pick.
        let state = mutations::add_lesson(state, "course-1", domains::LessonType::Video);
        assert_eq!(view.current_lesson(&state).unwrap().id, "lesson-1-2");
    }

    #[test]
    fn current_lesson_falls_back_when_selection_deleted() {
        let mut view = CourseView::new("course-1");
        view.select("lesson-1-2");
        let state = mutations::delete_lesson(seed::initial_state(), "course-1", "lesson-1-2");
        assert_eq!(view.current_lesson(&state).unwrap().id, "lesson-1-1");
    }

    #[test]
    fn current_lesson_none_for_empty_or_unknown_course() {
        let state = mutations::add_course(seed::initial_state());
        let empty = CourseView::new(state.courses[0].id.clone());
        assert!(empty.current_lesson(&state).is_none());
        assert!(CourseView::new("ghost").current_lesson(&state).is_none());
    }

    #[test]
    fn share_link_uses_hash_route() {
        assert_eq!(
            share_link("https://lms.example.com/", "course-1"),
            "https://lms.example.com/#/course/course-1"
        );
        assert_eq!(share_link("http://x/#", "c"), "http://x/#/course/c");
    }
}
