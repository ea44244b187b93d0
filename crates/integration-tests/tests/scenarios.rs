use domains::{seed, LessonType, Mentor, Socials};
use services::mutations;

#[test]
fn deleting_first_seed_lesson_leaves_the_text_lesson() {
    let state = mutations::delete_lesson(seed::initial_state(), "course-1", "lesson-1-1");

    let course = state.course("course-1").unwrap();
    assert_eq!(course.lessons.len(), 1);
    assert_eq!(course.lessons[0].id, "lesson-1-2");
}

#[test]
fn replacing_the_mentor_keeps_course_content() {
    let before = seed::initial_state();
    let jane = Mentor {
        name: "Jane".into(),
        role: "Coach".into(),
        bio: String::new(),
        photo: String::new(),
        website: String::new(),
        socials: Socials::default(),
    };

    let after = mutations::update_mentor(before.clone(), "course-1", jane.clone());

    assert_eq!(after.courses[0].mentor, jane);
    assert_eq!(after.courses[0].lessons, before.courses[0].lessons);
    assert_eq!(after.courses[0].assets, before.courses[0].assets);
    assert_eq!(after.config, before.config);
}

#[test]
fn add_then_delete_course_is_identity_on_the_list() {
    let before = seed::initial_state();
    let added = mutations::add_course(before.clone());
    assert_eq!(added.courses.len(), before.courses.len() + 1);

    let id = added.courses[0].id.clone();
    let after = mutations::delete_course(added, &id);
    assert_eq!(after, before);
}

#[test]
fn lesson_kind_decides_video_url() {
    let state = mutations::add_lesson(seed::initial_state(), "course-1", LessonType::Video);
    assert!(!state.courses[0].lessons[2].video_url.is_empty());

    let state = mutations::add_lesson(state, "course-1", LessonType::Text);
    assert!(state.courses[0].lessons[3].video_url.is_empty());
}

#[test]
fn edits_against_unknown_ids_change_nothing() {
    let before = seed::initial_state();

    let after = mutations::delete_course(before.clone(), "course-404");
    let after = mutations::delete_lesson(after, "course-1", "lesson-404");
    let after = mutations::delete_asset(after, "course-404", "a1");
    let after = mutations::update_mentor(after, "course-404", Mentor::default());
    let after = mutations::add_asset(after, "course-404");

    assert_eq!(after, before);
}

#[test]
fn order_is_not_repacked_after_deletes() {
    let state = seed::initial_state();
    let state = mutations::delete_lesson(state, "course-1", "lesson-1-1");
    let state = mutations::add_lesson(state, "course-1", LessonType::Text);

    let orders: Vec<u32> = state.courses[0].lessons.iter().map(|l| l.order).collect();
    assert_eq!(orders, vec![1, 1]);
}

#[test]
fn deleting_a_course_drops_its_children() {
    let state = mutations::add_lesson(seed::initial_state(), "course-1", LessonType::Text);
    let state = mutations::add_asset(state, "course-1");
    let state = mutations::delete_course(state, "course-1");

    assert!(state.courses.is_empty());
    assert!(state.course("course-1").is_none());
}
