//! Plain-text rendering of catalog and course pages.

use std::fmt::Write;

use domains::{AppState, Course, LessonType};
use services::catalog::{self, CourseView};

/// Image fields may hold whole `data:` URIs; only show their media type.
fn image_label(value: &str) -> &str {
    match value.strip_prefix("data:") {
        Some(rest) => rest.split([';', ',']).next().unwrap_or("embedded image"),
        None => value,
    }
}

pub fn catalog(state: &AppState) -> String {
    let mut out = String::new();
    let cfg = &state.config;
    let _ = writeln!(out, "{}  [{}]", cfg.brand_name, image_label(&cfg.logo));
    let _ = writeln!(out, "{}", cfg.hero_title);
    let _ = writeln!(out, "{}\n", cfg.hero_subtitle);

    let mut any = false;
    for course in catalog::public_courses(state) {
        any = true;
        let _ = writeln!(
            out,
            "{:<24} {}  ({} lessons, mentor: {})",
            course.id,
            course.title,
            course.lessons.len(),
            course.mentor.name
        );
    }
    if !any {
        let _ = writeln!(out, "No public courses yet.");
    }
    out
}

pub fn course_table(state: &AppState) -> String {
    let mut out = String::new();
    for course in &state.courses {
        let _ = writeln!(
            out,
            "{:<24} {:<7} {:>3}L {:>3}A  {}",
            course.id,
            if course.is_public { "public" } else { "hidden" },
            course.lessons.len(),
            course.assets.len(),
            course.title
        );
    }
    out
}

/// `None` when the course does not exist.
pub fn course_page(state: &AppState, view: &CourseView, base_url: &str) -> Option<String> {
    let course = view.course(state)?;
    let current = view.current_lesson(state);
    let mut out = String::new();

    let _ = writeln!(out, "{}", course.title);
    let _ = writeln!(out, "{}\n", course.description);

    match current {
        Some(lesson) => {
            let _ = writeln!(out, "== {} ({})", lesson.title, lesson.kind);
            if lesson.kind == LessonType::Video {
                let _ = writeln!(out, "video: {}", lesson.video_url);
            }
            let _ = writeln!(out, "{}", lesson.content);
            if !lesson.description.is_empty() {
                let _ = writeln!(out, "\n{}", lesson.description);
            }
        }
        None => {
            let _ = writeln!(out, "This course has no lessons yet.");
        }
    }

    let _ = writeln!(out, "\nLessons:");
    for (position, lesson) in course.lessons.iter().enumerate() {
        let marker = if current.is_some_and(|c| c.id == lesson.id) { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {:>2}. {} [{}]", position + 1, lesson.title, lesson.id);
    }

    write_assets(&mut out, course);
    write_mentor(&mut out, course);
    let _ = writeln!(out, "\nShare: {}", catalog::share_link(base_url, &course.id));
    Some(out)
}

fn write_assets(out: &mut String, course: &Course) {
    if course.assets.is_empty() {
        return;
    }
    let _ = writeln!(out, "\nResources:");
    for asset in &course.assets {
        let _ = writeln!(out, "  - {} ({}): {}", asset.name, asset.kind, image_label(&asset.url));
    }
}

fn write_mentor(out: &mut String, course: &Course) {
    let mentor = &course.mentor;
    let _ = writeln!(out, "\nMentor: {} - {}", mentor.name, mentor.role);
    if !mentor.bio.is_empty() {
        let _ = writeln!(out, "  {}", mentor.bio);
    }
    if !mentor.website.is_empty() {
        let _ = writeln!(out, "  {}", mentor.website);
    }
    for (platform, handle) in mentor.socials.iter() {
        let _ = writeln!(out, "  {platform}: {handle}");
    }
}
