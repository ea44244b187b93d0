//! Time-based identifiers: a short prefix followed by epoch milliseconds
//! (`course-1717171717171`, `l-…`, `a-…`).

use chrono::Utc;

pub const COURSE_PREFIX: &str = "course-";
pub const LESSON_PREFIX: &str = "l-";
pub const ASSET_PREFIX: &str = "a-";

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Builds `prefix + millis`, stepping forward one millisecond at a time
/// until the id is not already used by a sibling.
pub fn next_id<'a, I>(prefix: &str, millis: i64, siblings: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = siblings.into_iter().collect();
    let mut stamp = millis;
    loop {
        let candidate = format!("{prefix}{stamp}");
        if !taken.contains(&candidate.as_str()) {
            return candidate;
        }
        stamp += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prefix_and_millis() {
        assert_eq!(next_id(COURSE_PREFIX, 42, Vec::<&str>::new()), "course-42");
        assert_eq!(next_id(LESSON_PREFIX, 7, ["a-7"]), "l-7");
    }

    #[test]
    fn skips_ids_already_taken() {
        let id = next_id(ASSET_PREFIX, 100, ["a-100", "a-101"]);
        assert_eq!(id, "a-102");
    }

    #[test]
    fn clock_is_past_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
