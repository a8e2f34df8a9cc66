//! Session and year tokens embedded in file paths.
//!
//! Paths encode the exam sitting either as a directory named after the
//! session letter (`2023/w/paper.pdf`) or as a letter token inside a file
//! or directory name, delimited by `_`, `-` or `.` (`0580_w_qp.pdf`).
//! The year is a directory or file name of exactly four digits; subject
//! codes such as `0580` have the same shape but sit above the year.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::filter::{FilterState, Session};

/// Session letter delimited by `_`, `-` or `.` on both sides.
static SESSION_IN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[_\-.]([msw])[_\-.]").unwrap());

/// The session a path belongs to, if it names one.
///
/// A directory segment that is just the session letter wins over a token
/// inside a name. Within each rule the first occurrence is used.
pub fn session_token(path: &str) -> Option<Session> {
    session_from_directory(path).or_else(|| session_from_name(path))
}

fn session_from_directory(path: &str) -> Option<Session> {
    let segments: Vec<&str> = path.split('/').collect();
    let (_, dirs) = segments.split_last()?;
    dirs.iter().find_map(|seg| {
        let mut chars = seg.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Session::from_letter(c),
            _ => None,
        }
    })
}

fn session_from_name(path: &str) -> Option<Session> {
    SESSION_IN_NAME
        .captures(path)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .and_then(Session::from_letter)
}

/// The last path segment made of exactly four ASCII digits.
pub fn year_token(path: &str) -> Option<i32> {
    path.split('/')
        .rfind(|seg| seg.len() == 4 && seg.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|seg| seg.parse().ok())
}

/// Whether a file path passes the session and year filter.
///
/// Files without the required tokens are excluded.
pub fn file_matches(path: &str, filter: &FilterState) -> bool {
    if filter.session != Session::All && session_token(path) != Some(filter.session) {
        return false;
    }
    year_token(path).is_some_and(|year| filter.year_in_range(year))
}
