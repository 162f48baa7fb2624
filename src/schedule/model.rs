//! Timetable model: sessions, sections, schedules, and the conflict predicates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of meeting a section holds.
///
/// Catalog records carry other activity strings too (`"Work Placement"`,
/// `"Waiting List"`, ...); those never parse and therefore never schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Laboratory,
    Lecture,
    Seminar,
    Studio,
    Tutorial,
}

impl ActivityType {
    /// Activities that count as "the" class meeting: exactly one must be
    /// chosen per course per term. Labs and tutorials are optional add-ons.
    pub const LECTURE_EQUIVALENT: [ActivityType; 3] = [
        ActivityType::Lecture,
        ActivityType::Seminar,
        ActivityType::Studio,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Laboratory => "Laboratory",
            ActivityType::Lecture => "Lecture",
            ActivityType::Seminar => "Seminar",
            ActivityType::Studio => "Studio",
            ActivityType::Tutorial => "Tutorial",
        }
    }

    /// Parses a raw catalog activity string. `None` for anything outside the
    /// closed set.
    pub fn from_catalog(raw: &str) -> Option<Self> {
        match raw {
            "Laboratory" => Some(ActivityType::Laboratory),
            "Lecture" => Some(ActivityType::Lecture),
            "Seminar" => Some(ActivityType::Seminar),
            "Studio" => Some(ActivityType::Studio),
            "Tutorial" => Some(ActivityType::Tutorial),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid term {0:?}, expected \"1\", \"2\" or \"1-2\"")]
pub struct InvalidTerm(pub String);

/// Academic term. `Full` is the pseudo-value `"1-2"`: as a session value it
/// marks a year-long meeting, as a request value it means "evaluate both
/// terms separately and union the results".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "1-2")]
    Full,
}

impl Term {
    pub fn as_str(self) -> &'static str {
        match self {
            Term::One => "1",
            Term::Two => "2",
            Term::Full => "1-2",
        }
    }
}

impl FromStr for Term {
    type Err = InvalidTerm;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "1" => Ok(Term::One),
            "2" => Ok(Term::Two),
            "1-2" => Ok(Term::Full),
            other => Err(InvalidTerm(other.to_owned())),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weekly meeting occurrence of a section. Immutable once built;
/// `start < end`, both in 24-hour HHMM form (e.g. 1330).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    pub activity: ActivityType,
    pub term: Term,
    /// Single weekday token, e.g. `"Mon"`.
    pub day: String,
    pub start: u32,
    pub end: u32,
}

impl ClassSession {
    /// Whether `other` collides with this session.
    ///
    /// Deliberately the historical two-clause test, not a symmetric interval
    /// overlap: an `other` that strictly contains `self` with no shared
    /// endpoint region is not flagged in this direction. Callers that need
    /// full coverage test both orders (the schedule predicate does).
    pub fn conflicts_with(&self, other: &ClassSession) -> bool {
        self.term == other.term
            && self.day == other.day
            && ((self.start <= other.start && other.start < self.end)
                || (self.start < other.end && other.end <= self.end))
    }
}

/// One offered instance of a course for one activity type, possibly meeting
/// several times per week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSection {
    /// Fully qualified: `<DEPT> <COURSE> <SECTION>`, e.g. `"CPSC 121 101"`.
    pub name: String,
    pub sessions: Vec<ClassSession>,
}

impl CourseSection {
    /// Any session of `self` colliding with any session of `other`,
    /// testing sessions in the `self` → `other` direction only.
    pub fn conflicts_with(&self, other: &CourseSection) -> bool {
        self.sessions
            .iter()
            .any(|a| other.sessions.iter().any(|b| a.conflicts_with(b)))
    }
}

/// Any section on the left colliding with a differently-named section on the
/// right. Same-name pairs are never compared; the generator never puts two
/// sections of one course into a schedule together.
pub fn any_cross_conflict(left: &[CourseSection], right: &[CourseSection]) -> bool {
    left.iter().any(|a| {
        right
            .iter()
            .any(|b| a.name != b.name && a.conflicts_with(b))
    })
}

/// A candidate timetable: one section bundle per requested course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub courses: Vec<CourseSection>,
}

impl Schedule {
    /// True if any two differently-named sections collide. The full cross
    /// product covers both orders of the asymmetric session test.
    pub fn has_conflict(&self) -> bool {
        any_cross_conflict(&self.courses, &self.courses)
    }

    /// Adds every section of `bundle`, or nothing: `None` as soon as any
    /// addition introduces a conflict.
    pub fn try_extend(&self, bundle: &[CourseSection]) -> Option<Schedule> {
        let mut extended = self.clone();
        for section in bundle {
            extended.courses.push(section.clone());
            if extended.has_conflict() {
                return None;
            }
        }
        Some(extended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(term: Term, day: &str, start: u32, end: u32) -> ClassSession {
        ClassSession {
            activity: ActivityType::Lecture,
            term,
            day: day.to_owned(),
            start,
            end,
        }
    }

    fn section(name: &str, sessions: Vec<ClassSession>) -> CourseSection {
        CourseSection {
            name: name.to_owned(),
            sessions,
        }
    }

    #[test]
    fn overlapping_sessions_conflict() {
        let a = session(Term::One, "Mon", 900, 1100);
        let b = session(Term::One, "Mon", 1000, 1200);
        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn back_to_back_sessions_do_not_conflict() {
        // Half-open intervals: one class may start exactly when another ends.
        let a = session(Term::One, "Mon", 900, 1000);
        let b = session(Term::One, "Mon", 1000, 1100);
        assert!(!a.conflicts_with(&b));
        assert!(!b.conflicts_with(&a));
    }

    #[test]
    fn different_day_or_term_never_conflicts() {
        let a = session(Term::One, "Mon", 900, 1100);
        assert!(!a.conflicts_with(&session(Term::One, "Tue", 900, 1100)));
        assert!(!a.conflicts_with(&session(Term::Two, "Mon", 900, 1100)));
        // A year-long session only matches another year-long session.
        assert!(!a.conflicts_with(&session(Term::Full, "Mon", 900, 1100)));
    }

    #[test]
    fn containment_is_only_caught_in_one_direction() {
        // Historical quirk kept for compatibility: the two-clause test sees
        // an inner session from the outer one, but not the outer session
        // from the inner one.
        let outer = session(Term::One, "Mon", 900, 1200);
        let inner = session(Term::One, "Mon", 1000, 1100);
        assert!(outer.conflicts_with(&inner));
        assert!(!inner.conflicts_with(&outer));
    }

    #[test]
    fn section_conflict_spans_all_sessions() {
        let a = section(
            "CPSC 121 101",
            vec![
                session(Term::One, "Mon", 900, 1000),
                session(Term::One, "Wed", 900, 1000),
            ],
        );
        let b = section("MATH 220 101", vec![session(Term::One, "Wed", 930, 1030)]);
        let c = section("MATH 220 102", vec![session(Term::One, "Fri", 930, 1030)]);
        assert!(a.conflicts_with(&b));
        assert!(!a.conflicts_with(&c));
    }

    #[test]
    fn same_name_sections_are_never_compared() {
        let a = section("CPSC 121 101", vec![session(Term::One, "Mon", 900, 1000)]);
        let clash = Schedule {
            courses: vec![a.clone(), a],
        };
        assert!(!clash.has_conflict());
    }

    #[test]
    fn try_extend_is_all_or_nothing() {
        let base = Schedule {
            courses: vec![section(
                "MATH 220 101",
                vec![session(Term::One, "Mon", 900, 1000)],
            )],
        };
        let lecture = section("CPSC 121 101", vec![session(Term::One, "Tue", 900, 1000)]);
        let lab = section("CPSC 121 L1A", vec![session(Term::One, "Mon", 930, 1130)]);

        // The lecture alone fits.
        assert!(base.try_extend(&[lecture.clone()]).is_some());
        // The lab collides, so the whole bundle is rejected.
        assert!(base.try_extend(&[lecture, lab]).is_none());
    }

    #[test]
    fn sections_without_sessions_conflict_with_nothing() {
        let bare = section("ASIA 100 101", vec![]);
        let busy = section("MATH 220 101", vec![session(Term::One, "Mon", 0, 2359)]);
        assert!(!bare.conflicts_with(&busy));
        assert!(!busy.conflicts_with(&bare));
    }
}
