//! Read-only course catalog, loaded once from a static snapshot file and
//! queried through a narrow contract: section selection, existence checks,
//! activity checks, and the course-name list feeding the autocompleter.

mod snapshot;

pub use snapshot::{SectionRecord, Snapshot};

use crate::schedule::model::{ActivityType, ClassSession, CourseSection, Term};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog snapshot at {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog snapshot at {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A recovered-from data problem in one catalog record. Queries never abort
/// on malformed fields; they skip the offending session and report it here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Section the bad record belongs to, e.g. `"ASIA 100 101"`.
    pub section: String,
    pub detail: String,
}

impl Diagnostic {
    fn new(section: &str, detail: impl Into<String>) -> Self {
        Self {
            section: section.to_owned(),
            detail: detail.into(),
        }
    }
}

/// Immutable in-memory catalog handle. Constructed explicitly at startup and
/// replaced wholesale on reload; concurrent readers need no locking beyond
/// the `RwLock` the app state wraps it in.
#[derive(Debug)]
pub struct Catalog {
    departments: Snapshot,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let departments =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::from_snapshot(departments))
    }

    pub fn from_snapshot(departments: Snapshot) -> Self {
        Self { departments }
    }

    /// Number of courses across all departments.
    pub fn course_count(&self) -> usize {
        self.departments.values().map(IndexMap::len).sum()
    }

    fn course_records(&self, course: &str) -> Option<&IndexMap<String, SectionRecord>> {
        let department = course.split_whitespace().next()?;
        self.departments.get(department)?.get(course)
    }

    /// Case-sensitive existence check for a course code like `"CPSC 121"`.
    pub fn course_exists(&self, course: &str) -> bool {
        self.course_records(course).is_some()
    }

    /// Whether the course offers any section of the given activity type, in
    /// any term. Term-independent by contract: the generator uses this to
    /// decide whether labs/tutorials are part of a course at all.
    pub fn has_activity(&self, course: &str, activity: ActivityType) -> bool {
        let Some(records) = self.course_records(course) else {
            return false;
        };
        for (name, record) in records {
            if !name.starts_with(course) {
                continue;
            }
            let Some(primary) = record.activity.first() else {
                warn!(section = %name, "section record has no activity entries");
                continue;
            };
            if ActivityType::from_catalog(primary) == Some(activity) {
                return true;
            }
        }
        false
    }

    /// All known course codes, in snapshot order. Feeds the autocompleter.
    pub fn course_names(&self) -> impl Iterator<Item = &str> {
        self.departments
            .values()
            .flat_map(|courses| courses.keys().map(String::as_str))
    }

    /// Normalized sections of `course` whose primary activity is one of
    /// `kinds` and whose term matches `term` (`Term::Full` disables the term
    /// check). Empty for unknown courses. Malformed time or term fields are
    /// skipped and reported through `diagnostics`, never fatal.
    pub fn sections_for(
        &self,
        course: &str,
        term: Term,
        kinds: &[ActivityType],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<CourseSection> {
        let Some(records) = self.course_records(course) else {
            return Vec::new();
        };

        let mut sections = Vec::new();
        for (name, record) in records {
            if !name.starts_with(course) {
                continue;
            }
            let primary = record
                .activity
                .first()
                .and_then(|raw| ActivityType::from_catalog(raw));
            let Some(primary) = primary else {
                continue;
            };
            if !kinds.contains(&primary) {
                continue;
            }
            if term != Term::Full && record.term.first().map(String::as_str) != Some(term.as_str())
            {
                continue;
            }

            sections.push(CourseSection {
                name: name.clone(),
                sessions: expand_sessions(name, record, diagnostics),
            });
        }
        sections
    }
}

/// Expands a record's meeting rows into one `ClassSession` per day token.
/// All rows share the record's first start/end time pair; a bad pair voids
/// every session of the section (the section itself still schedules, as a
/// meeting-free placeholder) and is reported once.
fn expand_sessions(
    name: &str,
    record: &SectionRecord,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<ClassSession> {
    let start = match parse_time(record.start_time.first()) {
        Ok(start) => start,
        Err(detail) => {
            diagnostics.push(Diagnostic::new(name, format!("bad start_time: {detail}")));
            return Vec::new();
        }
    };
    let end = match parse_time(record.end_time.first()) {
        Ok(end) => end,
        Err(detail) => {
            diagnostics.push(Diagnostic::new(name, format!("bad end_time: {detail}")));
            return Vec::new();
        }
    };

    let mut sessions = Vec::new();
    for (row, day_list) in record.days.iter().enumerate() {
        let activity = record
            .activity
            .get(row)
            .and_then(|raw| ActivityType::from_catalog(raw));
        let Some(activity) = activity else {
            diagnostics.push(Diagnostic::new(
                name,
                format!("unrecognized activity in meeting row {row}"),
            ));
            continue;
        };
        let term = record.term.get(row).and_then(|raw| raw.parse::<Term>().ok());
        let Some(term) = term else {
            diagnostics.push(Diagnostic::new(
                name,
                format!("unrecognized term in meeting row {row}"),
            ));
            continue;
        };

        for day in day_list.split_whitespace() {
            sessions.push(ClassSession {
                activity,
                term,
                day: day.to_owned(),
                start,
                end,
            });
        }
    }
    sessions
}

/// Parses `"HH:MM"` (or `"H:MM"`) into the HHMM integer, e.g. `"13:30"` → 1330.
fn parse_time(raw: Option<&String>) -> Result<u32, String> {
    let Some(raw) = raw else {
        return Err("missing".to_owned());
    };
    raw.replace(':', "")
        .parse::<u32>()
        .map_err(|_| format!("unparseable {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "CPSC": {
                "CPSC 121": {
                    "CPSC 121 101": {
                        "activity": ["Lecture"],
                        "days": ["Mon Wed Fri"],
                        "start_time": ["9:00"],
                        "end_time": ["10:00"],
                        "interval": "",
                        "status": "Full",
                        "term": ["1"]
                    },
                    "CPSC 121 L1A": {
                        "activity": ["Laboratory"],
                        "days": ["Tue"],
                        "start_time": ["9:00"],
                        "end_time": ["11:00"],
                        "interval": "",
                        "status": "",
                        "term": ["1"]
                    },
                    "CPSC 121 201": {
                        "activity": ["Lecture"],
                        "days": ["Tue Thu"],
                        "start_time": ["12:30"],
                        "end_time": ["14:00"],
                        "interval": "",
                        "status": "",
                        "term": ["2"]
                    }
                }
            },
            "ASIA": {
                "ASIA 100": {
                    "ASIA 100 101": {
                        "activity": ["Lecture"],
                        "days": ["Mon Wed"],
                        "start_time": [""],
                        "end_time": ["14:00"],
                        "interval": "",
                        "status": "",
                        "term": ["1"]
                    }
                }
            },
            "APSC": {
                "APSC 210": {
                    "APSC 210 001": {
                        "activity": ["Work Placement"],
                        "days": ["Mon"],
                        "start_time": ["8:00"],
                        "end_time": ["9:00"],
                        "interval": "",
                        "status": "",
                        "term": ["1"]
                    }
                }
            }
        }))
        .expect("valid snapshot");
        Catalog::from_snapshot(snapshot)
    }

    #[test]
    fn existence_is_by_course_code() {
        let catalog = catalog();
        assert!(catalog.course_exists("CPSC 121"));
        assert!(!catalog.course_exists("CPSC 999"));
        assert!(!catalog.course_exists("ZZZZ 101"));
    }

    #[test]
    fn sections_filter_by_activity_and_term() {
        let catalog = catalog();
        let mut diagnostics = Vec::new();

        let lectures = catalog.sections_for(
            "CPSC 121",
            Term::One,
            &ActivityType::LECTURE_EQUIVALENT,
            &mut diagnostics,
        );
        assert_eq!(lectures.len(), 1);
        assert_eq!(lectures[0].name, "CPSC 121 101");
        // "Mon Wed Fri" expands into three sessions sharing one time pair.
        assert_eq!(lectures[0].sessions.len(), 3);
        assert_eq!(lectures[0].sessions[0].day, "Mon");
        assert_eq!(lectures[0].sessions[0].start, 900);
        assert_eq!(lectures[0].sessions[0].end, 1000);

        let both_terms = catalog.sections_for(
            "CPSC 121",
            Term::Full,
            &ActivityType::LECTURE_EQUIVALENT,
            &mut diagnostics,
        );
        assert_eq!(both_terms.len(), 2);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn unknown_activities_never_select() {
        let catalog = catalog();
        let mut diagnostics = Vec::new();
        let sections = catalog.sections_for(
            "APSC 210",
            Term::Full,
            &ActivityType::LECTURE_EQUIVALENT,
            &mut diagnostics,
        );
        assert!(sections.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn has_activity_is_term_independent() {
        let catalog = catalog();
        assert!(catalog.has_activity("CPSC 121", ActivityType::Laboratory));
        assert!(!catalog.has_activity("CPSC 121", ActivityType::Tutorial));
        assert!(!catalog.has_activity("APSC 210", ActivityType::Lecture));
    }

    #[test]
    fn malformed_time_is_reported_not_fatal() {
        let catalog = catalog();
        let mut diagnostics = Vec::new();
        let sections = catalog.sections_for(
            "ASIA 100",
            Term::One,
            &ActivityType::LECTURE_EQUIVALENT,
            &mut diagnostics,
        );
        // The section still schedules, as a meeting-free placeholder.
        assert_eq!(sections.len(), 1);
        assert!(sections[0].sessions.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].section, "ASIA 100 101");
        assert!(diagnostics[0].detail.contains("start_time"));
    }

    #[test]
    fn course_names_cover_every_department() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.course_names().collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"CPSC 121"));
        assert!(names.contains(&"ASIA 100"));
        assert!(names.contains(&"APSC 210"));
    }
}
