//! The schedule assembler: expands requested courses into every
//! conflict-free timetable.
//!
//! For each course, lecture-equivalent sections are combined with optional
//! lab and tutorial picks into per-course bundles; each bundle then folds
//! atomically into the running cross-course schedule set, dropping any fold
//! that introduces a conflict. Courses are mandatory once listed and
//! existing: a course with zero feasible bundles empties the whole result.

use crate::catalog::{Catalog, Diagnostic};
use crate::schedule::model::{ActivityType, CourseSection, Schedule, Term, any_cross_conflict};
use tracing::debug;

/// Request-scoped selection criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOptions {
    pub term: Term,
    pub labs_and_tutorials: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            term: Term::Full,
            labs_and_tutorials: false,
        }
    }
}

/// The complete result of one generation request: every valid schedule plus
/// every recovered-from catalog problem encountered along the way.
#[derive(Debug, Default)]
pub struct Generation {
    pub schedules: Vec<Schedule>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The lecture(+lab)(+tutorial) choice for one course, folded as a unit.
type Bundle = Vec<CourseSection>;

pub struct Generator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Returns all non-conflicting schedules for the requested courses.
    ///
    /// Unknown courses are skipped silently. A request for `Term::Full` is
    /// not matched literally against the catalog: each course is folded once
    /// per real term over the same incoming schedule set, and the two
    /// resulting families coexist in the output.
    pub fn create(&self, courses: &[&str], options: SelectOptions) -> Generation {
        let mut diagnostics = Vec::new();
        let mut schedules: Vec<Schedule> = Vec::new();

        for &course in courses {
            if !self.catalog.course_exists(course) {
                debug!(course, "requested course not in catalog, skipping");
                continue;
            }

            if options.term == Term::Full {
                let (term1, added1) = self.add_course(
                    &schedules,
                    course,
                    Term::One,
                    options.labs_and_tutorials,
                    &mut diagnostics,
                );
                let (term2, added2) = self.add_course(
                    &schedules,
                    course,
                    Term::Two,
                    options.labs_and_tutorials,
                    &mut diagnostics,
                );
                if !added1 && !added2 {
                    return Generation {
                        schedules: Vec::new(),
                        diagnostics,
                    };
                }
                schedules = term1;
                schedules.extend(term2);
                continue;
            }

            let (folded, added) = self.add_course(
                &schedules,
                course,
                options.term,
                options.labs_and_tutorials,
                &mut diagnostics,
            );
            if !added {
                return Generation {
                    schedules: Vec::new(),
                    diagnostics,
                };
            }
            schedules = folded;
        }

        Generation {
            schedules,
            diagnostics,
        }
    }

    /// Folds one course into every existing schedule for one concrete term.
    /// The returned flag is false when the course contributed nothing, which
    /// callers escalate to a whole-request empty result.
    fn add_course(
        &self,
        schedules: &[Schedule],
        course: &str,
        term: Term,
        labs_and_tutorials: bool,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> (Vec<Schedule>, bool) {
        let lectures = self.catalog.sections_for(
            course,
            term,
            &ActivityType::LECTURE_EQUIVALENT,
            diagnostics,
        );
        let has_labs = self.catalog.has_activity(course, ActivityType::Laboratory);
        let has_tutorials = self.catalog.has_activity(course, ActivityType::Tutorial);

        let bundles: Vec<Bundle> = if !labs_and_tutorials || (!has_labs && !has_tutorials) {
            lectures.into_iter().map(|section| vec![section]).collect()
        } else {
            let mut bundles: Vec<Bundle> =
                lectures.into_iter().map(|section| vec![section]).collect();
            if has_labs {
                let labs =
                    self.catalog
                        .sections_for(course, term, &[ActivityType::Laboratory], diagnostics);
                bundles = combine(bundles, &labs);
            }
            if has_tutorials {
                let tutorials =
                    self.catalog
                        .sections_for(course, term, &[ActivityType::Tutorial], diagnostics);
                bundles = combine(bundles, &tutorials);
            }
            bundles
        };

        let folded = fold_bundles(schedules, &bundles);
        let added = !folded.is_empty();
        (folded, added)
    }
}

/// Intra-course cross product: extends every partial combination with every
/// candidate section that does not collide with it. An empty candidate list
/// passes the input through unchanged (a course can have labs on record but
/// none in the selected term).
fn combine(bundles: Vec<Bundle>, candidates: &[CourseSection]) -> Vec<Bundle> {
    if candidates.is_empty() {
        return bundles;
    }
    let mut combined = Vec::new();
    for bundle in &bundles {
        for candidate in candidates {
            if any_cross_conflict(bundle, std::slice::from_ref(candidate)) {
                continue;
            }
            let mut extended = bundle.clone();
            extended.push(candidate.clone());
            combined.push(extended);
        }
    }
    combined
}

/// Cross product of existing schedules with per-course bundles, keeping only
/// conflict-free extensions. An empty incoming set seeds one schedule per
/// bundle.
fn fold_bundles(schedules: &[Schedule], bundles: &[Bundle]) -> Vec<Schedule> {
    if schedules.is_empty() {
        return bundles
            .iter()
            .map(|bundle| Schedule {
                courses: bundle.clone(),
            })
            .collect();
    }

    let mut folded = Vec::new();
    for schedule in schedules {
        for bundle in bundles {
            if let Some(extended) = schedule.try_extend(bundle) {
                folded.push(extended);
            }
        }
    }
    folded
}
