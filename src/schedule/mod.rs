//! Schedule generation engine: the conflict model over class meetings and
//! the combinatorial expansion of course sections into valid timetables.

pub mod generator;
pub mod model;

pub use generator::{Generation, Generator, SelectOptions};
pub use model::{ActivityType, ClassSession, CourseSection, InvalidTerm, Schedule, Term};
