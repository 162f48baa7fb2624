//! Conflict-free timetable generation for a university course catalog.
//!
//! Given a set of course codes and term/activity constraints, enumerate
//! every way to pick one section per required activity per course such that
//! no two chosen class meetings overlap. Served over a thin HTTP API along
//! with prefix autocomplete over course names.

pub mod app;
pub mod autocomplete;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod schedule;
pub mod state;
pub mod web;
