//! Majors, assignments and extracurriculars.

pub mod view;
