/// Marks seeded rows so `clear-seed` can find them again.
pub const SEED_PREFIX: &str = "[seed]";

pub const CLASSES: [&str; 6] = ["7A", "7B", "8A", "8B", "9A", "9B"];

pub const SUBJECTS: [&str; 8] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "English",
    "History",
    "Geography",
    "Computer Science",
];

#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub lectures: usize,
    pub exams: usize,
    /// Restrict generated rows to one class; random otherwise.
    pub class: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            lectures: 20,
            exams: 5,
            class: None,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub lectures: usize,
    pub exams: usize,
}
