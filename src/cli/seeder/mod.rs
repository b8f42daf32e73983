//! Demo data for the lecture timetable and exam schedule.
//!
//! Rows are generated in parallel with Rayon, inserted in bulk through the
//! remote client, and tagged with [`SEED_PREFIX`] in their title so they can
//! be removed without touching real data.

pub mod models;

pub use models::{SEED_PREFIX, SeedConfig, SeedSummary};

use chrono::{Duration, NaiveDate, Utc};
use fake::Fake;
use fake::faker::lorem::en::{Sentence, Word};
use rayon::prelude::*;
use schoolhub_models::{CreateExamDto, CreateLectureDto};
use schoolhub_remote::{RemoteClient, RemoteError};
use serde_json::Value;
use std::time::Instant;

use models::{CLASSES, SUBJECTS};

const LECTURES_TABLE: &str = "lectures";
const EXAMS_TABLE: &str = "exams";
const BATCH_SIZE: usize = 500;

/// Uniform choice from a non-empty slice.
fn pick<T: Copy>(items: &[T]) -> T {
    items[(0..items.len()).fake::<usize>()]
}

fn seeded_title(subject: &str) -> String {
    let topic: String = Word().fake();
    format!("{} {}: {}", SEED_PREFIX, subject, topic)
}

pub fn generate_lectures(count: usize, class: Option<&str>) -> Vec<CreateLectureDto> {
    let now = Utc::now();

    (0..count)
        .into_par_iter()
        .map(|_| {
            let subject = pick(&SUBJECTS);
            let hours_ahead: i64 = (1..24 * 14).fake();

            CreateLectureDto {
                title: seeded_title(subject),
                subject: subject.to_string(),
                description: Some(Sentence(4..10).fake()),
                class: class.unwrap_or_else(|| pick(&CLASSES)).to_string(),
                teacher_id: None,
                scheduled_at: now + Duration::hours(hours_ahead),
                duration_minutes: Some(pick(&[40, 45, 60, 90])),
                room: Some(format!("Room {}", (100..320).fake::<u16>())),
            }
        })
        .collect()
}

pub fn generate_exams(count: usize, class: Option<&str>) -> Vec<CreateExamDto> {
    let today: NaiveDate = Utc::now().date_naive();

    (0..count)
        .into_par_iter()
        .map(|_| {
            let subject = pick(&SUBJECTS);
            let days_ahead: i64 = (7..60).fake();

            CreateExamDto {
                title: seeded_title(subject),
                subject: subject.to_string(),
                class: class.unwrap_or_else(|| pick(&CLASSES)).to_string(),
                exam_date: today + Duration::days(days_ahead),
                total_marks: pick(&[50, 100]),
                duration_minutes: Some((60..180).fake()),
            }
        })
        .collect()
}

async fn insert_in_batches<T: serde::Serialize>(
    remote: &RemoteClient,
    table: &str,
    rows: &[T],
) -> Result<usize, RemoteError> {
    let mut inserted = 0;
    for chunk in rows.chunks(BATCH_SIZE) {
        let stored: Vec<Value> = remote.from(table).insert_many(chunk).await?;
        inserted += stored.len();
    }
    Ok(inserted)
}

/// Generates and inserts demo lectures and exams.
pub async fn seed(remote: &RemoteClient, config: SeedConfig) -> Result<SeedSummary, RemoteError> {
    let start_time = Instant::now();
    let class = config.class.as_deref();
    println!(
        "Seeding {} lectures and {} exams...",
        config.lectures, config.exams
    );

    let lectures = generate_lectures(config.lectures, class);
    let exams = generate_exams(config.exams, class);

    let summary = SeedSummary {
        lectures: insert_in_batches(remote, LECTURES_TABLE, &lectures).await?,
        exams: insert_in_batches(remote, EXAMS_TABLE, &exams).await?,
    };

    println!(
        "   Inserted {} lectures and {} exams in {:?}",
        summary.lectures,
        summary.exams,
        start_time.elapsed()
    );
    Ok(summary)
}

/// Deletes every row the seeder created.
pub async fn clear_seeded_data(remote: &RemoteClient) -> Result<SeedSummary, RemoteError> {
    let pattern = format!("{}*", SEED_PREFIX);
    println!("Clearing seeded lectures and exams...");

    let summary = SeedSummary {
        lectures: remote
            .from(LECTURES_TABLE)
            .like("title", &pattern)
            .delete_many()
            .await?,
        exams: remote
            .from(EXAMS_TABLE)
            .like("title", &pattern)
            .delete_many()
            .await?,
    };

    println!(
        "   Removed {} lectures and {} exams",
        summary.lectures, summary.exams
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_generated_lectures_are_tagged_and_valid() {
        let lectures = generate_lectures(25, Some("9B"));

        assert_eq!(lectures.len(), 25);
        for lecture in &lectures {
            assert!(lecture.title.starts_with(SEED_PREFIX));
            assert_eq!(lecture.class, "9B");
            assert!(lecture.scheduled_at > Utc::now());
            assert!(lecture.validate().is_ok(), "{:?}", lecture);
        }
    }

    #[test]
    fn test_generated_exams_are_in_the_future() {
        let today = Utc::now().date_naive();
        let exams = generate_exams(10, None);

        assert_eq!(exams.len(), 10);
        for exam in &exams {
            assert!(exam.title.starts_with(SEED_PREFIX));
            assert!(exam.exam_date > today);
            assert!(CLASSES.contains(&exam.class.as_str()));
            assert!(exam.validate().is_ok(), "{:?}", exam);
        }
    }
}
