pub use schoolhub_models::exams::{CreateExamDto, Exam, ExamFilterParams, UpdateExamDto};
