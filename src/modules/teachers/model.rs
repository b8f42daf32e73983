pub use schoolhub_models::teachers::{CreateTeacherDto, Teacher, UpdateTeacherDto};
