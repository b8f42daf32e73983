pub use schoolhub_models::lectures::{
    CreateLectureDto, LECTURE_SELECT, Lecture, LectureFilterParams, LectureTeacher,
    UpdateLectureDto,
};
