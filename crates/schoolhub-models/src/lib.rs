//! # SchoolHub Models
//!
//! Data structures shared by the server, the session client and the CLI:
//! remote rows, request DTOs and the push relay's wire types.
//!
//! # Modules
//!
//! - [`identity`]: signed-in user profile and [`Role`]
//! - [`session`]: [`AuthState`], the session store's snapshot
//! - [`navigation`]: top-level app [`Section`]s and navigation responses
//! - [`auth`]: login / registration DTOs
//! - [`lectures`], [`teachers`], [`exams`], [`notifications`]: resource rows and DTOs
//! - [`push`]: notification batches, gateway envelopes, tickets and delivery reports
//! - [`value_types`]: validated [`Email`] and [`PhoneNumber`] newtypes
//!
//! Remote rows use the platform's snake_case column names. The push relay
//! speaks camelCase, matching the function contract the mobile app calls.

pub mod auth;
pub mod exams;
pub mod identity;
pub mod lectures;
pub mod navigation;
pub mod notifications;
pub mod push;
pub mod session;
pub mod teachers;
pub mod value_types;

pub use auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use exams::{CreateExamDto, Exam, ExamFilterParams, UpdateExamDto};
pub use identity::{Identity, Role};
pub use lectures::{CreateLectureDto, Lecture, LectureFilterParams, LectureTeacher, UpdateLectureDto};
pub use navigation::{NavigationAction, NavigationQuery, NavigationResponse, Section};
pub use notifications::{CreateNotificationDto, NewNotification, NotificationRecord, TargetRole};
pub use push::{DeliveryReport, NotificationBatch, NotificationContent, PushMessage, PushTicket};
pub use session::AuthState;
pub use teachers::{CreateTeacherDto, Teacher, UpdateTeacherDto};
pub use value_types::{Email, PhoneNumber, ValueTypeError};
