use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::push::controller::RelayFailure;
use schoolhub_models::{
    CreateExamDto, CreateLectureDto, CreateNotificationDto, CreateTeacherDto, DeliveryReport,
    Email, Exam, Identity, Lecture, LectureTeacher, LoginRequest, LoginResponse, MessageResponse,
    NavigationAction, NavigationResponse, NotificationBatch, NotificationContent,
    NotificationRecord, PhoneNumber, PushTicket, RegisterRequest, Role, Section, TargetRole,
    Teacher, UpdateExamDto, UpdateLectureDto, UpdateTeacherDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::auth::controller::get_me,
        crate::modules::auth::controller::register_user,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::lectures::controller::get_lectures,
        crate::modules::lectures::controller::get_lecture_by_id,
        crate::modules::lectures::controller::create_lecture,
        crate::modules::lectures::controller::update_lecture,
        crate::modules::lectures::controller::delete_lecture,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher_by_id,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::exams::controller::get_exams,
        crate::modules::exams::controller::get_exam_by_id,
        crate::modules::exams::controller::create_exam,
        crate::modules::exams::controller::update_exam,
        crate::modules::exams::controller::delete_exam,
        crate::modules::notifications::controller::get_notifications,
        crate::modules::notifications::controller::create_notification,
        crate::modules::notifications::controller::delete_notification,
        crate::modules::push::controller::send_push_notification,
    ),
    components(
        schemas(
            Identity,
            Role,
            Email,
            PhoneNumber,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            MessageResponse,
            ErrorResponse,
            Section,
            NavigationAction,
            NavigationResponse,
            Lecture,
            LectureTeacher,
            CreateLectureDto,
            UpdateLectureDto,
            Teacher,
            CreateTeacherDto,
            UpdateTeacherDto,
            Exam,
            CreateExamDto,
            UpdateExamDto,
            TargetRole,
            NotificationRecord,
            CreateNotificationDto,
            NotificationBatch,
            NotificationContent,
            PushTicket,
            DeliveryReport,
            RelayFailure,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Sign-in, sign-out and account creation"),
        (name = "Navigation", description = "Role-based section routing"),
        (name = "Lectures", description = "Lecture timetable"),
        (name = "Teachers", description = "Teaching staff directory"),
        (name = "Exams", description = "Exam schedule"),
        (name = "Notifications", description = "In-app notification feed"),
        (name = "Functions", description = "Push notification relay")
    ),
    info(
        title = "SchoolHub API",
        version = "0.1.0",
        description = "Role-based school app backend: sessions, navigation, school records and push relay.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
