use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use classroll_core::Role;
use classroll_models::{
    Attendance, AuthResponse, CreateAttendanceRequest, CreateStudentFromUserRequest,
    CreateStudentRequest, Group, LoginRequest, RegisterRequest, ScheduleEntry, Student,
    StudentSummary, Subject, User,
};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::get_users,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::create_student_from_user,
        crate::modules::students::controller::get_student,
        crate::modules::groups::controller::get_groups,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::schedules::controller::get_all_schedules,
        crate::modules::schedules::controller::get_group_schedule,
        crate::modules::attendance::controller::record_attendance,
        crate::modules::attendance::controller::get_attendance_by_student,
        crate::modules::attendance::controller::get_attendance_by_subject,
        crate::modules::health::controller::health_check,
    ),
    components(
        schemas(
            User,
            Role,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            Student,
            StudentSummary,
            CreateStudentRequest,
            CreateStudentFromUserRequest,
            Group,
            Subject,
            ScheduleEntry,
            Attendance,
            CreateAttendanceRequest,
            ErrorResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User accounts"),
        (name = "Students", description = "Student records"),
        (name = "Groups", description = "Class groups"),
        (name = "Subjects", description = "Subjects"),
        (name = "Schedules", description = "Class timetable"),
        (name = "Attendance", description = "Attendance records"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Classroll API",
        version = "0.1.0",
        description = "School management API: students, groups, timetable and attendance, with JWT-based authentication.",
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
