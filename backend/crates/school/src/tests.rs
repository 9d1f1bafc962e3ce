//! Router-level tests for the school crate
//!
//! The auth and school routers are merged over one in-memory store, the
//! same way the API binary wires them.

#[cfg(test)]
mod support {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use auth::domain::value_object::{email::Email, user_name::UserName};
    use auth::middleware::AuthMiddlewareState;
    use auth::{AuthConfig, AuthResult, Student, StudentRepository, Teacher, TeacherRepository};
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use kernel::id::{
        AppointmentId, DepartmentId, FeedbackId, NotificationId, StudentId, SubjectId, TeacherId,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::domain::entity::{
        Appointment, Department, Feedback, Notification, StudentSummary, Subject, TeacherSummary,
    };
    use crate::domain::repository::{
        AppointmentRepository, DepartmentRepository, FeedbackRepository, NotificationRepository,
        ParticipantRepository, SubjectRepository,
    };
    use crate::domain::value_object::AppointmentStatus;
    use crate::error::SchoolResult;
    use crate::presentation::router::school_router_generic;

    #[derive(Clone, Default)]
    pub struct MemorySchoolRepository {
        pub students: Arc<Mutex<HashMap<StudentId, Student>>>,
        pub teachers: Arc<Mutex<HashMap<TeacherId, Teacher>>>,
        pub appointments: Arc<Mutex<HashMap<AppointmentId, Appointment>>>,
        pub departments: Arc<Mutex<HashMap<DepartmentId, Department>>>,
        pub subjects: Arc<Mutex<HashMap<SubjectId, Subject>>>,
        pub feedback: Arc<Mutex<HashMap<FeedbackId, Feedback>>>,
        pub notifications: Arc<Mutex<HashMap<NotificationId, Notification>>>,
    }

    impl MemorySchoolRepository {
        pub fn messages_for(&self, user_id: &str) -> Vec<String> {
            let user_id = Uuid::parse_str(user_id).unwrap();
            self.notifications
                .lock()
                .unwrap()
                .values()
                .filter(|n| n.user_id == user_id)
                .map(|n| n.message.clone())
                .collect()
        }
    }

    fn newest_first<T>(mut items: Vec<T>, key: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) -> Vec<T> {
        items.sort_by_key(|item| std::cmp::Reverse(key(item)));
        items
    }

    // ------------------------------------------------------------------------
    // Principals
    // ------------------------------------------------------------------------

    impl StudentRepository for MemorySchoolRepository {
        async fn create_student(&self, student: &Student) -> AuthResult<()> {
            self.students
                .lock()
                .unwrap()
                .insert(student.student_id, student.clone());
            Ok(())
        }

        async fn find_student_by_id(&self, student_id: &StudentId) -> AuthResult<Option<Student>> {
            Ok(self.students.lock().unwrap().get(student_id).cloned())
        }

        async fn find_student_by_email(&self, email: &Email) -> AuthResult<Option<Student>> {
            Ok(self
                .students
                .lock()
                .unwrap()
                .values()
                .find(|s| &s.email == email)
                .cloned())
        }

        async fn update_student(&self, student: &Student) -> AuthResult<()> {
            self.students
                .lock()
                .unwrap()
                .insert(student.student_id, student.clone());
            Ok(())
        }

        async fn delete_student(&self, student_id: &StudentId) -> AuthResult<bool> {
            Ok(self.students.lock().unwrap().remove(student_id).is_some())
        }
    }

    impl TeacherRepository for MemorySchoolRepository {
        async fn create_teacher(&self, teacher: &Teacher) -> AuthResult<()> {
            self.teachers
                .lock()
                .unwrap()
                .insert(teacher.teacher_id, teacher.clone());
            Ok(())
        }

        async fn find_teacher_by_id(&self, teacher_id: &TeacherId) -> AuthResult<Option<Teacher>> {
            Ok(self.teachers.lock().unwrap().get(teacher_id).cloned())
        }

        async fn find_teacher_by_email(&self, email: &Email) -> AuthResult<Option<Teacher>> {
            Ok(self
                .teachers
                .lock()
                .unwrap()
                .values()
                .find(|t| &t.email == email)
                .cloned())
        }

        async fn teacher_identity_exists(
            &self,
            user_name: &UserName,
            email: &Email,
            phone: &str,
        ) -> AuthResult<bool> {
            Ok(self
                .teachers
                .lock()
                .unwrap()
                .values()
                .any(|t| &t.user_name == user_name || &t.email == email || t.phone == phone))
        }

        async fn update_teacher(&self, teacher: &Teacher) -> AuthResult<()> {
            self.teachers
                .lock()
                .unwrap()
                .insert(teacher.teacher_id, teacher.clone());
            Ok(())
        }

        async fn delete_teacher(&self, teacher_id: &TeacherId) -> AuthResult<bool> {
            Ok(self.teachers.lock().unwrap().remove(teacher_id).is_some())
        }
    }

    impl ParticipantRepository for MemorySchoolRepository {
        async fn find_student_summary(
            &self,
            student_id: &StudentId,
        ) -> SchoolResult<Option<StudentSummary>> {
            Ok(self
                .students
                .lock()
                .unwrap()
                .get(student_id)
                .map(|s| StudentSummary {
                    student_id: s.student_id,
                    name: s.name.clone(),
                    email: s.email.as_str().to_string(),
                }))
        }

        async fn find_teacher_summary(
            &self,
            teacher_id: &TeacherId,
        ) -> SchoolResult<Option<TeacherSummary>> {
            Ok(self
                .teachers
                .lock()
                .unwrap()
                .get(teacher_id)
                .map(|t| TeacherSummary {
                    teacher_id: t.teacher_id,
                    name: t.name.clone(),
                    email: t.email.as_str().to_string(),
                }))
        }
    }

    // ------------------------------------------------------------------------
    // School records
    // ------------------------------------------------------------------------

    impl AppointmentRepository for MemorySchoolRepository {
        async fn create_appointment(&self, appointment: &Appointment) -> SchoolResult<()> {
            self.appointments
                .lock()
                .unwrap()
                .insert(appointment.appointment_id, appointment.clone());
            Ok(())
        }

        async fn find_appointment(
            &self,
            appointment_id: &AppointmentId,
        ) -> SchoolResult<Option<Appointment>> {
            Ok(self.appointments.lock().unwrap().get(appointment_id).cloned())
        }

        async fn update_appointment_status(
            &self,
            appointment: &Appointment,
            expected: Option<AppointmentStatus>,
        ) -> SchoolResult<bool> {
            let mut appointments = self.appointments.lock().unwrap();
            let Some(stored) = appointments.get_mut(&appointment.appointment_id) else {
                return Ok(false);
            };
            if expected.is_some_and(|status| stored.status != status) {
                return Ok(false);
            }
            stored.status = appointment.status;
            stored.updated_at = appointment.updated_at;
            Ok(true)
        }

        async fn list_appointments(&self) -> SchoolResult<Vec<Appointment>> {
            let all = self.appointments.lock().unwrap().values().cloned().collect();
            Ok(newest_first(all, |a: &Appointment| a.created_at))
        }

        async fn list_appointments_by_student(
            &self,
            student_id: &StudentId,
        ) -> SchoolResult<Vec<Appointment>> {
            let mine = self
                .appointments
                .lock()
                .unwrap()
                .values()
                .filter(|a| &a.student_id == student_id)
                .cloned()
                .collect();
            Ok(newest_first(mine, |a: &Appointment| a.created_at))
        }

        async fn list_appointments_by_teacher(
            &self,
            teacher_id: &TeacherId,
        ) -> SchoolResult<Vec<Appointment>> {
            let mine = self
                .appointments
                .lock()
                .unwrap()
                .values()
                .filter(|a| &a.teacher_id == teacher_id)
                .cloned()
                .collect();
            Ok(newest_first(mine, |a: &Appointment| a.created_at))
        }
    }

    impl DepartmentRepository for MemorySchoolRepository {
        async fn create_department(&self, department: &Department) -> SchoolResult<()> {
            self.departments
                .lock()
                .unwrap()
                .insert(department.department_id, department.clone());
            Ok(())
        }

        async fn find_department(
            &self,
            department_id: &DepartmentId,
        ) -> SchoolResult<Option<Department>> {
            Ok(self.departments.lock().unwrap().get(department_id).cloned())
        }

        async fn list_departments(&self) -> SchoolResult<Vec<Department>> {
            let mut all: Vec<_> = self.departments.lock().unwrap().values().cloned().collect();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(all)
        }

        async fn update_department(&self, department: &Department) -> SchoolResult<()> {
            self.departments
                .lock()
                .unwrap()
                .insert(department.department_id, department.clone());
            Ok(())
        }

        async fn delete_department(&self, department_id: &DepartmentId) -> SchoolResult<bool> {
            let removed = self.departments.lock().unwrap().remove(department_id).is_some();
            if removed {
                self.subjects
                    .lock()
                    .unwrap()
                    .retain(|_, s| &s.department_id != department_id);
            }
            Ok(removed)
        }
    }

    impl SubjectRepository for MemorySchoolRepository {
        async fn create_subject(&self, subject: &Subject) -> SchoolResult<()> {
            self.subjects
                .lock()
                .unwrap()
                .insert(subject.subject_id, subject.clone());
            Ok(())
        }

        async fn find_subject(&self, subject_id: &SubjectId) -> SchoolResult<Option<Subject>> {
            Ok(self.subjects.lock().unwrap().get(subject_id).cloned())
        }

        async fn list_subjects(&self) -> SchoolResult<Vec<Subject>> {
            let mut all: Vec<_> = self.subjects.lock().unwrap().values().cloned().collect();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(all)
        }

        async fn update_subject(&self, subject: &Subject) -> SchoolResult<()> {
            self.subjects
                .lock()
                .unwrap()
                .insert(subject.subject_id, subject.clone());
            Ok(())
        }

        async fn delete_subject(&self, subject_id: &SubjectId) -> SchoolResult<bool> {
            Ok(self.subjects.lock().unwrap().remove(subject_id).is_some())
        }
    }

    impl FeedbackRepository for MemorySchoolRepository {
        async fn create_feedback(&self, feedback: &Feedback) -> SchoolResult<()> {
            self.feedback
                .lock()
                .unwrap()
                .insert(feedback.feedback_id, feedback.clone());
            Ok(())
        }

        async fn find_feedback(&self, feedback_id: &FeedbackId) -> SchoolResult<Option<Feedback>> {
            Ok(self.feedback.lock().unwrap().get(feedback_id).cloned())
        }

        async fn list_feedback(&self) -> SchoolResult<Vec<Feedback>> {
            let all = self.feedback.lock().unwrap().values().cloned().collect();
            Ok(newest_first(all, |f: &Feedback| f.created_at))
        }

        async fn update_feedback(&self, feedback: &Feedback) -> SchoolResult<()> {
            self.feedback
                .lock()
                .unwrap()
                .insert(feedback.feedback_id, feedback.clone());
            Ok(())
        }

        async fn delete_feedback(&self, feedback_id: &FeedbackId) -> SchoolResult<bool> {
            Ok(self.feedback.lock().unwrap().remove(feedback_id).is_some())
        }
    }

    impl NotificationRepository for MemorySchoolRepository {
        async fn create_notification(&self, notification: &Notification) -> SchoolResult<()> {
            self.notifications
                .lock()
                .unwrap()
                .insert(notification.notification_id, notification.clone());
            Ok(())
        }

        async fn list_notifications(&self) -> SchoolResult<Vec<Notification>> {
            let all = self.notifications.lock().unwrap().values().cloned().collect();
            Ok(newest_first(all, |n: &Notification| n.created_at))
        }

        async fn list_notifications_by_user(
            &self,
            user_id: Uuid,
        ) -> SchoolResult<Vec<Notification>> {
            let mine = self
                .notifications
                .lock()
                .unwrap()
                .values()
                .filter(|n| n.user_id == user_id)
                .cloned()
                .collect();
            Ok(newest_first(mine, |n: &Notification| n.created_at))
        }

        async fn mark_notification_read(
            &self,
            notification_id: &NotificationId,
        ) -> SchoolResult<Option<Notification>> {
            let mut notifications = self.notifications.lock().unwrap();
            Ok(notifications.get_mut(notification_id).map(|n| {
                n.mark_read();
                n.clone()
            }))
        }

        async fn delete_notification(
            &self,
            notification_id: &NotificationId,
        ) -> SchoolResult<bool> {
            Ok(self
                .notifications
                .lock()
                .unwrap()
                .remove(notification_id)
                .is_some())
        }
    }

    // ------------------------------------------------------------------------
    // HTTP helpers
    // ------------------------------------------------------------------------

    pub fn app() -> (Router, MemorySchoolRepository) {
        let repo = MemorySchoolRepository::default();
        let shared = Arc::new(repo.clone());
        let config = Arc::new(AuthConfig::development());

        let router = auth::auth_router_generic(shared.clone(), config.clone())
            .merge(school_router_generic(
                shared.clone(),
                AuthMiddlewareState::new(shared, config),
            ))
            .fallback(kernel::response::route_not_found);
        (router, repo)
    }

    /// Send a request and return the status and decoded envelope
    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub const PASSWORD: &str = "Chalk&Board42";

    /// Register a student and return its id and token
    pub async fn student(app: &Router, name: &str, email: &str) -> (String, String) {
        let (status, body) = send(
            app,
            "POST",
            "/student/register",
            None,
            Some(json!({
                "fullName": name,
                "email": email,
                "password": PASSWORD,
                "grade": "11",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        (
            body["data"]["user"]["id"].as_str().unwrap().to_string(),
            body["data"]["token"].as_str().unwrap().to_string(),
        )
    }

    /// Register and sign in a teacher, returning its id and token
    pub async fn teacher(app: &Router, user_name: &str, phone: &str) -> (String, String) {
        let email = format!("{user_name}@school.test");
        let (status, body) = send(
            app,
            "POST",
            "/teacher/register",
            None,
            Some(json!({
                "name": "John Keating",
                "username": user_name,
                "department": "English",
                "subject": "Poetry",
                "email": email,
                "password": PASSWORD,
                "phone": phone,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");

        let (status, body) = send(
            app,
            "POST",
            "/teacher/login",
            None,
            Some(json!({ "email": email, "password": PASSWORD })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        (
            body["data"]["user"]["id"].as_str().unwrap().to_string(),
            body["data"]["token"].as_str().unwrap().to_string(),
        )
    }

    /// A student promoted to admin directly in the store
    pub async fn admin(app: &Router, repo: &MemorySchoolRepository) -> String {
        let (id, token) = student(app, "Grace Hopper", "principal@school.test").await;
        let id = StudentId::parse(&id, "student").unwrap();
        repo.students
            .lock()
            .unwrap()
            .get_mut(&id)
            .unwrap()
            .promote_to_admin();
        token
    }

    /// Book an appointment and return its id
    pub async fn book(app: &Router, student_token: &str, teacher_id: &str) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/student/book-appointment",
            Some(student_token),
            Some(json!({
                "teacherId": teacher_id,
                "date": "2025-03-14",
                "time": "10:30 AM",
                "purpose": "Discuss essay draft",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_str().unwrap().to_string()
    }
}

#[cfg(test)]
mod booking_tests {
    use super::support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_book_appointment_starts_pending() {
        let (app, repo) = app();
        let (teacher_id, _) = teacher(&app, "keating", "555-0100").await;
        let (student_id, token) = student(&app, "Ada Lovelace", "ada@school.test").await;

        let (status, body) = send(
            &app,
            "POST",
            "/student/book-appointment",
            Some(&token),
            Some(json!({
                "teacher": teacher_id,
                "date": "2025-03-14",
                "time": "10:30 AM",
                "subject": "Discuss essay draft",
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["message"], "Appointment booked successfully");
        let data = &body["data"];
        assert_eq!(data["status"], "pending");
        assert_eq!(data["student"], student_id.as_str());
        assert_eq!(data["teacher"], teacher_id.as_str());
        assert_eq!(data["date"], "2025-03-14");
        assert_eq!(data["time"], "10:30 AM");
        assert_eq!(data["purpose"], "Discuss essay draft");

        let messages = repo.messages_for(&teacher_id);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Ada Lovelace"), "{messages:?}");
    }

    #[tokio::test]
    async fn test_book_unknown_teacher() {
        let (app, _) = app();
        let (_, token) = student(&app, "Ada Lovelace", "ada@school.test").await;

        let (status, body) = send(
            &app,
            "POST",
            "/student/book-appointment",
            Some(&token),
            Some(json!({
                "teacherId": uuid::Uuid::new_v4().to_string(),
                "date": "2025-03-14",
                "time": "10:30 AM",
                "purpose": "Office hours",
            })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Teacher not found");
    }

    #[tokio::test]
    async fn test_book_rejects_incomplete_or_malformed_input() {
        let (app, _) = app();
        let (teacher_id, _) = teacher(&app, "keating", "555-0100").await;
        let (_, token) = student(&app, "Ada Lovelace", "ada@school.test").await;

        let (status, body) = send(
            &app,
            "POST",
            "/student/book-appointment",
            Some(&token),
            Some(json!({ "teacherId": teacher_id, "date": "2025-03-14" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "All fields are required");

        let (status, body) = send(
            &app,
            "POST",
            "/student/book-appointment",
            Some(&token),
            Some(json!({
                "teacherId": teacher_id,
                "date": "14/03/2025",
                "time": "10:30 AM",
                "purpose": "Office hours",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Date must be formatted as YYYY-MM-DD");

        let (status, body) = send(
            &app,
            "POST",
            "/student/book-appointment",
            Some(&token),
            Some(json!({
                "teacherId": teacher_id,
                "date": "2025-03-14T09:30:00Z",
                "time": "10:30 AM",
                "purpose": "Office hours",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Date must be formatted as YYYY-MM-DD");
    }

    #[tokio::test]
    async fn test_book_requires_student_session() {
        let (app, _) = app();
        let (teacher_id, teacher_token) = teacher(&app, "keating", "555-0100").await;
        let request = json!({
            "teacherId": teacher_id,
            "date": "2025-03-14",
            "time": "10:30 AM",
            "purpose": "Office hours",
        });

        let (status, body) = send(
            &app,
            "POST",
            "/student/book-appointment",
            None,
            Some(request.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Not authorized, no token");

        let (status, body) = send(
            &app,
            "POST",
            "/student/book-appointment",
            Some(&teacher_token),
            Some(request),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Not authorized as a student");
    }

    #[tokio::test]
    async fn test_schedule_appointment_notifies_student() {
        let (app, repo) = app();
        let (teacher_id, teacher_token) = teacher(&app, "keating", "555-0100").await;
        let (student_id, student_token) = student(&app, "Ada Lovelace", "ada@school.test").await;

        let (status, body) = send(
            &app,
            "POST",
            "/teacher/schedule-appointment",
            Some(&teacher_token),
            Some(json!({
                "studentId": student_id,
                "date": "2025-04-01",
                "time": "09:00",
                "purpose": "Progress review",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["message"], "Appointment scheduled successfully");
        assert_eq!(body["data"]["teacher"], teacher_id.as_str());
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(repo.messages_for(&student_id).len(), 1);

        let (status, _) = send(
            &app,
            "POST",
            "/teacher/schedule-appointment",
            Some(&student_token),
            Some(json!({
                "studentId": student_id,
                "date": "2025-04-01",
                "time": "09:00",
                "purpose": "Progress review",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            "POST",
            "/teacher/schedule-appointment",
            Some(&teacher_token),
            Some(json!({
                "studentId": uuid::Uuid::new_v4().to_string(),
                "date": "2025-04-01",
                "time": "09:00",
                "purpose": "Progress review",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Student not found");
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_only_own_teacher_may_approve() {
        let (app, repo) = app();
        let (teacher_id, teacher_token) = teacher(&app, "keating", "555-0100").await;
        let (_, other_token) = teacher(&app, "sprout", "555-0101").await;
        let (student_id, student_token) = student(&app, "Ada Lovelace", "ada@school.test").await;
        let appointment_id = book(&app, &student_token, &teacher_id).await;
        let uri = format!("/teacher/appointments/approve/{appointment_id}");

        let (status, body) = send(&app, "PUT", &uri, Some(&other_token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            body["message"],
            "You are not authorized to approve this appointment"
        );

        let (status, body) = send(&app, "PUT", &uri, Some(&student_token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Not authorized as a teacher");

        let (status, body) = send(&app, "PUT", &uri, Some(&teacher_token), None).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["message"], "Appointment approved successfully");
        assert_eq!(body["data"]["status"], "approved");

        let messages = repo.messages_for(&student_id);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].ends_with("was approved"), "{messages:?}");
    }

    #[tokio::test]
    async fn test_final_states_reject_further_changes() {
        let (app, _) = app();
        let (teacher_id, teacher_token) = teacher(&app, "keating", "555-0100").await;
        let (_, student_token) = student(&app, "Ada Lovelace", "ada@school.test").await;
        let appointment_id = book(&app, &student_token, &teacher_id).await;

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/teacher/appointments/reject/{appointment_id}"),
            Some(&teacher_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "rejected");

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/teacher/appointments/approve/{appointment_id}"),
            Some(&teacher_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body["message"],
            "Cannot approve an appointment that is rejected"
        );
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_complete_follows_approval() {
        let (app, _) = app();
        let (teacher_id, teacher_token) = teacher(&app, "keating", "555-0100").await;
        let (_, student_token) = student(&app, "Ada Lovelace", "ada@school.test").await;
        let appointment_id = book(&app, &student_token, &teacher_id).await;
        let complete = format!("/teacher/appointments/complete/{appointment_id}");

        let (status, body) = send(&app, "PUT", &complete, Some(&teacher_token), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body["message"],
            "Cannot complete an appointment that is pending"
        );

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/teacher/appointments/approve/{appointment_id}"),
            Some(&teacher_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "PUT", &complete, Some(&teacher_token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Appointment completed successfully");
        assert_eq!(body["data"]["status"], "completed");
    }

    #[tokio::test]
    async fn test_cancel_pending_appointment() {
        let (app, _) = app();
        let (teacher_id, teacher_token) = teacher(&app, "keating", "555-0100").await;
        let (_, student_token) = student(&app, "Ada Lovelace", "ada@school.test").await;
        let appointment_id = book(&app, &student_token, &teacher_id).await;

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/teacher/appointments/cancel/{appointment_id}"),
            Some(&teacher_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Appointment canceled successfully");
        assert_eq!(body["data"]["status"], "canceled");
    }

    #[tokio::test]
    async fn test_status_change_on_unknown_or_malformed_id() {
        let (app, _) = app();
        let (_, teacher_token) = teacher(&app, "keating", "555-0100").await;

        let (status, body) = send(
            &app,
            "PUT",
            "/teacher/appointments/approve/not-a-uuid",
            Some(&teacher_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid appointment id");

        let (status, body) = send(
            &app,
            "PUT",
            &format!(
                "/teacher/appointments/approve/{}",
                uuid::Uuid::new_v4()
            ),
            Some(&teacher_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Appointment not found");
    }
}

#[cfg(test)]
mod concurrent_status_tests {
    use std::sync::Arc;

    use auth::Principal;
    use kernel::id::AppointmentId;
    use uuid::Uuid;

    use super::support::*;
    use crate::application::ChangeAppointmentStatusUseCase;
    use crate::domain::entity::{Appointment, Notification};
    use crate::domain::repository::{AppointmentRepository, NotificationRepository};
    use crate::domain::value_object::{AppointmentAction, AppointmentStatus};
    use crate::error::{SchoolError, SchoolResult};

    /// Gives up the task right after every appointment read, so two
    /// requests can both observe the same status before either writes.
    struct InterleavedReads(MemorySchoolRepository);

    impl AppointmentRepository for InterleavedReads {
        async fn create_appointment(&self, appointment: &Appointment) -> SchoolResult<()> {
            self.0.create_appointment(appointment).await
        }

        async fn find_appointment(
            &self,
            appointment_id: &AppointmentId,
        ) -> SchoolResult<Option<Appointment>> {
            let found = self.0.find_appointment(appointment_id).await;
            tokio::task::yield_now().await;
            found
        }

        async fn update_appointment_status(
            &self,
            appointment: &Appointment,
            expected: Option<AppointmentStatus>,
        ) -> SchoolResult<bool> {
            self.0.update_appointment_status(appointment, expected).await
        }

        async fn list_appointments(&self) -> SchoolResult<Vec<Appointment>> {
            self.0.list_appointments().await
        }

        async fn list_appointments_by_student(
            &self,
            student_id: &kernel::id::StudentId,
        ) -> SchoolResult<Vec<Appointment>> {
            self.0.list_appointments_by_student(student_id).await
        }

        async fn list_appointments_by_teacher(
            &self,
            teacher_id: &kernel::id::TeacherId,
        ) -> SchoolResult<Vec<Appointment>> {
            self.0.list_appointments_by_teacher(teacher_id).await
        }
    }

    impl NotificationRepository for InterleavedReads {
        async fn create_notification(&self, notification: &Notification) -> SchoolResult<()> {
            self.0.create_notification(notification).await
        }

        async fn list_notifications(&self) -> SchoolResult<Vec<Notification>> {
            self.0.list_notifications().await
        }

        async fn list_notifications_by_user(&self, user_id: Uuid) -> SchoolResult<Vec<Notification>> {
            self.0.list_notifications_by_user(user_id).await
        }

        async fn mark_notification_read(
            &self,
            notification_id: &kernel::id::NotificationId,
        ) -> SchoolResult<Option<Notification>> {
            self.0.mark_notification_read(notification_id).await
        }

        async fn delete_notification(
            &self,
            notification_id: &kernel::id::NotificationId,
        ) -> SchoolResult<bool> {
            self.0.delete_notification(notification_id).await
        }
    }

    #[tokio::test]
    async fn test_racing_status_changes_do_not_overwrite_each_other() {
        let (app, repo) = app();
        let (teacher_id, _) = teacher(&app, "keating", "555-0100").await;
        let (student_id, student_token) = student(&app, "Ada Lovelace", "ada@school.test").await;
        let appointment_id = book(&app, &student_token, &teacher_id).await;
        let appointment_id = AppointmentId::from_uuid(Uuid::parse_str(&appointment_id).unwrap());

        let keating = repo.teachers.lock().unwrap().values().next().cloned().unwrap();
        let principal = Principal::Teacher(keating);
        let use_case =
            ChangeAppointmentStatusUseCase::new(Arc::new(InterleavedReads(repo.clone())));

        let (approved, canceled) = tokio::join!(
            use_case.execute(&principal, appointment_id, AppointmentAction::Approve),
            use_case.execute(&principal, appointment_id, AppointmentAction::Cancel),
        );

        let (winner, loser) = match (approved, canceled) {
            (Ok(winner), Err(loser)) | (Err(loser), Ok(winner)) => (winner, loser),
            (first, second) => panic!("expected exactly one winner: {first:?} / {second:?}"),
        };
        assert!(
            matches!(
                loser,
                SchoolError::InvalidTransition { status, .. } if status == winner.status
            ),
            "{loser:?}"
        );

        let stored = repo.appointments.lock().unwrap()[&appointment_id].clone();
        assert_eq!(stored.status, winner.status);
        assert_eq!(repo.messages_for(&student_id).len(), 1);
    }
}

#[cfg(test)]
mod listing_tests {
    use super::support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_listings_are_scoped_to_the_caller() {
        let (app, _) = app();
        let (teacher_id, teacher_token) = teacher(&app, "keating", "555-0100").await;
        let (other_teacher_id, other_token) = teacher(&app, "sprout", "555-0101").await;
        let (_, ada) = student(&app, "Ada Lovelace", "ada@school.test").await;
        let (_, alan) = student(&app, "Alan Turing", "alan@school.test").await;

        book(&app, &ada, &teacher_id).await;
        book(&app, &alan, &teacher_id).await;
        book(&app, &alan, &other_teacher_id).await;

        let (status, body) = send(&app, "GET", "/student/appointments", Some(&ada), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Appointments fetched successfully");
        let mine = body["data"].as_array().unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0]["teacherInfo"]["name"], "John Keating");
        assert_eq!(mine[0]["teacherInfo"]["email"], "keating@school.test");

        let (_, body) = send(&app, "GET", "/student/appointments", Some(&alan), None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let (status, body) = send(
            &app,
            "GET",
            "/teacher/appointments",
            Some(&teacher_token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let mine = body["data"].as_array().unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|a| a["teacher"] == teacher_id.as_str()));
        assert!(mine.iter().all(|a| a["studentInfo"]["name"].is_string()));

        let (_, body) = send(&app, "GET", "/teacher/appointments", Some(&other_token), None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_teacher_listing_requires_teacher() {
        let (app, _) = app();
        let (_, token) = student(&app, "Ada Lovelace", "ada@school.test").await;

        let (status, body) = send(&app, "GET", "/teacher/appointments", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Not authorized as a teacher");
    }

    #[tokio::test]
    async fn test_admin_lists_every_appointment() {
        let (app, repo) = app();
        let (teacher_id, _) = teacher(&app, "keating", "555-0100").await;
        let (_, ada) = student(&app, "Ada Lovelace", "ada@school.test").await;
        book(&app, &ada, &teacher_id).await;
        book(&app, &ada, &teacher_id).await;

        let (status, body) = send(&app, "GET", "/appointment/appointments", Some(&ada), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Not authorized as an admin");

        let token = admin(&app, &repo).await;
        let (status, body) =
            send(&app, "GET", "/appointment/appointments", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "All appointments retrieved successfully");
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_appointment_requires_a_party_or_admin() {
        let (app, repo) = app();
        let (teacher_id, _) = teacher(&app, "keating", "555-0100").await;
        let (ada_id, ada) = student(&app, "Ada Lovelace", "ada@school.test").await;
        let (_, alan) = student(&app, "Alan Turing", "alan@school.test").await;
        let request = json!({
            "student": ada_id,
            "teacher": teacher_id,
            "purpose": "Parent evening",
            "date": "2025-05-20",
            "time": "18:00",
        });

        let (status, _) = send(
            &app,
            "POST",
            "/appointment/appointments",
            Some(&alan),
            Some(request.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(
            &app,
            "POST",
            "/appointment/appointments",
            Some(&ada),
            Some(request.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["message"], "Appointment created successfully");

        let token = admin(&app, &repo).await;
        let (status, _) = send(
            &app,
            "POST",
            "/appointment/appointments",
            Some(&token),
            Some(request),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_admin_override_sets_any_status() {
        let (app, repo) = app();
        let (teacher_id, _) = teacher(&app, "keating", "555-0100").await;
        let (student_id, ada) = student(&app, "Ada Lovelace", "ada@school.test").await;
        let appointment_id = book(&app, &ada, &teacher_id).await;
        let token = admin(&app, &repo).await;
        let uri = format!("/appointment/appointments/{appointment_id}");

        let (status, body) = send(
            &app,
            "PATCH",
            &uri,
            Some(&token),
            Some(json!({ "status": "Completed" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["message"], "Appointment updated successfully");
        assert_eq!(body["data"]["status"], "completed");
        assert_eq!(repo.messages_for(&student_id).len(), 1);

        let (status, body) = send(
            &app,
            "PATCH",
            &uri,
            Some(&token),
            Some(json!({ "status": "postponed" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid appointment status: postponed");

        let (status, body) = send(&app, "PATCH", &uri, Some(&token), Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Status is required");

        let (status, _) = send(
            &app,
            "PATCH",
            &uri,
            Some(&ada),
            Some(json!({ "status": "approved" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

#[cfg(test)]
mod catalog_tests {
    use super::support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_department_crud() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            "POST",
            "/department/departments",
            None,
            Some(json!({ "name": "Science", "description": "Labs and lectures" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Department created successfully");
        let id = body["data"]["id"].as_str().unwrap().to_string();
        let uri = format!("/department/departments/{id}");

        let (status, body) = send(
            &app,
            "PUT",
            &uri,
            None,
            Some(json!({ "name": "Natural Sciences" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Natural Sciences");
        assert_eq!(body["data"]["description"], "Labs and lectures");

        let (status, body) = send(&app, "GET", "/department/departments", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "All departments fetched successfully");
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (status, body) = send(&app, "DELETE", &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Department deleted successfully");
        assert!(body["data"].is_null());

        let (status, body) = send(&app, "GET", &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Department not found");
    }

    #[tokio::test]
    async fn test_department_validation() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            "POST",
            "/department/departments",
            None,
            Some(json!({ "description": "No name" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Department name is required");

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/department/departments/{}", uuid::Uuid::new_v4()),
            None,
            Some(json!({ "name": "Arts" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Department not found");
    }

    #[tokio::test]
    async fn test_subject_belongs_to_existing_department() {
        let (app, _) = app();
        let (_, body) = send(
            &app,
            "POST",
            "/department/departments",
            None,
            Some(json!({ "name": "Mathematics" })),
        )
        .await;
        let department_id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "POST",
            "/subject/subjects",
            None,
            Some(json!({ "name": "Algebra", "department": uuid::Uuid::new_v4().to_string() })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Department not found");

        let (status, body) = send(
            &app,
            "POST",
            "/subject/subjects",
            None,
            Some(json!({ "name": "Algebra" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "All fields are required");

        let (status, body) = send(
            &app,
            "POST",
            "/subject/subjects",
            None,
            Some(json!({ "name": "Algebra", "departmentId": department_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["message"], "Subject created successfully");
        assert_eq!(body["data"]["department"], department_id.as_str());
        let uri = format!("/subject/subjects/{}", body["data"]["id"].as_str().unwrap());

        let (status, body) = send(
            &app,
            "PUT",
            &uri,
            None,
            Some(json!({ "description": "Equations and structures" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Algebra");
        assert_eq!(body["data"]["description"], "Equations and structures");

        let (status, _) = send(&app, "DELETE", &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, "DELETE", &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Subject not found");
    }

    #[tokio::test]
    async fn test_unknown_route_answers_with_envelope() {
        let (app, _) = app();

        let (status, body) = send(&app, "GET", "/no/such/route", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["message"], "Route not found");
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
    }
}

#[cfg(test)]
mod feedback_tests {
    use super::support::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    async fn booked(app: &axum::Router) -> (String, String, String) {
        let (teacher_id, _) = teacher(app, "keating", "555-0100").await;
        let (student_id, token) = student(app, "Ada Lovelace", "ada@school.test").await;
        let appointment_id = book(app, &token, &teacher_id).await;
        (appointment_id, student_id, teacher_id)
    }

    fn feedback(ids: &(String, String, String), rating: i64) -> Value {
        json!({
            "appointment": ids.0,
            "student": ids.1,
            "teacher": ids.2,
            "rating": rating,
            "comments": "Very helpful",
        })
    }

    #[tokio::test]
    async fn test_rating_bounds() {
        let (app, _) = app();
        let ids = booked(&app).await;

        for rating in [0, 6] {
            let (status, body) = send(
                &app,
                "POST",
                "/feedback/feedbacks",
                None,
                Some(feedback(&ids, rating)),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "rating {rating}");
            assert_eq!(body["message"], "Rating must be between 1 and 5");
        }

        for rating in [1, 5] {
            let (status, body) = send(
                &app,
                "POST",
                "/feedback/feedbacks",
                None,
                Some(feedback(&ids, rating)),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED, "{body}");
            assert_eq!(body["data"]["rating"], rating);
        }

        let (_, body) = send(&app, "GET", "/feedback/feedbacks", None, None).await;
        assert_eq!(body["message"], "All feedbacks fetched successfully");
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_feedback_needs_an_existing_appointment() {
        let (app, _) = app();
        let (_, student_id, teacher_id) = booked(&app).await;
        let ids = (uuid::Uuid::new_v4().to_string(), student_id, teacher_id);

        let (status, body) = send(
            &app,
            "POST",
            "/feedback/feedbacks",
            None,
            Some(feedback(&ids, 4)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Appointment not found");
    }

    #[tokio::test]
    async fn test_feedback_parties_must_match_the_appointment() {
        let (app, _) = app();
        let (appointment_id, student_id, teacher_id) = booked(&app).await;
        let (stranger_id, _) = student(&app, "Grace Hopper", "grace@school.test").await;
        let (other_teacher_id, _) = teacher(&app, "sprout", "555-0101").await;

        for ids in [
            (appointment_id.clone(), stranger_id, teacher_id),
            (appointment_id, student_id, other_teacher_id),
        ] {
            let (status, body) = send(
                &app,
                "POST",
                "/feedback/feedbacks",
                None,
                Some(feedback(&ids, 4)),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{ids:?}");
            assert_eq!(body["message"], "Student and teacher must match the appointment");
        }

        let (_, body) = send(&app, "GET", "/feedback/feedbacks", None, None).await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feedback_update_checks_rating() {
        let (app, _) = app();
        let ids = booked(&app).await;
        let (_, body) = send(
            &app,
            "POST",
            "/feedback/feedbacks",
            None,
            Some(feedback(&ids, 3)),
        )
        .await;
        let uri = format!("/feedback/feedbacks/{}", body["data"]["id"].as_str().unwrap());

        let (status, body) = send(&app, "PUT", &uri, None, Some(json!({ "rating": 9 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Rating must be between 1 and 5");

        let (status, body) = send(&app, "PUT", &uri, None, Some(json!({ "rating": 4 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Feedback updated successfully");
        assert_eq!(body["data"]["rating"], 4);
        assert_eq!(body["data"]["comments"], "Very helpful");

        let (status, _) = send(&app, "DELETE", &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, "GET", &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Feedback not found");
    }
}

#[cfg(test)]
mod notification_tests {
    use super::support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_notification_lifecycle() {
        let (app, _) = app();
        let user = uuid::Uuid::new_v4().to_string();

        let (status, body) = send(
            &app,
            "POST",
            "/notification/notifications",
            None,
            Some(json!({ "user": user, "message": "Library closes early today" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Notification created successfully");
        assert_eq!(body["data"]["read"], false);
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "GET",
            &format!("/notification/notifications/{user}"),
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Notifications fetched successfully");
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let read = format!("/notification/notifications/{id}/read");
        let (status, first) = send(&app, "PUT", &read, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["message"], "Notification marked as read");
        assert_eq!(first["data"]["read"], true);

        let (status, second) = send(&app, "PUT", &read, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["data"]["read"], true);
        assert_eq!(second["data"]["updatedAt"], first["data"]["updatedAt"]);

        let uri = format!("/notification/notifications/{id}");
        let (status, body) = send(&app, "DELETE", &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Notification deleted successfully");

        let (status, body) = send(&app, "PUT", &read, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Notification not found");
    }

    #[tokio::test]
    async fn test_notification_validation() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            "POST",
            "/notification/notifications",
            None,
            Some(json!({ "user": uuid::Uuid::new_v4().to_string(), "message": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "All fields are required");

        let (status, body) = send(
            &app,
            "POST",
            "/notification/notifications",
            None,
            Some(json!({ "user": "someone", "message": "Hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid user id");
    }

    #[tokio::test]
    async fn test_bookings_show_up_in_the_teacher_inbox() {
        let (app, _) = app();
        let (teacher_id, _) = teacher(&app, "keating", "555-0100").await;
        let (_, token) = student(&app, "Ada Lovelace", "ada@school.test").await;
        book(&app, &token, &teacher_id).await;

        let (_, body) = send(
            &app,
            "GET",
            &format!("/notification/notifications/{teacher_id}"),
            None,
            None,
        )
        .await;
        let inbox = body["data"].as_array().unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0]["user"], teacher_id.as_str());
        assert_eq!(inbox[0]["read"], false);
    }
}
