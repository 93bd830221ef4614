//! Admin-only endpoints: manager accounts, password resets, notifications.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Manager, NewManager, NotificationFeed};
use crate::transport::{ApiRequest, HttpTransport};
use crate::validation;

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_managers(&self) -> Result<Vec<Manager>, ApiError> {
        self.get_json("/admin/managers").await
    }

    pub async fn create_manager(&self, manager: &NewManager) -> Result<Manager, ApiError> {
        manager.validate()?;
        self.post_json("/admin/managers", manager).await
    }

    pub async fn delete_manager(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting manager");
        self.delete(&format!("/admin/managers/{id}")).await
    }

    /// Reset an employee's password; the backend notifies them.
    pub async fn reset_user_password(&self, work_id: &str) -> Result<(), ApiError> {
        validation::require("Work ID", work_id)?;
        let work_id = work_id.trim();
        if work_id.contains(['/', '?', '#']) {
            return Err(ApiError::Validation("Work ID contains invalid characters".into()));
        }
        self.execute(ApiRequest::post(format!("/admin/users/{work_id}/reset-password")))
            .await
            .map(|_| ())
    }

    pub async fn list_notifications(&self) -> Result<NotificationFeed, ApiError> {
        self.get_json("/admin/notifications").await
    }

    pub async fn mark_notification_read(&self, id: i64) -> Result<(), ApiError> {
        self.execute(ApiRequest::post(format!("/admin/notifications/{id}/read")))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn admin_client(backend: &FakeBackend) -> ApiClient<FakeBackend> {
        let token = fresh_token("admin");
        backend.accept(&token);
        client(backend, &signed_in(&token, Some("R1")))
    }

    #[tokio::test]
    async fn test_managers_are_a_bare_array() {
        let backend = FakeBackend::new();
        backend.route(
            "/admin/managers",
            200,
            r#"[{"id":3,"firstName":"Ada","lastName":"Obi","email":"a@b.com",
                "nationalId":"1","phoneNumber":"2","workId":"EMP1"}]"#,
        );

        let managers = admin_client(&backend).list_managers().await.unwrap();
        assert_eq!(managers[0].id, "3");
        assert_eq!(managers[0].full_name(), "Ada Obi");
    }

    #[tokio::test]
    async fn test_reset_password_path() {
        let backend = FakeBackend::new();
        backend.route("/admin/users/EMP1/reset-password", 200, "");

        admin_client(&backend)
            .reset_user_password(" EMP1 ")
            .await
            .unwrap();
        assert_eq!(backend.calls_to("/admin/users/EMP1/reset-password").len(), 1);

        let err = admin_client(&backend)
            .reset_user_password("EMP1/../x")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_notification_feed() {
        let backend = FakeBackend::new();
        backend.route(
            "/admin/notifications",
            200,
            r#"{"notifications":[{"id":5,"title":"Report due","message":"Weekly",
                "senderWorkId":"EMP1","senderName":"Ada","type":"REPORT",
                "sendTime":"2024-05-01T09:30:00","read":false}],"unreadCount":1}"#,
        );

        let feed = admin_client(&backend).list_notifications().await.unwrap();
        assert_eq!(feed.unread_count, 1);
        assert_eq!(feed.notifications[0].kind, "REPORT");
    }
}
