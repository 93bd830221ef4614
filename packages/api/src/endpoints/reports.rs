use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AgentReport, DashboardSummary, ReportList, ReportPeriod};
use crate::transport::{ApiRequest, HttpTransport};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_reports(&self, period: ReportPeriod) -> Result<Vec<AgentReport>, ApiError> {
        let request = ApiRequest::get("/manager/reports").query("period", period.as_str());
        let list: ReportList = self.fetch(request).await?;
        Ok(list.agent_reports)
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get_json("/manager/dashboard").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[tokio::test]
    async fn test_reports_send_period() {
        let token = fresh_token("t1");
        let backend = FakeBackend::new();
        backend
            .accept(&token)
            .route("/manager/reports", 200, r#"{"agentReports":[]}"#);
        let api = client(&backend, &signed_in(&token, Some("R1")));

        let reports = api.list_reports(ReportPeriod::Monthly).await.unwrap();
        assert!(reports.is_empty());
        let call = &backend.calls_to("/manager/reports")[0];
        assert_eq!(call.query, vec![("period".to_string(), "MONTHLY".to_string())]);
    }

    #[tokio::test]
    async fn test_malformed_dashboard_is_a_decode_error() {
        let token = fresh_token("t1");
        let backend = FakeBackend::new();
        backend
            .accept(&token)
            .route("/manager/dashboard", 200, r#"{"totalAgents":"many"}"#);
        let session = signed_in(&token, Some("R1"));
        let api = client(&backend, &session);

        let err = api.dashboard_summary().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(session.is_authenticated());
    }
}
