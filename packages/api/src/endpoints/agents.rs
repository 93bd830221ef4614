use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Agent, AgentList, NewAgent};
use crate::transport::HttpTransport;

impl<T: HttpTransport> ApiClient<T> {
    /// Agents reporting to the signed-in manager.
    pub async fn list_agents(&self) -> Result<Vec<Agent>, ApiError> {
        let list: AgentList = self.get_json("/manager/agents").await?;
        Ok(list.agents)
    }

    pub async fn create_agent(&self, agent: &NewAgent) -> Result<Agent, ApiError> {
        agent.validate()?;
        self.post_json("/manager/agents", agent).await
    }

    pub async fn delete_agent(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting agent");
        self.delete(&format!("/manager/agents/{id}")).await
    }
}
