///! API client for the switch inventory backend

use serde::de::DeserializeOwned;
use switchdesk_common::{
    MutationOutcome, MutationRequest, RequestFailed, SwitchDraft, SwitchId, SwitchRecord,
};
use tracing::debug;

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

fn transport(e: reqwest::Error) -> RequestFailed {
    RequestFailed::new(e.to_string())
}

/// Non-2xx response; the server's error text is appended when it sent one
fn status_failure(status: u16, body: &str) -> RequestFailed {
    match body.trim() {
        "" => RequestFailed::status(status),
        text => RequestFailed::new(format!("HTTP {} - {}", status, text)),
    }
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:4000`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn switches_url(&self) -> String {
        format!("{}/api/switches/", self.base_url)
    }

    pub fn switch_url(&self, id: &SwitchId) -> String {
        format!(
            "{}/api/switches/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, RequestFailed> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        debug!(%status, url = %response.url(), "switch API response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_failure(status.as_u16(), &body))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, RequestFailed> {
        self.send(request).await?.json().await.map_err(transport)
    }

    pub async fn list_switches(&self) -> Result<Vec<SwitchRecord>, RequestFailed> {
        self.send_json(self.client.get(self.switches_url())).await
    }

    pub async fn create_switch(&self, draft: &SwitchDraft) -> Result<SwitchRecord, RequestFailed> {
        self.send_json(self.client.post(self.switches_url()).json(draft))
            .await
    }

    pub async fn update_switch(
        &self,
        id: &SwitchId,
        draft: &SwitchDraft,
    ) -> Result<SwitchRecord, RequestFailed> {
        self.send_json(self.client.put(self.switch_url(id)).json(draft))
            .await
    }

    pub async fn delete_switch(&self, id: &SwitchId) -> Result<(), RequestFailed> {
        self.send(self.client.delete(self.switch_url(id))).await?;
        Ok(())
    }

    /// Execute a mutation issued by the inventory state
    pub async fn perform(&self, request: &MutationRequest) -> Result<MutationOutcome, RequestFailed> {
        match request {
            MutationRequest::Create(draft) => {
                self.create_switch(draft).await.map(MutationOutcome::Created)
            }
            MutationRequest::Update(id, draft) => {
                let record = self.update_switch(id, draft).await?;
                Ok(MutationOutcome::Updated {
                    id: id.clone(),
                    record,
                })
            }
            MutationRequest::Delete(id) => {
                self.delete_switch(id).await?;
                Ok(MutationOutcome::Deleted(id.clone()))
            }
        }
    }
}
