//! API client for the switch inventory backend

use serde::{de::DeserializeOwned, Serialize};
use switchdesk_common::{
    MutationOutcome, MutationRequest, RequestFailed, SwitchDraft, SwitchId, SwitchRecord,
};

const API_BASE: &str = "http://localhost:4000/api";

/// Collection endpoint, with the trailing slash the backend routes on
pub fn switches_url() -> String {
    format!("{}/switches/", API_BASE)
}

pub fn switch_url(id: &SwitchId) -> String {
    format!("{}/switches/{}", API_BASE, urlencoding::encode(id.as_str()))
}

fn transport(e: impl std::fmt::Display) -> RequestFailed {
    RequestFailed::new(e.to_string())
}

async fn read_json<T: DeserializeOwned>(response: reqwasm::http::Response) -> Result<T, RequestFailed> {
    if response.ok() {
        response.json().await.map_err(transport)
    } else {
        Err(RequestFailed::status(response.status()))
    }
}

/// GET request helper
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, RequestFailed> {
    let response = reqwasm::http::Request::get(url)
        .send()
        .await
        .map_err(transport)?;

    read_json(response).await
}

/// POST or PUT a JSON body, decoding the JSON reply
async fn send_json<T: DeserializeOwned, B: Serialize>(
    request: reqwasm::http::Request,
    body: &B,
) -> Result<T, RequestFailed> {
    let body = serde_json::to_string(body).map_err(|e| RequestFailed::new(e.to_string()))?;

    let response = request
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(transport)?;

    read_json(response).await
}

/// Get every switch
pub async fn list_switches() -> Result<Vec<SwitchRecord>, RequestFailed> {
    fetch_json(&switches_url()).await
}

pub async fn create_switch(draft: &SwitchDraft) -> Result<SwitchRecord, RequestFailed> {
    send_json(reqwasm::http::Request::post(&switches_url()), draft).await
}

pub async fn update_switch(id: &SwitchId, draft: &SwitchDraft) -> Result<SwitchRecord, RequestFailed> {
    send_json(reqwasm::http::Request::put(&switch_url(id)), draft).await
}

/// Delete a switch; any response body is ignored
pub async fn delete_switch(id: &SwitchId) -> Result<(), RequestFailed> {
    let response = reqwasm::http::Request::delete(&switch_url(id))
        .send()
        .await
        .map_err(transport)?;

    if response.ok() {
        Ok(())
    } else {
        Err(RequestFailed::status(response.status()))
    }
}

/// Send whatever the inventory state asked for
pub async fn perform(request: &MutationRequest) -> Result<MutationOutcome, RequestFailed> {
    match request {
        MutationRequest::Create(draft) => create_switch(draft).await.map(MutationOutcome::Created),
        MutationRequest::Update(id, draft) => {
            let record = update_switch(id, draft).await?;
            Ok(MutationOutcome::Updated {
                id: id.clone(),
                record,
            })
        }
        MutationRequest::Delete(id) => {
            delete_switch(id).await?;
            Ok(MutationOutcome::Deleted(id.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url_keeps_trailing_slash() {
        assert_eq!(switches_url(), "http://localhost:4000/api/switches/");
    }

    #[test]
    fn test_switch_url_encodes_id() {
        assert_eq!(
            switch_url(&SwitchId::from("65f1c0ffee0000000000a001")),
            "http://localhost:4000/api/switches/65f1c0ffee0000000000a001"
        );
        assert_eq!(
            switch_url(&SwitchId::from("a/b c")),
            "http://localhost:4000/api/switches/a%2Fb%20c"
        );
    }
}
