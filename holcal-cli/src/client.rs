//! HTTP implementation of the holiday store contract.
//!
//! Speaks the store's JSON wire protocol:
//! - `GET /holidays` → array of `{id, date: "dd/MM/yyyy", name}`
//! - `POST /holidays` with `{date, name}` (the store assigns the id)
//! - `DELETE /holidays/{id}`
//!
//! Any non-2xx status maps to `TransportError::Status`; connection and
//! timeout failures to `TransportError::Connect`; undecodable bodies to
//! `TransportError::Payload`.

use std::time::Duration;

use holcal_core::{Holiday, HolidayStore, NewHoliday, TransportError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpHolidayStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpHolidayStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpHolidayStore {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl HolidayStore for HttpHolidayStore {
    async fn list_all(&self) -> Result<Vec<Holiday>, TransportError> {
        let resp = self
            .http
            .get(format!("{}/holidays", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Payload(e.to_string()))?;
        decode_holidays(&body)
    }

    async fn create(&self, holiday: NewHoliday) -> Result<(), TransportError> {
        let body =
            serde_json::to_string(&holiday).map_err(|e| TransportError::Payload(e.to_string()))?;

        let resp = self
            .http
            .post(format!("{}/holidays", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), TransportError> {
        let resp = self
            .http
            .delete(format!("{}/holidays/{}", self.base_url, id))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// The store sends `null` rather than `[]` when it holds no holidays.
fn decode_holidays(body: &str) -> Result<Vec<Holiday>, TransportError> {
    let holidays: Option<Vec<Holiday>> =
        serde_json::from_str(body).map_err(|e| TransportError::Payload(e.to_string()))?;
    Ok(holidays.unwrap_or_default())
}
