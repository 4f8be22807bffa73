//! Calendar resource client.

use std::collections::BTreeMap;

use async_trait::async_trait;

use opsdeck_types::{
    CalendarEvent, CalendarStats, CreateCalendarEventRequest, CreateReplyRequest, EventReply,
    UpdateCalendarEventRequest,
};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// Operations on `/calendar/*`.
#[async_trait]
pub trait CalendarApi: Send + Sync {
    /// `GET /calendar/events`
    async fn list_events(
        &self,
        filters: &BTreeMap<String, String>,
    ) -> ApiResult<Vec<CalendarEvent>>;

    /// `POST /calendar/events`
    async fn create_event(&self, req: &CreateCalendarEventRequest) -> ApiResult<CalendarEvent>;

    /// `PUT /calendar/events/:id`
    async fn update_event(
        &self,
        id: i64,
        req: &UpdateCalendarEventRequest,
    ) -> ApiResult<CalendarEvent>;

    /// `DELETE /calendar/events/:id`
    async fn delete_event(&self, id: i64) -> ApiResult<()>;

    /// `GET /calendar/events/:id/replies`
    async fn list_replies(&self, event_id: i64) -> ApiResult<Vec<EventReply>>;

    /// `POST /calendar/events/:id/replies`
    async fn create_reply(&self, event_id: i64, req: &CreateReplyRequest)
        -> ApiResult<EventReply>;

    /// `GET /calendar/stats`
    async fn stats(&self) -> ApiResult<CalendarStats>;

    /// `GET /calendar/upcoming`
    async fn upcoming(&self) -> ApiResult<Vec<CalendarEvent>>;

    /// `GET /calendar/today`
    async fn today(&self) -> ApiResult<Vec<CalendarEvent>>;
}

/// HTTP-backed [`CalendarApi`].
#[derive(Debug, Clone)]
pub struct HttpCalendarApi {
    http: HttpClient,
}

impl HttpCalendarApi {
    /// Wrap a configured [`HttpClient`].
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CalendarApi for HttpCalendarApi {
    async fn list_events(
        &self,
        filters: &BTreeMap<String, String>,
    ) -> ApiResult<Vec<CalendarEvent>> {
        Ok(self.http.get_list("/calendar/events", filters).await?.items)
    }

    async fn create_event(&self, req: &CreateCalendarEventRequest) -> ApiResult<CalendarEvent> {
        self.http.post("/calendar/events", req).await
    }

    async fn update_event(
        &self,
        id: i64,
        req: &UpdateCalendarEventRequest,
    ) -> ApiResult<CalendarEvent> {
        self.http.put(&format!("/calendar/events/{id}"), req).await
    }

    async fn delete_event(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/calendar/events/{id}")).await?;
        Ok(())
    }

    async fn list_replies(&self, event_id: i64) -> ApiResult<Vec<EventReply>> {
        Ok(self
            .http
            .get_list(&format!("/calendar/events/{event_id}/replies"), &BTreeMap::new())
            .await?
            .items)
    }

    async fn create_reply(
        &self,
        event_id: i64,
        req: &CreateReplyRequest,
    ) -> ApiResult<EventReply> {
        self.http
            .post(&format!("/calendar/events/{event_id}/replies"), req)
            .await
    }

    async fn stats(&self) -> ApiResult<CalendarStats> {
        self.http.get("/calendar/stats", &BTreeMap::new()).await
    }

    async fn upcoming(&self) -> ApiResult<Vec<CalendarEvent>> {
        Ok(self
            .http
            .get_list("/calendar/upcoming", &BTreeMap::new())
            .await?
            .items)
    }

    async fn today(&self) -> ApiResult<Vec<CalendarEvent>> {
        Ok(self
            .http
            .get_list("/calendar/today", &BTreeMap::new())
            .await?
            .items)
    }
}
