use super::{UnisenderClient, UnisenderError};
use crate::domain::{
    ApiResponse, CampaignId, CampaignQuery, CampaignStatus, MessageId, MessageQuery,
};
use crate::transport::{self, operation};

impl UnisenderClient {
    /// Aggregate counters (sent, delivered, opened, clicked) for a campaign.
    pub async fn get_campaign_common_stats(
        &self,
        campaign_id: CampaignId,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::GET_CAMPAIGN_COMMON_STATS,
            transport::encode_campaign_id_params(campaign_id),
            transport::decode_value_response,
        )
        .await
    }

    /// Clicked links; `group` merges clicks on the same URL.
    pub async fn get_visited_links(
        &self,
        campaign_id: CampaignId,
        group: bool,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::GET_VISITED_LINKS,
            transport::encode_visited_links_params(campaign_id, group),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn get_campaigns(
        &self,
        query: &CampaignQuery,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::GET_CAMPAIGNS,
            transport::encode_campaign_query_params(query),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn get_campaign_status(
        &self,
        campaign_id: CampaignId,
    ) -> Result<ApiResponse<CampaignStatus>, UnisenderError> {
        self.send(
            operation::GET_CAMPAIGN_STATUS,
            transport::encode_campaign_id_params(campaign_id),
            transport::decode_campaign_status_response,
        )
        .await
    }

    pub async fn get_messages(
        &self,
        query: &MessageQuery,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::GET_MESSAGES,
            transport::encode_message_query_params(query),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn get_message(
        &self,
        id: MessageId,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::GET_MESSAGE,
            transport::encode_get_message_params(id),
            transport::decode_value_response,
        )
        .await
    }

    /// Message headers only, without bodies.
    pub async fn list_messages(
        &self,
        query: &MessageQuery,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::LIST_MESSAGES,
            transport::encode_message_query_params(query),
            transport::decode_value_response,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{FakeTransport, assert_param, make_client};
    use crate::domain::Page;

    #[tokio::test]
    async fn campaign_status_is_typed() {
        let json = r#"{ "result": { "status": "scheduled", "start_time": "2024-03-01 09:00:00" } }"#;
        let transport = FakeTransport::new().respond(200, json);
        let client = make_client(transport.clone());

        let status = client
            .get_campaign_status(CampaignId::new(88))
            .await
            .unwrap()
            .result;
        assert_eq!(status.status, "scheduled");
        assert_eq!(status.start_time.as_deref(), Some("2024-03-01 09:00:00"));
        assert_param(&transport.last_query(), "campaign_id", "88");
    }

    #[tokio::test]
    async fn visited_links_can_be_grouped() {
        let transport = FakeTransport::new().respond(200, r#"{ "result": { "fields": [], "data": [] } }"#);
        let client = make_client(transport.clone());

        client
            .get_visited_links(CampaignId::new(88), true)
            .await
            .unwrap();
        assert_param(&transport.last_query(), "group", "1");
    }

    #[tokio::test]
    async fn message_queries_pass_pages_through() {
        let transport = FakeTransport::new()
            .respond(200, r#"{ "result": [] }"#)
            .respond(200, r#"{ "result": { "id": 501 } }"#);
        let client = make_client(transport.clone());

        let query = MessageQuery {
            page: Page {
                limit: Some(20),
                offset: Some(40),
            },
            ..Default::default()
        };
        client.list_messages(&query).await.unwrap();
        assert_param(&transport.last_query(), "offset", "40");

        client.get_message(MessageId::new(501)).await.unwrap();
        assert_eq!(transport.operations(), vec!["listMessages", "getMessage"]);
        assert_param(&transport.last_query(), "id", "501");
    }
}
