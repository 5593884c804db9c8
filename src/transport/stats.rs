use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use super::query::{Params, push, push_flag, push_indexed, push_opt, push_page};
use crate::domain::{
    ApiResponse, CampaignDeliveryStats, CampaignId, CampaignQuery, CampaignStatus, MessageId,
    MessageQuery,
};

#[derive(Debug, Clone, Deserialize)]
struct CampaignStatusJson {
    status: String,
    #[serde(default)]
    creation_time: Option<String>,
    #[serde(default)]
    start_time: Option<String>,
}

pub fn encode_delivery_stats_params(request: &CampaignDeliveryStats) -> Params {
    let mut params = Params::new();
    push(
        &mut params,
        CampaignId::FIELD,
        request.campaign_id.value().to_string(),
    );
    push_opt(&mut params, "changed_since", request.changed_since.as_deref());
    push_indexed(
        &mut params,
        "field_ids",
        request.field_ids.iter().map(|id| id.value().to_string()),
    );
    params
}

pub fn encode_visited_links_params(campaign_id: CampaignId, group: bool) -> Params {
    let mut params = Params::new();
    push(&mut params, CampaignId::FIELD, campaign_id.value().to_string());
    push_flag(&mut params, "group", group);
    params
}

pub fn encode_campaign_query_params(query: &CampaignQuery) -> Params {
    let mut params = Params::new();
    push_opt(&mut params, "from", query.from.as_deref());
    push_opt(&mut params, "to", query.to.as_deref());
    push_page(&mut params, query.page);
    params
}

/// Shared by `getMessages` and `listMessages`.
pub fn encode_message_query_params(query: &MessageQuery) -> Params {
    let mut params = Params::new();
    push_opt(&mut params, "date_from", query.date_from.as_deref());
    push_opt(&mut params, "date_to", query.date_to.as_deref());
    push_page(&mut params, query.page);
    params
}

pub fn encode_get_message_params(id: MessageId) -> Params {
    vec![("id".to_owned(), id.value().to_string())]
}

pub fn decode_campaign_status_response(
    json: &str,
) -> Result<ApiResponse<CampaignStatus>, TransportError> {
    decode_envelope(json, |parsed: CampaignStatusJson| {
        Ok(CampaignStatus {
            status: parsed.status,
            creation_time: parsed.creation_time,
            start_time: parsed.start_time,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldId, Page};
    use crate::transport::query::render;

    #[test]
    fn encode_delivery_stats_with_field_ids() {
        let request = CampaignDeliveryStats {
            campaign_id: CampaignId::new(30),
            changed_since: Some("2024-01-01 00:00:00".to_owned()),
            field_ids: vec![FieldId::new(1), FieldId::new(2)],
        };
        assert_eq!(
            render(&encode_delivery_stats_params(&request)),
            "campaign_id=30&changed_since=2024-01-01 00:00:00&field_ids[0]=1&field_ids[1]=2"
        );
        assert_eq!(
            render(&encode_delivery_stats_params(&CampaignDeliveryStats::new(
                CampaignId::new(30)
            ))),
            "campaign_id=30"
        );
    }

    #[test]
    fn encode_queries() {
        assert_eq!(
            render(&encode_visited_links_params(CampaignId::new(4), true)),
            "campaign_id=4&group=1"
        );
        assert_eq!(
            render(&encode_campaign_query_params(&CampaignQuery {
                from: Some("2024-01-01 00:00".to_owned()),
                page: Page {
                    limit: Some(10),
                    offset: None
                },
                ..Default::default()
            })),
            "from=2024-01-01 00:00&limit=10"
        );
        assert_eq!(
            render(&encode_message_query_params(&MessageQuery {
                date_to: Some("2024-02-01 00:00".to_owned()),
                ..Default::default()
            })),
            "date_to=2024-02-01 00:00"
        );
        assert_eq!(render(&encode_get_message_params(MessageId::new(6))), "id=6");
    }

    #[test]
    fn decode_campaign_status() {
        let status = decode_campaign_status_response(
            r#"{ "result": { "status": "completed", "creation_time": "2024-01-01 10:00:00" } }"#,
        )
        .unwrap()
        .result;
        assert_eq!(status.status, "completed");
        assert_eq!(status.creation_time.as_deref(), Some("2024-01-01 10:00:00"));
        assert_eq!(status.start_time, None);
    }
}
