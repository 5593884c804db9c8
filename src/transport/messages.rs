use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use super::query::{
    Params, push, push_bool, push_flag, push_joined, push_keyed, push_opt,
};
use super::scalar::{TransportAmount, TransportNumber};
use crate::domain::{
    ApiResponse, Attachment, CampaignId, CreateCampaign, CreateEmailMessage, CreateSmsMessage,
    CreatedCampaign, EmailAddress, ListId, MessageId, MessageVersion, RawPhoneNumber, SendEmail,
    SendSms, SendTestEmail, SentSms, SmsId, TemplateId, UpdateEmailMessage, UpdateOptInEmail,
    WebVersion,
};

#[derive(Debug, Clone, Deserialize)]
struct MessageIdJson {
    message_id: TransportNumber,
}

#[derive(Debug, Clone, Deserialize)]
struct CreatedCampaignJson {
    campaign_id: TransportNumber,
    status: String,
    #[serde(default)]
    count: Option<TransportNumber>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageVersionJson {
    message_id: TransportNumber,
    actual_version_id: TransportNumber,
}

#[derive(Debug, Clone, Deserialize)]
struct SentSmsJson {
    sms_id: serde_json::Value,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    price: Option<TransportAmount>,
}

#[derive(Debug, Clone, Deserialize)]
struct WebVersionJson {
    letter_id: TransportNumber,
    web_letter_link: String,
}

fn push_attachments(params: &mut Params, attachments: &[Attachment]) {
    push_keyed(
        params,
        "attachments",
        attachments
            .iter()
            .map(|it| (it.name.as_str(), it.content.as_str())),
    );
}

pub fn encode_create_email_message_params(request: &CreateEmailMessage) -> Params {
    let mut params = Params::new();
    push(&mut params, "sender_name", request.sender_name());
    push(&mut params, "sender_email", request.sender_email().as_str());
    push(&mut params, "subject", request.subject());
    push(&mut params, "body", request.body());
    push(&mut params, ListId::FIELD, request.list_id().value().to_string());

    let options = request.options();
    push_opt(&mut params, "text_body", options.text_body.as_deref());
    push_flag(&mut params, "generate_text", options.generate_text);
    push_opt(&mut params, "tag", options.tag.as_deref());
    push_attachments(&mut params, &options.attachments);
    push_opt(&mut params, "lang", options.lang.as_deref());
    push_opt(
        &mut params,
        TemplateId::FIELD,
        options.template_id.map(TemplateId::value),
    );
    push_opt(&mut params, "system_template_id", options.system_template_id);
    push_opt(&mut params, "wrap_type", options.wrap_type.as_deref());
    push_joined(&mut params, "categories", &options.categories);
    params
}

pub fn encode_create_sms_message_params(request: &CreateSmsMessage) -> Params {
    let mut params = Params::new();
    push(&mut params, "sender", request.sender());
    push(&mut params, "body", request.body());
    push(&mut params, ListId::FIELD, request.list_id().value().to_string());
    push_opt(&mut params, "tag", request.tag());
    params
}

pub fn encode_create_campaign_params(request: &CreateCampaign) -> Params {
    let mut params = Params::new();
    push(
        &mut params,
        MessageId::FIELD,
        request.message_id.value().to_string(),
    );

    let options = &request.options;
    push_opt(&mut params, "start_time", options.start_time.as_deref());
    push_opt(&mut params, "timezone", options.timezone.as_deref());
    push_bool(&mut params, "track_read", options.track_read);
    push_bool(&mut params, "track_links", options.track_links);
    push_joined(&mut params, "contacts", &options.contacts);
    push_opt(&mut params, "contacts_url", options.contacts_url.as_deref());
    push_bool(&mut params, "track_ga", options.track_ga);
    push_opt(&mut params, "payment_limit", options.payment_limit);
    push_opt(
        &mut params,
        "payment_currency",
        options.payment_currency.as_deref(),
    );
    params
}

pub fn encode_campaign_id_params(campaign_id: CampaignId) -> Params {
    vec![(CampaignId::FIELD.to_owned(), campaign_id.value().to_string())]
}

pub fn encode_message_id_params(message_id: MessageId) -> Params {
    vec![(MessageId::FIELD.to_owned(), message_id.value().to_string())]
}

pub fn encode_send_sms_params(request: &SendSms) -> Params {
    let mut params = Params::new();
    push_joined(
        &mut params,
        RawPhoneNumber::FIELD,
        request.phones().iter().map(RawPhoneNumber::raw),
    );
    push(&mut params, "sender", request.sender());
    push(&mut params, "text", request.text());
    params
}

pub fn encode_check_sms_params(sms_id: &SmsId) -> Params {
    vec![(SmsId::FIELD.to_owned(), sms_id.as_str().to_owned())]
}

pub fn encode_send_email_params(request: &SendEmail) -> Params {
    let mut params = Params::new();
    push(&mut params, EmailAddress::FIELD, request.email());
    push(&mut params, "sender_name", request.sender_name());
    push(&mut params, "sender_email", request.sender_email().as_str());
    push(&mut params, "subject", request.subject());
    push(&mut params, "body", request.body());
    push(&mut params, ListId::FIELD, request.list_id().value().to_string());

    let options = request.options();
    push_attachments(&mut params, &options.attachments);
    push_opt(&mut params, "lang", options.lang.as_deref());
    push_bool(&mut params, "track_read", options.track_read);
    push_bool(&mut params, "track_links", options.track_links);
    push_opt(&mut params, "cc", options.cc.as_deref());
    push_opt(&mut params, "headers", options.headers.as_deref());
    push_opt(&mut params, "images_as", options.images_as.as_deref());
    push_flag(&mut params, "error_checking", options.error_checking);
    push_keyed(
        &mut params,
        "metadata",
        options
            .metadata
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    );
    push_opt(&mut params, "ref_key", options.ref_key.as_deref());
    push_opt(
        &mut params,
        "user_campaign_id",
        options.user_campaign_id.as_deref(),
    );
    params
}

pub fn encode_send_test_email_params(request: &SendTestEmail) -> Params {
    let mut params = Params::new();
    push_joined(
        &mut params,
        EmailAddress::FIELD,
        request.emails.iter().map(EmailAddress::as_str),
    );
    push(&mut params, "id", request.message_id.value().to_string());
    params
}

pub fn encode_check_email_params(email_ids: &[String]) -> Params {
    let mut params = Params::new();
    push_joined(&mut params, "email_id", email_ids);
    params
}

pub fn encode_update_opt_in_email_params(request: &UpdateOptInEmail) -> Params {
    let mut params = Params::new();
    push(&mut params, "sender_name", request.sender_name());
    push(&mut params, "sender_email", request.sender_email().as_str());
    push(&mut params, "subject", request.subject());
    push(&mut params, "body", request.body());
    push(&mut params, ListId::FIELD, request.list_id().value().to_string());
    params
}

pub fn encode_update_email_message_params(id: MessageId, changes: &UpdateEmailMessage) -> Params {
    let mut params = Params::new();
    push(&mut params, "id", id.value().to_string());
    push_opt(&mut params, "sender_name", changes.sender_name.as_deref());
    push_opt(
        &mut params,
        "sender_email",
        changes.sender_email.as_ref().map(EmailAddress::as_str),
    );
    push_opt(&mut params, "subject", changes.subject.as_deref());
    push_opt(&mut params, "body", changes.body.as_deref());
    push_opt(&mut params, "text_body", changes.text_body.as_deref());
    push_opt(&mut params, "lang", changes.lang.as_deref());
    push_joined(&mut params, "categories", &changes.categories);
    params
}

pub fn decode_message_id_response(json: &str) -> Result<ApiResponse<MessageId>, TransportError> {
    decode_envelope(json, |parsed: MessageIdJson| {
        Ok(MessageId::new(parsed.message_id.value()))
    })
}

pub fn decode_created_campaign_response(
    json: &str,
) -> Result<ApiResponse<CreatedCampaign>, TransportError> {
    decode_envelope(json, |parsed: CreatedCampaignJson| {
        Ok(CreatedCampaign {
            campaign_id: CampaignId::new(parsed.campaign_id.value()),
            status: parsed.status,
            count: parsed.count.map_or(0, TransportNumber::value),
        })
    })
}

pub fn decode_message_version_response(
    json: &str,
) -> Result<ApiResponse<MessageVersion>, TransportError> {
    decode_envelope(json, |parsed: MessageVersionJson| {
        Ok(MessageVersion {
            message_id: MessageId::new(parsed.message_id.value()),
            actual_version_id: MessageId::new(parsed.actual_version_id.value()),
        })
    })
}

pub fn decode_sent_sms_response(json: &str) -> Result<ApiResponse<SentSms>, TransportError> {
    decode_envelope(json, |parsed: SentSmsJson| {
        let raw_id = match parsed.sms_id {
            serde_json::Value::String(value) => value,
            other => other.to_string(),
        };
        let sms_id = SmsId::new(raw_id.clone()).map_err(|_| TransportError::InvalidValue {
            field: SmsId::FIELD,
            value: raw_id,
        })?;
        Ok(SentSms {
            sms_id,
            currency: parsed.currency,
            price: parsed.price.map(TransportAmount::into_string),
        })
    })
}

pub fn decode_web_version_response(
    json: &str,
) -> Result<ApiResponse<WebVersion>, TransportError> {
    decode_envelope(json, |parsed: WebVersionJson| {
        Ok(WebVersion {
            letter_id: MessageId::new(parsed.letter_id.value()),
            web_letter_link: parsed.web_letter_link,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CampaignOptions, EmailMessageOptions, SendEmailOptions};
    use crate::transport::query::render;

    fn sender() -> EmailAddress {
        EmailAddress::new("shop@x.com").unwrap()
    }

    #[test]
    fn encode_create_email_message_required_then_options() {
        let request = CreateEmailMessage::new(
            "Shop",
            sender(),
            "Sale",
            "<b>hi</b>",
            ListId::new(679),
            EmailMessageOptions {
                generate_text: true,
                attachments: vec![Attachment {
                    name: "a.txt".to_owned(),
                    content: "hello".to_owned(),
                }],
                template_id: Some(TemplateId::new(4)),
                categories: vec!["promo".to_owned(), "sale".to_owned()],
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            render(&encode_create_email_message_params(&request)),
            "sender_name=Shop&sender_email=shop@x.com&subject=Sale&body=<b>hi</b>&list_id=679\
             &generate_text=1&attachments[a.txt]=hello&template_id=4&categories=promo,sale"
        );
    }

    #[test]
    fn encode_create_sms_message_with_tag() {
        let request =
            CreateSmsMessage::new("Shop", "Sale today", ListId::new(1), Some("vip".to_owned()))
                .unwrap();
        assert_eq!(
            render(&encode_create_sms_message_params(&request)),
            "sender=Shop&body=Sale today&list_id=1&tag=vip"
        );
    }

    #[test]
    fn encode_create_campaign_options() {
        let request = CreateCampaign {
            message_id: MessageId::new(10),
            options: CampaignOptions {
                start_time: Some("2024-05-01 10:00".to_owned()),
                track_read: Some(true),
                track_links: Some(false),
                contacts: vec!["a@x.com".to_owned(), "b@y.com".to_owned()],
                ..Default::default()
            },
        };
        assert_eq!(
            render(&encode_create_campaign_params(&request)),
            "message_id=10&start_time=2024-05-01 10:00&track_read=1&track_links=0&contacts=a@x.com,b@y.com"
        );
    }

    #[test]
    fn encode_send_sms_joins_phones() {
        let request = SendSms::new(
            vec![
                RawPhoneNumber::new("79251234567").unwrap(),
                RawPhoneNumber::new("79251234568").unwrap(),
            ],
            "Shop",
            "hi",
        )
        .unwrap();
        assert_eq!(
            render(&encode_send_sms_params(&request)),
            "phone=79251234567,79251234568&sender=Shop&text=hi"
        );
    }

    #[test]
    fn encode_send_email_metadata_and_flags() {
        let request = SendEmail::new(
            "Andrey <a@x.com>",
            "Shop",
            sender(),
            "Hi",
            "body",
            ListId::new(1),
            SendEmailOptions {
                track_read: Some(true),
                error_checking: true,
                metadata: vec![("order".to_owned(), "42".to_owned())],
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            render(&encode_send_email_params(&request)),
            "email=Andrey <a@x.com>&sender_name=Shop&sender_email=shop@x.com&subject=Hi&body=body\
             &list_id=1&track_read=1&error_checking=1&metadata[order]=42"
        );
    }

    #[test]
    fn encode_small_requests() {
        let test_email = SendTestEmail {
            emails: vec![EmailAddress::new("a@x.com").unwrap()],
            message_id: MessageId::new(3),
        };
        assert_eq!(
            render(&encode_send_test_email_params(&test_email)),
            "email=a@x.com&id=3"
        );
        assert_eq!(
            render(&encode_check_email_params(&["1".to_owned(), "2".to_owned()])),
            "email_id=1,2"
        );
        assert_eq!(
            render(&encode_check_sms_params(&SmsId::new("77").unwrap())),
            "sms_id=77"
        );
        assert_eq!(
            render(&encode_update_email_message_params(
                MessageId::new(5),
                &UpdateEmailMessage {
                    subject: Some("New".to_owned()),
                    ..Default::default()
                }
            )),
            "id=5&subject=New"
        );
    }

    #[test]
    fn decode_message_results() {
        assert_eq!(
            decode_message_id_response(r#"{ "result": { "message_id": 11 } }"#)
                .unwrap()
                .result,
            MessageId::new(11)
        );

        let created = decode_created_campaign_response(
            r#"{ "result": { "campaign_id": "20", "status": "scheduled", "count": 5 } }"#,
        )
        .unwrap()
        .result;
        assert_eq!(created.campaign_id, CampaignId::new(20));
        assert_eq!(created.status, "scheduled");
        assert_eq!(created.count, 5);

        let version = decode_message_version_response(
            r#"{ "result": { "message_id": 1, "actual_version_id": 2 } }"#,
        )
        .unwrap()
        .result;
        assert_eq!(version.actual_version_id, MessageId::new(2));
    }

    #[test]
    fn decode_sent_sms_accepts_numeric_id_and_price() {
        let sent = decode_sent_sms_response(
            r#"{ "result": { "sms_id": 123, "currency": "RUB", "price": 0.50 } }"#,
        )
        .unwrap()
        .result;
        assert_eq!(sent.sms_id.as_str(), "123");
        assert_eq!(sent.price.as_deref(), Some("0.50"));
    }

    #[test]
    fn decode_web_version() {
        let web = decode_web_version_response(
            r#"{ "result": { "letter_id": 8, "web_letter_link": "https://x/8" } }"#,
        )
        .unwrap()
        .result;
        assert_eq!(web.letter_id, MessageId::new(8));
        assert_eq!(web.web_letter_link, "https://x/8");
    }
}
