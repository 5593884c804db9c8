use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use super::query::{Params, push, push_opt, push_page};
use super::scalar::TransportNumber;
use crate::domain::{
    ApiResponse, CreateEmailTemplate, CreatedTemplate, TemplateId, TemplateQuery,
    TemplateRef, UpdateEmailTemplate,
};

#[derive(Debug, Clone, Deserialize)]
struct CreatedTemplateJson {
    template_id: TransportNumber,
}

pub fn encode_create_email_template_params(request: &CreateEmailTemplate) -> Params {
    let mut params = Params::new();
    push(&mut params, "title", request.title());
    push(&mut params, "subject", request.subject());
    push(&mut params, "body", request.body());
    let options = request.options();
    push_opt(&mut params, "description", options.description.as_deref());
    push_opt(&mut params, "text_body", options.text_body.as_deref());
    push_opt(&mut params, "lang", options.lang.as_deref());
    params
}

pub fn encode_update_email_template_params(
    template_id: TemplateId,
    changes: &UpdateEmailTemplate,
) -> Params {
    let mut params = Params::new();
    push(&mut params, TemplateId::FIELD, template_id.value().to_string());
    push_opt(&mut params, "title", changes.title.as_deref());
    push_opt(&mut params, "subject", changes.subject.as_deref());
    push_opt(&mut params, "body", changes.body.as_deref());
    push_opt(&mut params, "description", changes.description.as_deref());
    push_opt(&mut params, "text_body", changes.text_body.as_deref());
    push_opt(&mut params, "lang", changes.lang.as_deref());
    params
}

pub fn encode_template_id_params(template_id: TemplateId) -> Params {
    vec![(TemplateId::FIELD.to_owned(), template_id.value().to_string())]
}

pub fn encode_template_ref_params(template: TemplateRef) -> Params {
    match template {
        TemplateRef::User(id) => encode_template_id_params(id),
        TemplateRef::System(id) => vec![("system_template_id".to_owned(), id.to_string())],
    }
}

/// Shared by `getTemplates` and `listTemplates`.
pub fn encode_template_query_params(query: &TemplateQuery) -> Params {
    let mut params = Params::new();
    push_opt(&mut params, "type", query.kind.map(|kind| kind.as_str()));
    push_opt(&mut params, "date_from", query.date_from.as_deref());
    push_opt(&mut params, "date_to", query.date_to.as_deref());
    push_page(&mut params, query.page);
    params
}

pub fn decode_created_template_response(
    json: &str,
) -> Result<ApiResponse<CreatedTemplate>, TransportError> {
    decode_envelope(json, |parsed: CreatedTemplateJson| {
        Ok(CreatedTemplate {
            template_id: TemplateId::new(parsed.template_id.value()),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Page, TemplateKind, TemplateOptions};
    use crate::transport::query::render;

    #[test]
    fn encode_create_template_params() {
        let request = CreateEmailTemplate::new(
            "Welcome",
            "Hello",
            "<p>hi</p>",
            TemplateOptions {
                lang: Some("ru".to_owned()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            render(&encode_create_email_template_params(&request)),
            "title=Welcome&subject=Hello&body=<p>hi</p>&lang=ru"
        );
    }

    #[test]
    fn encode_update_template_only_sends_changes() {
        let changes = UpdateEmailTemplate {
            subject: Some("Hi again".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            render(&encode_update_email_template_params(
                TemplateId::new(3),
                &changes
            )),
            "template_id=3&subject=Hi again"
        );
    }

    #[test]
    fn encode_template_ref_picks_parameter_name() {
        assert_eq!(
            render(&encode_template_ref_params(TemplateRef::User(TemplateId::new(1)))),
            "template_id=1"
        );
        assert_eq!(
            render(&encode_template_ref_params(TemplateRef::System(2))),
            "system_template_id=2"
        );
    }

    #[test]
    fn encode_template_query_with_page() {
        let query = TemplateQuery {
            kind: Some(TemplateKind::User),
            page: Page {
                limit: Some(50),
                offset: Some(100),
            },
            ..Default::default()
        };
        assert_eq!(
            render(&encode_template_query_params(&query)),
            "type=user&limit=50&offset=100"
        );
        assert!(encode_template_query_params(&TemplateQuery::default()).is_empty());
    }

    #[test]
    fn decode_created_template() {
        let created = decode_created_template_response(r#"{ "result": { "template_id": 77 } }"#)
            .unwrap()
            .result;
        assert_eq!(created.template_id, TemplateId::new(77));
    }
}
