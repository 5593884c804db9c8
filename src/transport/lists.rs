use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use super::query::{
    Params, push, push_flag, push_indexed, push_joined, push_keyed, push_matrix, push_opt,
};
use super::scalar::TransportNumber;
use crate::domain::{
    ApiResponse, ContactType, CreateList, EmailAddress, ExportContacts, FieldName, GetContact,
    GetContactCount, ImportContacts, ImportSummary, List, ListId, ListOptions, Login,
    RawPhoneNumber, RemoveContact, Subscribe, UpdateList,
};

#[derive(Debug, Clone, Deserialize)]
struct ListJson {
    id: TransportNumber,
    title: String,
}

#[derive(Debug, Clone, Deserialize)]
struct IdJson {
    id: TransportNumber,
}

#[derive(Debug, Clone, Deserialize)]
struct PersonJson {
    person_id: TransportNumber,
}

#[derive(Debug, Clone, Deserialize)]
struct TotalJson {
    total: TransportNumber,
}

#[derive(Debug, Clone, Deserialize)]
struct CountJson {
    count: TransportNumber,
}

#[derive(Debug, Clone, Deserialize)]
struct ImportJson {
    #[serde(default)]
    total: Option<TransportNumber>,
    #[serde(default)]
    inserted: Option<TransportNumber>,
    #[serde(default)]
    updated: Option<TransportNumber>,
    #[serde(default)]
    deleted: Option<TransportNumber>,
    #[serde(default)]
    new_emails: Option<TransportNumber>,
    #[serde(default)]
    invalid: Option<TransportNumber>,
    #[serde(default)]
    log: Vec<serde_json::Value>,
}

fn push_list_options(params: &mut Params, options: &ListOptions) {
    push_opt(
        params,
        "after_subscribe_url",
        options.after_subscribe_url.as_deref(),
    );
    push_opt(
        params,
        "before_subscribe_url",
        options.before_subscribe_url.as_deref(),
    );
}

pub fn encode_create_list_params(request: &CreateList) -> Params {
    let mut params = Params::new();
    push(&mut params, "title", request.title());
    push_list_options(&mut params, request.options());
    params
}

pub fn encode_update_list_params(request: &UpdateList) -> Params {
    let mut params = Params::new();
    push(&mut params, ListId::FIELD, request.list_id().value().to_string());
    push(&mut params, "title", request.title());
    push_list_options(&mut params, request.options());
    params
}

pub fn encode_list_id_params(list_id: ListId) -> Params {
    vec![(ListId::FIELD.to_owned(), list_id.value().to_string())]
}

pub fn encode_subscribe_params(request: &Subscribe) -> Params {
    let mut params = Params::new();
    push_joined(
        &mut params,
        "list_ids",
        request.list_ids().iter().map(|id| id.value().to_string()),
    );
    push_keyed(
        &mut params,
        "fields",
        request
            .fields()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );
    let options = request.options();
    push_joined(&mut params, "tags", &options.tags);
    push_opt(
        &mut params,
        "double_optin",
        options.double_optin.map(|it| it.as_code()),
    );
    push_opt(
        &mut params,
        "overwrite",
        options.overwrite.map(|it| it.as_code()),
    );
    params
}

/// Shared by `exclude` and `unsubscribe`.
pub fn encode_remove_contact_params(request: &RemoveContact) -> Params {
    let mut params = Params::new();
    push(&mut params, "contact_type", request.contact_type.as_str());
    push(&mut params, "contact", request.contact.as_str());
    push_joined(
        &mut params,
        "list_ids",
        request.list_ids.iter().map(|id| id.value().to_string()),
    );
    params
}

pub fn encode_import_contacts_params(request: &ImportContacts) -> Params {
    let mut params = Params::new();
    push_indexed(
        &mut params,
        "field_names",
        request.field_names().iter().map(FieldName::as_str),
    );
    push_matrix(&mut params, "data", request.data());
    push_flag(&mut params, "overwrite_tags", request.options().overwrite_tags);
    push_flag(
        &mut params,
        "overwrite_lists",
        request.options().overwrite_lists,
    );
    params
}

pub fn encode_export_contacts_params(request: &ExportContacts) -> Params {
    let mut params = Params::new();
    push_opt(&mut params, "notify_url", request.notify_url.as_deref());
    push_opt(
        &mut params,
        ListId::FIELD,
        request.list_id.map(ListId::value),
    );
    push_indexed(
        &mut params,
        "field_names",
        request.field_names.iter().map(FieldName::as_str),
    );
    push_opt(
        &mut params,
        EmailAddress::FIELD,
        request.email.as_ref().map(EmailAddress::as_str),
    );
    push_opt(
        &mut params,
        RawPhoneNumber::FIELD,
        request.phone.as_ref().map(RawPhoneNumber::raw),
    );
    push_opt(&mut params, "tag", request.tag.as_deref());
    push_opt(&mut params, "email_status", request.email_status.as_deref());
    push_opt(&mut params, "phone_status", request.phone_status.as_deref());
    params
}

pub fn encode_total_contacts_count_params(login: &Login) -> Params {
    vec![(Login::FIELD.to_owned(), login.as_str().to_owned())]
}

pub fn encode_contact_count_params(request: &GetContactCount) -> Params {
    let mut params = Params::new();
    push(&mut params, ListId::FIELD, request.list_id.value().to_string());
    let options = &request.options;
    push_opt(
        &mut params,
        "params[tagId]",
        options.tag_id.map(|id| id.value()),
    );
    push_opt(
        &mut params,
        "params[type]",
        options.contact_type.map(|kind| match kind {
            ContactType::Email => "address",
            ContactType::Phone => "phone",
        }),
    );
    push_opt(&mut params, "params[search]", options.search.as_deref());
    params
}

pub fn encode_get_contact_params(request: &GetContact) -> Params {
    let mut params = Params::new();
    push(&mut params, EmailAddress::FIELD, request.email.as_str());
    push_flag(&mut params, "include_lists", request.options.include_lists);
    push_flag(&mut params, "include_fields", request.options.include_fields);
    push_flag(&mut params, "include_details", request.options.include_details);
    params
}

pub fn decode_lists_response(json: &str) -> Result<ApiResponse<Vec<List>>, TransportError> {
    decode_envelope(json, |lists: Vec<ListJson>| {
        Ok(lists
            .into_iter()
            .map(|list| List {
                id: ListId::new(list.id.value()),
                title: list.title,
            })
            .collect())
    })
}

pub fn decode_list_id_response(json: &str) -> Result<ApiResponse<ListId>, TransportError> {
    decode_envelope(json, |parsed: IdJson| Ok(ListId::new(parsed.id.value())))
}

/// `subscribe` returns the contact's `person_id`.
pub fn decode_person_id_response(json: &str) -> Result<ApiResponse<u64>, TransportError> {
    decode_envelope(json, |parsed: PersonJson| Ok(parsed.person_id.value()))
}

pub fn decode_import_response(json: &str) -> Result<ApiResponse<ImportSummary>, TransportError> {
    decode_envelope(json, |parsed: ImportJson| {
        let count = |value: Option<TransportNumber>| value.map_or(0, TransportNumber::value);
        Ok(ImportSummary {
            total: count(parsed.total),
            inserted: count(parsed.inserted),
            updated: count(parsed.updated),
            deleted: count(parsed.deleted),
            new_emails: count(parsed.new_emails),
            invalid: count(parsed.invalid),
            log: parsed.log,
        })
    })
}

pub fn decode_total_response(json: &str) -> Result<ApiResponse<u64>, TransportError> {
    decode_envelope(json, |parsed: TotalJson| Ok(parsed.total.value()))
}

pub fn decode_count_response(json: &str) -> Result<ApiResponse<u64>, TransportError> {
    decode_envelope(json, |parsed: CountJson| Ok(parsed.count.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ContactCountOptions, DoubleOptin, GetContactOptions, ImportOptions, Overwrite,
        SubscribeOptions, TagId,
    };
    use crate::transport::query::render;

    fn names(values: &[&str]) -> Vec<FieldName> {
        values
            .iter()
            .map(|value| FieldName::new(*value).unwrap())
            .collect()
    }

    #[test]
    fn encode_create_list_skips_absent_urls() {
        let request = CreateList::new("Newsletter", ListOptions::default()).unwrap();
        assert_eq!(
            encode_create_list_params(&request),
            vec![("title".to_owned(), "Newsletter".to_owned())]
        );
    }

    #[test]
    fn encode_update_list_appends_present_urls_once() {
        let request = UpdateList::new(
            ListId::new(679),
            "Newsletter",
            ListOptions {
                after_subscribe_url: Some("https://x/after".to_owned()),
                before_subscribe_url: Some("https://x/before".to_owned()),
            },
        )
        .unwrap();
        assert_eq!(
            render(&encode_update_list_params(&request)),
            "list_id=679&title=Newsletter&after_subscribe_url=https://x/after&before_subscribe_url=https://x/before"
        );
    }

    #[test]
    fn encode_subscribe_params_with_options() {
        let request = Subscribe::email(
            vec![ListId::new(679), ListId::new(680)],
            EmailAddress::new("a@x.com").unwrap(),
            Some("Andrey".to_owned()),
            SubscribeOptions {
                tags: vec!["vip".to_owned(), "new".to_owned()],
                double_optin: Some(DoubleOptin::SendConfirmation),
                overwrite: Some(Overwrite::ReplaceGiven),
            },
        )
        .unwrap();
        assert_eq!(
            render(&encode_subscribe_params(&request)),
            "list_ids=679,680&fields[email]=a@x.com&fields[Name]=Andrey&tags=vip,new&double_optin=0&overwrite=2"
        );
    }

    #[test]
    fn encode_remove_contact_omits_empty_list_ids() {
        let request = RemoveContact::email(EmailAddress::new("a@x.com").unwrap(), vec![]);
        assert_eq!(
            render(&encode_remove_contact_params(&request)),
            "contact_type=email&contact=a@x.com"
        );
    }

    #[test]
    fn encode_import_contacts_uses_bracketed_indices() {
        let request = ImportContacts::new(
            names(&["email", "Name"]),
            vec![
                vec!["a@x.com".to_owned(), "A".to_owned()],
                vec!["b@y.com".to_owned(), "B".to_owned()],
            ],
            ImportOptions::default(),
        )
        .unwrap();
        assert_eq!(
            render(&encode_import_contacts_params(&request)),
            "field_names[0]=email&field_names[1]=Name&data[0][0]=a@x.com&data[0][1]=A&data[1][0]=b@y.com&data[1][1]=B"
        );
    }

    #[test]
    fn encode_import_contacts_appends_flags_last() {
        let request = ImportContacts::new(
            names(&["email"]),
            vec![vec!["a@x.com".to_owned()]],
            ImportOptions {
                overwrite_tags: true,
                overwrite_lists: true,
            },
        )
        .unwrap();
        let params = encode_import_contacts_params(&request);
        assert_eq!(
            params[params.len() - 2..],
            [
                ("overwrite_tags".to_owned(), "1".to_owned()),
                ("overwrite_lists".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_export_contacts_only_includes_present_filters() {
        assert!(encode_export_contacts_params(&ExportContacts::default()).is_empty());

        let request = ExportContacts {
            list_id: Some(ListId::new(679)),
            field_names: names(&["email", "Name"]),
            tag: Some("vip".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            render(&encode_export_contacts_params(&request)),
            "list_id=679&field_names[0]=email&field_names[1]=Name&tag=vip"
        );
    }

    #[test]
    fn encode_contact_count_nests_filters_under_params() {
        let request = GetContactCount {
            list_id: ListId::new(679),
            options: ContactCountOptions {
                tag_id: Some(TagId::new(5)),
                contact_type: Some(ContactType::Email),
                search: Some("gmail".to_owned()),
            },
        };
        assert_eq!(
            render(&encode_contact_count_params(&request)),
            "list_id=679&params[tagId]=5&params[type]=address&params[search]=gmail"
        );
    }

    #[test]
    fn encode_get_contact_flags() {
        let request = GetContact {
            email: EmailAddress::new("a@x.com").unwrap(),
            options: GetContactOptions {
                include_lists: true,
                include_fields: false,
                include_details: true,
            },
        };
        assert_eq!(
            render(&encode_get_contact_params(&request)),
            "email=a@x.com&include_lists=1&include_details=1"
        );
    }

    #[test]
    fn decode_lists_accepts_string_and_numeric_ids() {
        let json = r#"{ "result": [ { "id": 679, "title": "A" }, { "id": "680", "title": "B" } ] }"#;
        let response = decode_lists_response(json).unwrap();
        assert_eq!(
            response.result,
            vec![
                List {
                    id: ListId::new(679),
                    title: "A".to_owned()
                },
                List {
                    id: ListId::new(680),
                    title: "B".to_owned()
                },
            ]
        );
    }

    #[test]
    fn decode_import_summary_defaults_missing_counters() {
        let json = r#"
        {
          "result": {
            "total": 2,
            "inserted": 1,
            "updated": "1",
            "invalid": 0,
            "log": []
          }
        }
        "#;
        let summary = decode_import_response(json).unwrap().result;
        assert_eq!(summary.total, 2);
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.deleted, 0);
        assert_eq!(summary.new_emails, 0);
    }

    #[test]
    fn decode_ids_and_counts() {
        assert_eq!(
            decode_list_id_response(r#"{ "result": { "id": 7 } }"#)
                .unwrap()
                .result,
            ListId::new(7)
        );
        assert_eq!(
            decode_person_id_response(r#"{ "result": { "person_id": 99 } }"#)
                .unwrap()
                .result,
            99
        );
        assert_eq!(
            decode_total_response(r#"{ "result": { "total": 12 } }"#)
                .unwrap()
                .result,
            12
        );
        assert_eq!(
            decode_count_response(r#"{ "result": { "count": 3 } }"#)
                .unwrap()
                .result,
            3
        );
    }

    #[test]
    fn decode_list_id_rejects_missing_id() {
        assert!(matches!(
            decode_list_id_response(r#"{ "result": {} }"#).unwrap_err(),
            TransportError::Json(_)
        ));
    }
}
