use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use super::query::{Params, push, push_bool, push_opt};
use super::scalar::{TransportFlag, TransportNumber};
use crate::domain::{
    ApiResponse, CreateField, Field, FieldId, FieldName, FieldOptions, Tag, TagId, UpdateField,
};

#[derive(Debug, Clone, Deserialize)]
struct FieldJson {
    id: TransportNumber,
    name: String,
    #[serde(rename = "type")]
    field_type: String,
    #[serde(default)]
    is_visible: Option<TransportFlag>,
    #[serde(default)]
    view_pos: Option<TransportNumber>,
}

#[derive(Debug, Clone, Deserialize)]
struct TagJson {
    id: TransportNumber,
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct IdJson {
    id: TransportNumber,
}

fn push_field_options(params: &mut Params, options: &FieldOptions) {
    push_bool(params, "is_visible", options.is_visible);
    push_opt(params, "view_pos", options.view_pos);
}

pub fn encode_create_field_params(request: &CreateField) -> Params {
    let mut params = Params::new();
    push(&mut params, FieldName::FIELD, request.name.as_str());
    push(&mut params, "type", request.field_type.as_str());
    push_field_options(&mut params, &request.options);
    params
}

pub fn encode_update_field_params(request: &UpdateField) -> Params {
    let mut params = Params::new();
    push(&mut params, FieldId::FIELD, request.id.value().to_string());
    push(&mut params, FieldName::FIELD, request.name.as_str());
    push_field_options(&mut params, &request.options);
    params
}

pub fn encode_field_id_params(id: FieldId) -> Params {
    vec![(FieldId::FIELD.to_owned(), id.value().to_string())]
}

pub fn encode_tag_id_params(id: TagId) -> Params {
    vec![(TagId::FIELD.to_owned(), id.value().to_string())]
}

pub fn decode_fields_response(json: &str) -> Result<ApiResponse<Vec<Field>>, TransportError> {
    decode_envelope(json, |fields: Vec<FieldJson>| {
        Ok(fields
            .into_iter()
            .map(|field| Field {
                id: FieldId::new(field.id.value()),
                name: field.name,
                field_type: field.field_type,
                is_visible: field.is_visible.map(TransportFlag::value),
                view_pos: field
                    .view_pos
                    .and_then(|it| u32::try_from(it.value()).ok()),
            })
            .collect())
    })
}

pub fn decode_field_id_response(json: &str) -> Result<ApiResponse<FieldId>, TransportError> {
    decode_envelope(json, |parsed: IdJson| Ok(FieldId::new(parsed.id.value())))
}

pub fn decode_tags_response(json: &str) -> Result<ApiResponse<Vec<Tag>>, TransportError> {
    decode_envelope(json, |tags: Vec<TagJson>| {
        Ok(tags
            .into_iter()
            .map(|tag| Tag {
                id: TagId::new(tag.id.value()),
                name: tag.name,
            })
            .collect())
    })
}
