use super::{UnisenderClient, UnisenderError};
use crate::domain::{ApiResponse, CreateField, Field, FieldId, Tag, TagId, UpdateField};
use crate::transport::{self, Params, operation};

impl UnisenderClient {
    /// Additional contact fields defined on the account.
    pub async fn get_fields(&self) -> Result<ApiResponse<Vec<Field>>, UnisenderError> {
        self.send(
            operation::GET_FIELDS,
            Params::new(),
            transport::decode_fields_response,
        )
        .await
    }

    pub async fn create_field(
        &self,
        request: &CreateField,
    ) -> Result<ApiResponse<FieldId>, UnisenderError> {
        self.send(
            operation::CREATE_FIELD,
            transport::encode_create_field_params(request),
            transport::decode_field_id_response,
        )
        .await
    }

    pub async fn update_field(
        &self,
        request: &UpdateField,
    ) -> Result<ApiResponse<FieldId>, UnisenderError> {
        self.send(
            operation::UPDATE_FIELD,
            transport::encode_update_field_params(request),
            transport::decode_field_id_response,
        )
        .await
    }

    pub async fn delete_field(&self, id: FieldId) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::DELETE_FIELD,
            transport::encode_field_id_params(id),
            transport::decode_empty_response,
        )
        .await
    }

    pub async fn get_tags(&self) -> Result<ApiResponse<Vec<Tag>>, UnisenderError> {
        self.send(
            operation::GET_TAGS,
            Params::new(),
            transport::decode_tags_response,
        )
        .await
    }

    pub async fn delete_tag(&self, id: TagId) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::DELETE_TAG,
            transport::encode_tag_id_params(id),
            transport::decode_empty_response,
        )
        .await
    }
}
