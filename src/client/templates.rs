use super::{UnisenderClient, UnisenderError};
use crate::domain::{
    ApiResponse, CreateEmailTemplate, CreatedTemplate, TemplateId, TemplateQuery, TemplateRef,
    UpdateEmailTemplate,
};
use crate::transport::{self, operation};

impl UnisenderClient {
    pub async fn create_email_template(
        &self,
        request: &CreateEmailTemplate,
    ) -> Result<ApiResponse<CreatedTemplate>, UnisenderError> {
        self.send(
            operation::CREATE_EMAIL_TEMPLATE,
            transport::encode_create_email_template_params(request),
            transport::decode_created_template_response,
        )
        .await
    }

    pub async fn update_email_template(
        &self,
        template_id: TemplateId,
        changes: &UpdateEmailTemplate,
    ) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::UPDATE_EMAIL_TEMPLATE,
            transport::encode_update_email_template_params(template_id, changes),
            transport::decode_empty_response,
        )
        .await
    }

    pub async fn delete_template(
        &self,
        template_id: TemplateId,
    ) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::DELETE_TEMPLATE,
            transport::encode_template_id_params(template_id),
            transport::decode_empty_response,
        )
        .await
    }

    /// Fetch a user template or one of Unisender's system templates.
    pub async fn get_template(
        &self,
        template: TemplateRef,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::GET_TEMPLATE,
            transport::encode_template_ref_params(template),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn get_templates(
        &self,
        query: &TemplateQuery,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::GET_TEMPLATES,
            transport::encode_template_query_params(query),
            transport::decode_value_response,
        )
        .await
    }

    /// Like [`UnisenderClient::get_templates`] without template bodies.
    pub async fn list_templates(
        &self,
        query: &TemplateQuery,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::LIST_TEMPLATES,
            transport::encode_template_query_params(query),
            transport::decode_value_response,
        )
        .await
    }
}
