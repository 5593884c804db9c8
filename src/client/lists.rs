use super::{UnisenderClient, UnisenderError};
use crate::domain::{
    ApiResponse, CreateList, GetContact, GetContactCount, ImportContacts, ImportSummary, List,
    ListId, Login, RemoveContact, Subscribe, UpdateList,
};
use crate::transport::{self, Params, operation};

impl UnisenderClient {
    pub async fn get_lists(&self) -> Result<ApiResponse<Vec<List>>, UnisenderError> {
        self.send(
            operation::GET_LISTS,
            Params::new(),
            transport::decode_lists_response,
        )
        .await
    }

    /// Create a list and return its id.
    pub async fn create_list(
        &self,
        request: &CreateList,
    ) -> Result<ApiResponse<ListId>, UnisenderError> {
        self.send(
            operation::CREATE_LIST,
            transport::encode_create_list_params(request),
            transport::decode_list_id_response,
        )
        .await
    }

    pub async fn update_list(&self, request: &UpdateList) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::UPDATE_LIST,
            transport::encode_update_list_params(request),
            transport::decode_empty_response,
        )
        .await
    }

    pub async fn delete_list(&self, list_id: ListId) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::DELETE_LIST,
            transport::encode_list_id_params(list_id),
            transport::decode_empty_response,
        )
        .await
    }

    /// Add a contact to one or more lists; returns the contact's `person_id`.
    pub async fn subscribe(&self, request: &Subscribe) -> Result<ApiResponse<u64>, UnisenderError> {
        self.send(
            operation::SUBSCRIBE,
            transport::encode_subscribe_params(request),
            transport::decode_person_id_response,
        )
        .await
    }

    /// Remove a contact from lists. Unlike [`UnisenderClient::unsubscribe`],
    /// the contact can be subscribed again later.
    pub async fn exclude(&self, request: &RemoveContact) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::EXCLUDE,
            transport::encode_remove_contact_params(request),
            transport::decode_empty_response,
        )
        .await
    }

    pub async fn unsubscribe(
        &self,
        request: &RemoveContact,
    ) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::UNSUBSCRIBE,
            transport::encode_remove_contact_params(request),
            transport::decode_empty_response,
        )
        .await
    }

    /// Bulk import up to 10 000 rows per call.
    pub async fn import_contacts(
        &self,
        request: &ImportContacts,
    ) -> Result<ApiResponse<ImportSummary>, UnisenderError> {
        self.send(
            operation::IMPORT_CONTACTS,
            transport::encode_import_contacts_params(request),
            transport::decode_import_response,
        )
        .await
    }

    pub async fn get_total_contacts_count(
        &self,
        login: &Login,
    ) -> Result<ApiResponse<u64>, UnisenderError> {
        self.send(
            operation::GET_TOTAL_CONTACTS_COUNT,
            transport::encode_total_contacts_count_params(login),
            transport::decode_total_response,
        )
        .await
    }

    pub async fn get_contact_count(
        &self,
        request: &GetContactCount,
    ) -> Result<ApiResponse<u64>, UnisenderError> {
        self.send(
            operation::GET_CONTACT_COUNT,
            transport::encode_contact_count_params(request),
            transport::decode_count_response,
        )
        .await
    }

    /// Contact details; the payload shape depends on the `include_*` flags.
    pub async fn get_contact(
        &self,
        request: &GetContact,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::GET_CONTACT,
            transport::encode_get_contact_params(request),
            transport::decode_value_response,
        )
        .await
    }
}
