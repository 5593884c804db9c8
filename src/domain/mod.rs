//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    Attachment, CampaignDeliveryStats, CampaignOptions, CampaignQuery, ContactCountOptions,
    CreateCampaign, CreateEmailMessage, CreateEmailTemplate, CreateField, CreateList,
    CreateSmsMessage, DoubleOptin, EmailMessageOptions, ExportContacts, FieldOptions,
    GetContact, GetContactCount, GetContactOptions, IMPORT_CONTACTS_MAX_ROWS, ImportContacts,
    ImportOptions, ListOptions, MessageQuery, Overwrite, Page, Register, RegisterOptions,
    RemoveContact, SEND_SMS_MAX_PHONES, SendEmail, SendEmailOptions, SendSms, SendTestEmail,
    Subscribe, SubscribeOptions, TemplateKind, TemplateOptions, TemplateQuery, TemplateRef,
    TransferMoney, UpdateEmailMessage, UpdateEmailTemplate, UpdateField, UpdateList,
    UpdateOptInEmail, UserLookup,
};
pub use response::{
    ApiResponse, CampaignStatus, CreatedCampaign, CreatedTemplate, ExportTask, ExportedFile,
    Field, ImportSummary, List, MessageVersion, SentSms, Tag, WebVersion,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, CampaignId, ContactType, EmailAddress, FieldId, FieldName, FieldType, ListId, Login,
    MessageId, Password, PhoneNumber, RawPhoneNumber, SmsId, TagId, TaskStatus, TaskUuid,
    TemplateId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RU), " 79251234567 ").unwrap();
        assert_eq!(pn.raw(), "79251234567");
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+79251234567");
    }

    #[test]
    fn remove_contact_constructors_set_contact_type() {
        let by_email = RemoveContact::email(EmailAddress::new("a@x.com").unwrap(), vec![]);
        assert_eq!(by_email.contact_type, ContactType::Email);
        assert_eq!(by_email.contact, "a@x.com");

        let by_phone = RemoveContact::phone(
            RawPhoneNumber::new("79251234567").unwrap(),
            vec![ListId::new(1)],
        );
        assert_eq!(by_phone.contact_type, ContactType::Phone);
        assert_eq!(by_phone.list_ids, vec![ListId::new(1)]);
    }

    #[test]
    fn api_response_unwraps_result() {
        let response = ApiResponse {
            result: ListId::new(7),
            warnings: Vec::new(),
        };
        assert_eq!(response.into_result(), ListId::new(7));
    }
}
