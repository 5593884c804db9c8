use super::{UnisenderClient, UnisenderError};
use crate::domain::{
    ApiResponse, CampaignId, CreateCampaign, CreateEmailMessage, CreateSmsMessage,
    CreatedCampaign, MessageId, MessageVersion, SendEmail, SendSms, SendTestEmail, SentSms,
    SmsId, UpdateEmailMessage, UpdateOptInEmail, WebVersion,
};
use crate::transport::{self, operation};

impl UnisenderClient {
    pub async fn create_email_message(
        &self,
        request: &CreateEmailMessage,
    ) -> Result<ApiResponse<MessageId>, UnisenderError> {
        self.send(
            operation::CREATE_EMAIL_MESSAGE,
            transport::encode_create_email_message_params(request),
            transport::decode_message_id_response,
        )
        .await
    }

    pub async fn create_sms_message(
        &self,
        request: &CreateSmsMessage,
    ) -> Result<ApiResponse<MessageId>, UnisenderError> {
        self.send(
            operation::CREATE_SMS_MESSAGE,
            transport::encode_create_sms_message_params(request),
            transport::decode_message_id_response,
        )
        .await
    }

    /// Schedule (or immediately start) a campaign for an existing message.
    pub async fn create_campaign(
        &self,
        request: &CreateCampaign,
    ) -> Result<ApiResponse<CreatedCampaign>, UnisenderError> {
        self.send(
            operation::CREATE_CAMPAIGN,
            transport::encode_create_campaign_params(request),
            transport::decode_created_campaign_response,
        )
        .await
    }

    pub async fn cancel_campaign(
        &self,
        campaign_id: CampaignId,
    ) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::CANCEL_CAMPAIGN,
            transport::encode_campaign_id_params(campaign_id),
            transport::decode_empty_response,
        )
        .await
    }

    pub async fn get_actual_message_version(
        &self,
        message_id: MessageId,
    ) -> Result<ApiResponse<MessageVersion>, UnisenderError> {
        self.send(
            operation::GET_ACTUAL_MESSAGE_VERSION,
            transport::encode_message_id_params(message_id),
            transport::decode_message_version_response,
        )
        .await
    }

    /// Send one SMS text to up to 150 recipients.
    pub async fn send_sms(&self, request: &SendSms) -> Result<ApiResponse<SentSms>, UnisenderError> {
        self.send(
            operation::SEND_SMS,
            transport::encode_send_sms_params(request),
            transport::decode_sent_sms_response,
        )
        .await
    }

    pub async fn check_sms(
        &self,
        sms_id: &SmsId,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::CHECK_SMS,
            transport::encode_check_sms_params(sms_id),
            transport::decode_value_response,
        )
        .await
    }

    /// Send a single transactional email. The result lists per-recipient ids.
    pub async fn send_email(
        &self,
        request: &SendEmail,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::SEND_EMAIL,
            transport::encode_send_email_params(request),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn send_test_email(
        &self,
        request: &SendTestEmail,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::SEND_TEST_EMAIL,
            transport::encode_send_test_email_params(request),
            transport::decode_value_response,
        )
        .await
    }

    /// Delivery status for ids previously returned by `sendEmail`.
    pub async fn check_email(
        &self,
        email_ids: &[String],
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::CHECK_EMAIL,
            transport::encode_check_email_params(email_ids),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn update_opt_in_email(
        &self,
        request: &UpdateOptInEmail,
    ) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::UPDATE_OPT_IN_EMAIL,
            transport::encode_update_opt_in_email_params(request),
            transport::decode_empty_response,
        )
        .await
    }

    pub async fn get_web_version(
        &self,
        campaign_id: CampaignId,
    ) -> Result<ApiResponse<WebVersion>, UnisenderError> {
        self.send(
            operation::GET_WEB_VERSION,
            transport::encode_campaign_id_params(campaign_id),
            transport::decode_web_version_response,
        )
        .await
    }

    pub async fn delete_message(
        &self,
        message_id: MessageId,
    ) -> Result<ApiResponse<()>, UnisenderError> {
        self.send(
            operation::DELETE_MESSAGE,
            transport::encode_message_id_params(message_id),
            transport::decode_empty_response,
        )
        .await
    }

    /// Only the fields set in `changes` are sent.
    pub async fn update_email_message(
        &self,
        message_id: MessageId,
        changes: &UpdateEmailMessage,
    ) -> Result<ApiResponse<serde_json::Value>, UnisenderError> {
        self.send(
            operation::UPDATE_EMAIL_MESSAGE,
            transport::encode_update_email_message_params(message_id, changes),
            transport::decode_value_response,
        )
        .await
    }
}
