//! Reseller operations. They are only enabled for partner accounts, and the
//! payloads pass through untyped.

use super::{UnisenderClient, UnisenderError};
use crate::domain::{
    ApiResponse, EmailAddress, Login, Page, Register, TransferMoney, UserLookup,
};
use crate::transport::{self, operation};

type RawResponse = ApiResponse<serde_json::Value>;

impl UnisenderClient {
    pub async fn get_checked_email(&self, login: Option<&Login>) -> Result<RawResponse, UnisenderError> {
        self.send(
            operation::GET_CHECKED_EMAIL,
            transport::encode_checked_email_params(login),
            transport::decode_value_response,
        )
        .await
    }

    /// Ask Unisender to send a confirmation letter to a sender address.
    pub async fn validate_sender(
        &self,
        email: &EmailAddress,
        login: Option<&Login>,
    ) -> Result<RawResponse, UnisenderError> {
        self.send(
            operation::VALIDATE_SENDER,
            transport::encode_validate_sender_params(email, login),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn register(&self, request: &Register) -> Result<RawResponse, UnisenderError> {
        self.send(
            operation::REGISTER,
            transport::encode_register_params(request),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn check_user_exists(&self, lookup: &UserLookup) -> Result<RawResponse, UnisenderError> {
        self.send(
            operation::CHECK_USER_EXISTS,
            transport::encode_user_lookup_params(lookup),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn get_user_info(&self, login: &Login) -> Result<RawResponse, UnisenderError> {
        self.send(
            operation::GET_USER_INFO,
            transport::encode_user_info_params(login),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn get_users(&self, page: Page) -> Result<RawResponse, UnisenderError> {
        self.send(
            operation::GET_USERS,
            transport::encode_users_params(page),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn transfer_money(&self, request: &TransferMoney) -> Result<RawResponse, UnisenderError> {
        self.send(
            operation::TRANSFER_MONEY,
            transport::encode_transfer_money_params(request),
            transport::decode_value_response,
        )
        .await
    }

    pub async fn set_sender_domain(
        &self,
        username: &Login,
        domain: &str,
    ) -> Result<RawResponse, UnisenderError> {
        self.send(
            operation::SET_SENDER_DOMAIN,
            transport::encode_sender_domain_params(username, domain),
            transport::decode_value_response,
        )
        .await
    }
}
