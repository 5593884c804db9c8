//! Partner (reseller) operations. Every response passes through as raw JSON.

use super::query::{Params, push, push_flag, push_keyed, push_opt, push_page};
use crate::domain::{EmailAddress, Login, Page, Password, Register, TransferMoney, UserLookup};

pub fn encode_checked_email_params(login: Option<&Login>) -> Params {
    let mut params = Params::new();
    push_opt(&mut params, Login::FIELD, login.map(Login::as_str));
    params
}

pub fn encode_validate_sender_params(email: &EmailAddress, login: Option<&Login>) -> Params {
    let mut params = Params::new();
    push(&mut params, EmailAddress::FIELD, email.as_str());
    push_opt(&mut params, Login::FIELD, login.map(Login::as_str));
    params
}

pub fn encode_register_params(request: &Register) -> Params {
    let mut params = Params::new();
    push(&mut params, EmailAddress::FIELD, request.email.as_str());
    push(&mut params, Login::FIELD, request.login.as_str());
    push(&mut params, Password::FIELD, request.password.as_str());
    let options = &request.options;
    push_flag(&mut params, "notify", options.notify);
    push_flag(&mut params, "api_mode", options.api_mode);
    push_opt(&mut params, "timezone", options.timezone.as_deref());
    push_opt(&mut params, "country_code", options.country_code.as_deref());
    push_keyed(
        &mut params,
        "extra",
        options
            .extra
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );
    params
}

pub fn encode_user_lookup_params(lookup: &UserLookup) -> Params {
    match lookup {
        UserLookup::Login(login) => vec![(Login::FIELD.to_owned(), login.as_str().to_owned())],
        UserLookup::Email(email) => {
            vec![(EmailAddress::FIELD.to_owned(), email.as_str().to_owned())]
        }
    }
}

pub fn encode_user_info_params(login: &Login) -> Params {
    vec![(Login::FIELD.to_owned(), login.as_str().to_owned())]
}

pub fn encode_users_params(page: Page) -> Params {
    let mut params = Params::new();
    push_page(&mut params, page);
    params
}

pub fn encode_transfer_money_params(request: &TransferMoney) -> Params {
    let mut params = Params::new();
    push(
        &mut params,
        "source_client_id",
        request.source_client_id.to_string(),
    );
    push(
        &mut params,
        "target_client_id",
        request.target_client_id.to_string(),
    );
    push(&mut params, "sum", request.sum.as_str());
    push(&mut params, "currency", request.currency.as_str());
    params
}

pub fn encode_sender_domain_params(username: &Login, domain: &str) -> Params {
    let mut params = Params::new();
    push(&mut params, "username", username.as_str());
    push(&mut params, "domain", domain);
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegisterOptions;
    use crate::transport::query::render;

    fn login() -> Login {
        Login::new("shop").unwrap()
    }

    #[test]
    fn encode_optional_login() {
        assert!(encode_checked_email_params(None).is_empty());
        assert_eq!(
            render(&encode_checked_email_params(Some(&login()))),
            "login=shop"
        );
        assert_eq!(
            render(&encode_validate_sender_params(
                &EmailAddress::new("news@shop.com").unwrap(),
                None
            )),
            "email=news@shop.com"
        );
    }

    #[test]
    fn encode_register_with_options() {
        let request = Register {
            email: EmailAddress::new("owner@shop.com").unwrap(),
            login: login(),
            password: Password::new("s3cret").unwrap(),
            options: RegisterOptions {
                notify: true,
                timezone: Some("UTC".to_owned()),
                extra: vec![("company".to_owned(), "Shop".to_owned())],
                ..Default::default()
            },
        };
        assert_eq!(
            render(&encode_register_params(&request)),
            "email=owner@shop.com&login=shop&password=s3cret&notify=1&timezone=UTC&extra[company]=Shop"
        );
    }

    #[test]
    fn encode_user_lookup_by_either_key() {
        assert_eq!(
            render(&encode_user_lookup_params(&UserLookup::Login(login()))),
            "login=shop"
        );
        assert_eq!(
            render(&encode_user_lookup_params(&UserLookup::Email(
                EmailAddress::new("a@x.com").unwrap()
            ))),
            "email=a@x.com"
        );
        assert_eq!(render(&encode_user_info_params(&login())), "login=shop");
        assert!(encode_users_params(Page::default()).is_empty());
    }

    #[test]
    fn encode_transfer_and_domain() {
        let request = TransferMoney {
            source_client_id: 1,
            target_client_id: 2,
            sum: "10.50".to_owned(),
            currency: "RUB".to_owned(),
        };
        assert_eq!(
            render(&encode_transfer_money_params(&request)),
            "source_client_id=1&target_client_id=2&sum=10.50&currency=RUB"
        );
        assert_eq!(
            render(&encode_sender_domain_params(&login(), "shop.com")),
            "username=shop&domain=shop.com"
        );
    }
}
