//! Transport layer: operation names, query encoding and envelope decoding.

mod envelope;
mod fields;
mod lists;
mod messages;
pub mod operation;
mod partners;
mod query;
mod scalar;
mod stats;
mod task;
mod templates;

pub use envelope::{TransportError, decode_empty_response, decode_value_response};
pub use fields::{
    decode_field_id_response, decode_fields_response, decode_tags_response,
    encode_create_field_params, encode_field_id_params, encode_tag_id_params,
    encode_update_field_params,
};
pub use lists::{
    decode_count_response, decode_import_response, decode_list_id_response,
    decode_lists_response, decode_person_id_response, decode_total_response,
    encode_contact_count_params, encode_create_list_params, encode_export_contacts_params,
    encode_get_contact_params, encode_import_contacts_params, encode_list_id_params,
    encode_remove_contact_params, encode_subscribe_params, encode_total_contacts_count_params,
    encode_update_list_params,
};
pub use messages::{
    decode_created_campaign_response, decode_message_id_response,
    decode_message_version_response, decode_sent_sms_response, decode_web_version_response,
    encode_campaign_id_params, encode_check_email_params, encode_check_sms_params,
    encode_create_campaign_params, encode_create_email_message_params,
    encode_create_sms_message_params, encode_message_id_params, encode_send_email_params,
    encode_send_sms_params, encode_send_test_email_params, encode_update_email_message_params,
    encode_update_opt_in_email_params,
};
pub use partners::{
    encode_checked_email_params, encode_register_params, encode_sender_domain_params,
    encode_transfer_money_params, encode_user_info_params, encode_user_lookup_params,
    encode_users_params, encode_validate_sender_params,
};
pub use query::Params;
pub use stats::{
    decode_campaign_status_response, encode_campaign_query_params, encode_delivery_stats_params,
    encode_get_message_params, encode_message_query_params, encode_visited_links_params,
};
pub use task::{
    TaskSubmission, decode_task_response, decode_task_submission, encode_task_result_params,
};
pub use templates::{
    decode_created_template_response, encode_create_email_template_params,
    encode_template_id_params, encode_template_query_params, encode_template_ref_params,
    encode_update_email_template_params,
};
