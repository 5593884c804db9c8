//! Unisender operation names, appended to the base URL.

// Contact lists
pub const GET_LISTS: &str = "getLists";
pub const CREATE_LIST: &str = "createList";
pub const UPDATE_LIST: &str = "updateList";
pub const DELETE_LIST: &str = "deleteList";
pub const SUBSCRIBE: &str = "subscribe";
pub const EXCLUDE: &str = "exclude";
pub const UNSUBSCRIBE: &str = "unsubscribe";
pub const IMPORT_CONTACTS: &str = "importContacts";
pub const EXPORT_CONTACTS: &str = "exportContacts";
pub const GET_TOTAL_CONTACTS_COUNT: &str = "getTotalContactsCount";
pub const GET_CONTACT_COUNT: &str = "getContactCount";
pub const GET_CONTACT: &str = "getContact";

// Additional fields and tags
pub const GET_FIELDS: &str = "getFields";
pub const CREATE_FIELD: &str = "createField";
pub const UPDATE_FIELD: &str = "updateField";
pub const DELETE_FIELD: &str = "deleteField";
pub const GET_TAGS: &str = "getTags";
pub const DELETE_TAG: &str = "deleteTag";

// Messages and campaigns
pub const CREATE_EMAIL_MESSAGE: &str = "createEmailMessage";
pub const CREATE_SMS_MESSAGE: &str = "createSmsMessage";
pub const CREATE_CAMPAIGN: &str = "createCampaign";
pub const CANCEL_CAMPAIGN: &str = "cancelCampaign";
pub const GET_ACTUAL_MESSAGE_VERSION: &str = "getActualMessageVersion";
pub const SEND_SMS: &str = "sendSms";
pub const CHECK_SMS: &str = "checkSms";
pub const SEND_EMAIL: &str = "sendEmail";
pub const SEND_TEST_EMAIL: &str = "sendTestEmail";
pub const CHECK_EMAIL: &str = "checkEmail";
pub const UPDATE_OPT_IN_EMAIL: &str = "updateOptInEmail";
pub const GET_WEB_VERSION: &str = "getWebVersion";
pub const DELETE_MESSAGE: &str = "deleteMessage";
pub const UPDATE_EMAIL_MESSAGE: &str = "updateEmailMessage";

// Templates
pub const CREATE_EMAIL_TEMPLATE: &str = "createEmailTemplate";
pub const UPDATE_EMAIL_TEMPLATE: &str = "updateEmailTemplate";
pub const DELETE_TEMPLATE: &str = "deleteTemplate";
pub const GET_TEMPLATE: &str = "getTemplate";
pub const GET_TEMPLATES: &str = "getTemplates";
pub const LIST_TEMPLATES: &str = "listTemplates";

// Statistics
pub const GET_CAMPAIGN_DELIVERY_STATS: &str = "getCampaignDeliveryStats";
pub const GET_CAMPAIGN_COMMON_STATS: &str = "getCampaignCommonStats";
pub const GET_VISITED_LINKS: &str = "getVisitedLinks";
pub const GET_CAMPAIGNS: &str = "getCampaigns";
pub const GET_CAMPAIGN_STATUS: &str = "getCampaignStatus";
pub const GET_MESSAGES: &str = "getMessages";
pub const GET_MESSAGE: &str = "getMessage";
pub const LIST_MESSAGES: &str = "listMessages";

// Asynchronous tasks
pub const GET_TASK_RESULT: &str = "async/getTaskResult";

// Partners
pub const GET_CHECKED_EMAIL: &str = "getCheckedEmail";
pub const VALIDATE_SENDER: &str = "validateSender";
pub const REGISTER: &str = "register";
pub const CHECK_USER_EXISTS: &str = "checkUserExists";
pub const GET_USER_INFO: &str = "getUserInfo";
pub const GET_USERS: &str = "getUsers";
pub const TRANSFER_MONEY: &str = "transferMoney";
pub const SET_SENDER_DOMAIN: &str = "setSenderDomain";
