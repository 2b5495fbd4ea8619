pub mod api_utils;
pub mod client_log;
pub mod components;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod loading;
pub mod notifications;
pub mod page_boundary;
pub mod search_page;
