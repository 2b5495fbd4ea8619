//! Tender Details UI Module
//!
//! - view_model.rs: загрузка карточки и реакция на ошибку
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::TenderDetails;
pub use view_model::TenderDetailsViewModel;
