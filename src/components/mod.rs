// UI Components
// This module contains all reusable UI components

pub mod icons;
pub mod link_item;
pub mod shorten_form;
pub mod toast;

pub use link_item::LinkItem;
pub use shorten_form::ShortenForm;
pub use toast::ToastProvider;
