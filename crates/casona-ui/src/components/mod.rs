//! Page section components. Each renders one view-model and nothing else;
//! all decisions about what to show were already made by `viewmodel`.

pub(crate) mod amenities;
pub(crate) mod booking_form;
pub(crate) mod footer;
pub(crate) mod gallery;
pub(crate) mod hero;
pub(crate) mod lang_menu;
pub(crate) mod location;
pub(crate) mod navbar;
pub(crate) mod policies;
pub(crate) mod rooms;
pub(crate) mod testimonials;
