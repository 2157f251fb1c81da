pub mod api_utils;
pub mod icons;
pub mod modal;
pub mod theme;
pub mod validator;
