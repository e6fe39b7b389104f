pub mod shorthand_field;
pub mod translation;
pub mod translator;
