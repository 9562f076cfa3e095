pub mod fields;
pub mod form;

pub use fields::FormSchema;
pub use form::CartItemValidator;
