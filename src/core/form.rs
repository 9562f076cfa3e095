use tracing::{debug, warn};

use crate::core::fields::{FormSchema, QuantityField, SizeField, QUANTITY_FIELD, SIZE_FIELD};
use crate::domain::model::{CartItem, Product, RawCartItem, SizeOptionId};
use crate::domain::ports::SizeOptionStore;
use crate::utils::error::{FieldError, FieldErrors, Result};
use crate::utils::validation::{parse_quantity, parse_size_id, SizeInput};

/// Validates add-to-cart submissions for one product.
///
/// The field schema is derived once in [`CartItemValidator::build`]. Every call to
/// [`CartItemValidator::validate`] re-reads the chosen size from the store, so stock
/// that ran out after the form was rendered is still caught.
pub struct CartItemValidator<'s, S: SizeOptionStore + ?Sized> {
    store: &'s S,
    product: Option<Product>,
    schema: FormSchema,
}

impl<'s, S: SizeOptionStore + ?Sized> CartItemValidator<'s, S> {
    pub async fn build(store: &'s S, product: Option<&Product>) -> Result<Self> {
        let size_id = match product {
            Some(product) => {
                let in_stock = store.list_size_options(product.id, 0).await?;
                debug!(
                    "Product {} has {} size option(s) in stock",
                    product.id,
                    in_stock.len()
                );
                SizeField::from_in_stock(&in_stock)
            }
            None => SizeField::optional(),
        };

        Ok(Self {
            store,
            product: product.cloned(),
            schema: FormSchema {
                size_id,
                quantity: QuantityField::default(),
            },
        })
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Cleans a submission. All field errors are collected before failing.
    pub async fn validate(&self, raw: &RawCartItem) -> Result<CartItem> {
        let mut errors = FieldErrors::new();

        let quantity_field = self.schema.quantity;
        let quantity = match parse_quantity(
            raw.quantity.as_ref(),
            quantity_field.min_value,
            quantity_field.initial,
        ) {
            Ok(quantity) => quantity,
            Err(error) => {
                errors.add(QUANTITY_FIELD, error);
                quantity_field.initial
            }
        };

        let size_id = self.clean_size(raw, &mut errors).await?;

        if !errors.is_empty() {
            debug!("Rejected cart item: {}", errors);
        }
        errors.into_result(CartItem { size_id, quantity })
    }

    async fn clean_size(
        &self,
        raw: &RawCartItem,
        errors: &mut FieldErrors,
    ) -> Result<Option<SizeOptionId>> {
        if !self.schema.size_id.is_present() {
            if raw.size_id.is_some() {
                debug!("Ignoring submitted size for a product without sizes in stock");
            }
            return Ok(None);
        }

        let id = match parse_size_id(raw.size_id.as_ref()) {
            SizeInput::Id(id) => id,
            SizeInput::Missing => {
                if self.schema.size_id.is_required() {
                    errors.add(SIZE_FIELD, FieldError::size_required());
                }
                return Ok(None);
            }
            SizeInput::Malformed => {
                errors.add(SIZE_FIELD, FieldError::invalid_size_selected());
                return Ok(None);
            }
        };

        // A plain integer field treats 0 as falsy, i.e. not supplied.
        if !self.schema.size_id.is_required() && id == SizeOptionId(0) {
            return Ok(None);
        }

        // Without a product no size option can belong to it.
        let Some(product) = &self.product else {
            errors.add(SIZE_FIELD, FieldError::invalid_size_selected());
            return Ok(None);
        };

        match self.store.get_size_option(id, product.id).await? {
            None => {
                debug!("Size option {} not found for product {}", id, product.id);
                errors.add(SIZE_FIELD, FieldError::invalid_size_selected());
                Ok(None)
            }
            Some(option) if !option.in_stock() => {
                if self.schema.size_id.offers(id) {
                    warn!(
                        "Size option {} of product {} sold out after the form was rendered",
                        id, product.id
                    );
                }
                errors.add(SIZE_FIELD, FieldError::size_unavailable());
                Ok(None)
            }
            Some(option) => Ok(Some(option.id)),
        }
    }
}
