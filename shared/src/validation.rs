use thiserror::Error;

use crate::{CategorizeMultipleRequest, Category, Selection};

/// Reasons a bulk categorization is refused before any request is sent.
/// The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a category")]
    MissingCategory,

    #[error("Please select at least one transaction")]
    EmptySelection,
}

pub fn categorize_request(
    category: Option<Category>,
    selection: &Selection,
) -> Result<CategorizeMultipleRequest, ValidationError> {
    let user_category = category.ok_or(ValidationError::MissingCategory)?;
    if selection.is_empty() {
        return Err(ValidationError::EmptySelection);
    }

    Ok(CategorizeMultipleRequest {
        transaction_ids: selection.ids().to_vec(),
        user_category,
    })
}
