use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::ids::CategoryId;


/// Mapping of category ID to its display name (`type`), ordered by ID.
pub type CategoryMap = BTreeMap<CategoryId, String>;


#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(serde::Deserialize))]
#[schema(
    example = json!({
        "success": true,
        "categories": {
            "1": "Science",
            "2": "Art",
            "3": "Geography"
        },
        "total_categories": 3
    })
)]
pub struct CategoriesResponse {
    pub success: bool,

    #[schema(value_type = Object)]
    pub categories: CategoryMap,

    pub total_categories: usize,
}

impl CategoriesResponse {
    pub fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            total_categories: categories.len(),
            categories,
        }
    }
}
