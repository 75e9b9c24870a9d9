use trivia_core::ids::CategoryId;

use crate::IntoExternalModel;


pub struct CategoryModel {
    pub id: CategoryId,

    /// Display name of the category.
    pub name: String,
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalCategoryModel {
    pub(super) id: i32,

    #[sqlx(rename = "type")]
    pub(super) category_type: String,
}

impl IntoExternalModel for InternalCategoryModel {
    type ExternalModel = CategoryModel;

    fn into_external_model(self) -> Self::ExternalModel {
        CategoryModel {
            id: CategoryId::new(self.id),
            name: self.category_type,
        }
    }
}
