use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::food_item::value_objects::FoodCategory;

use crate::api::food_item::dto::FoodCategoryDto;
use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: FoodCategoryDto,
    pub name: String,
    pub icon: String,
}

impl From<FoodCategory> for CategoryResponse {
    fn from(category: FoodCategory) -> Self {
        Self {
            id: category.into(),
            name: category.display_name().to_string(),
            icon: category.icon().to_string(),
        }
    }
}

pub struct CategoryApi;

impl CategoryApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl CategoryApi {
    /// List food categories
    ///
    /// Public reference data used to render category pickers.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn list_categories(&self) -> Json<Vec<CategoryResponse>> {
        Json(FoodCategory::ALL.into_iter().map(Into::into).collect())
    }
}
