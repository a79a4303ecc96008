use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::food_item::use_cases::create::{
    CreateFoodItemParams, CreateFoodItemUseCase,
};
use business::domain::food_item::use_cases::delete::{
    DeleteFoodItemParams, DeleteFoodItemUseCase,
};
use business::domain::food_item::use_cases::get_all::{
    GetAllFoodItemsParams, GetAllFoodItemsUseCase,
};
use business::domain::food_item::use_cases::get_by_id::{
    GetFoodItemByIdParams, GetFoodItemByIdUseCase,
};
use business::domain::food_item::use_cases::get_expiring::{
    GetExpiringFoodItemsParams, GetExpiringFoodItemsUseCase,
};
use business::domain::food_item::use_cases::update::{
    UpdateFoodItemParams, UpdateFoodItemUseCase,
};
use business::domain::food_item::use_cases::upload_image::{
    UploadFoodImageParams, UploadFoodImageUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::food_item::dto::{
    FoodItemRequest, FoodItemResponse, UploadImageRequest, UploadImageResponse,
};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "food_item.invalid_id";
const INVALID_EXPIRY_DATE: &str = "food_item.expiry_date_invalid";

pub struct FoodItemApi {
    create_use_case: Arc<dyn CreateFoodItemUseCase>,
    get_all_use_case: Arc<dyn GetAllFoodItemsUseCase>,
    get_expiring_use_case: Arc<dyn GetExpiringFoodItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetFoodItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateFoodItemUseCase>,
    delete_use_case: Arc<dyn DeleteFoodItemUseCase>,
    upload_image_use_case: Arc<dyn UploadFoodImageUseCase>,
}

impl FoodItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateFoodItemUseCase>,
        get_all_use_case: Arc<dyn GetAllFoodItemsUseCase>,
        get_expiring_use_case: Arc<dyn GetExpiringFoodItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetFoodItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateFoodItemUseCase>,
        delete_use_case: Arc<dyn DeleteFoodItemUseCase>,
        upload_image_use_case: Arc<dyn UploadFoodImageUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_expiring_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            upload_image_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation(INVALID_ID))
}

/// Food item management API
///
/// Every endpoint is scoped to the household of the authenticated caller.
#[OpenApi]
impl FoodItemApi {
    /// Create a food item
    ///
    /// Stores a new item and returns it with its current freshness.
    #[oai(path = "/food-items", method = "post", tag = "ApiTags::FoodItems")]
    async fn create_food_item(
        &self,
        auth: FirebaseBearer,
        body: Json<FoodItemRequest>,
    ) -> CreateFoodItemResponse {
        let Ok(expiry_date) = body.0.parsed_expiry_date() else {
            return CreateFoodItemResponse::BadRequest(ErrorResponse::validation(
                INVALID_EXPIRY_DATE,
            ));
        };

        let params = CreateFoodItemParams {
            user_id: auth.0,
            name: body.0.name,
            category: body.0.category.into(),
            image_url: body.0.image_url,
            expiry_date,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateFoodItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateFoodItemResponse::BadRequest(json),
                    _ => CreateFoodItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List food items
    ///
    /// Returns every item sorted by expiry, soonest first; undated items last.
    #[oai(path = "/food-items", method = "get", tag = "ApiTags::FoodItems")]
    async fn get_all_food_items(&self, auth: FirebaseBearer) -> FoodItemListResponse {
        match self
            .get_all_use_case
            .execute(GetAllFoodItemsParams { user_id: auth.0 })
            .await
        {
            Ok(items) => {
                FoodItemListResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                FoodItemListResponse::InternalError(json)
            }
        }
    }

    /// List items expiring within a week
    ///
    /// Includes items that are already expired.
    #[oai(
        path = "/food-items/expiring",
        method = "get",
        tag = "ApiTags::FoodItems"
    )]
    async fn get_expiring_food_items(&self, auth: FirebaseBearer) -> FoodItemListResponse {
        match self
            .get_expiring_use_case
            .execute(GetExpiringFoodItemsParams { user_id: auth.0 })
            .await
        {
            Ok(items) => {
                FoodItemListResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                FoodItemListResponse::InternalError(json)
            }
        }
    }

    /// Get a food item by ID
    #[oai(path = "/food-items/:id", method = "get", tag = "ApiTags::FoodItems")]
    async fn get_food_item_by_id(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
    ) -> GetFoodItemByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetFoodItemByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetFoodItemByIdParams {
                id,
                user_id: auth.0,
            })
            .await
        {
            Ok(item) => GetFoodItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetFoodItemByIdResponse::NotFound(json),
                    _ => GetFoodItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a food item
    ///
    /// Replaces the editable fields of an existing item.
    #[oai(path = "/food-items/:id", method = "put", tag = "ApiTags::FoodItems")]
    async fn update_food_item(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<FoodItemRequest>,
    ) -> UpdateFoodItemResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateFoodItemResponse::BadRequest(json),
        };
        let Ok(expiry_date) = body.0.parsed_expiry_date() else {
            return UpdateFoodItemResponse::BadRequest(ErrorResponse::validation(
                INVALID_EXPIRY_DATE,
            ));
        };

        let params = UpdateFoodItemParams {
            id,
            user_id: auth.0,
            name: body.0.name,
            category: body.0.category.into(),
            image_url: body.0.image_url,
            expiry_date,
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateFoodItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateFoodItemResponse::BadRequest(json),
                    404 => UpdateFoodItemResponse::NotFound(json),
                    _ => UpdateFoodItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a food item
    #[oai(path = "/food-items/:id", method = "delete", tag = "ApiTags::FoodItems")]
    async fn delete_food_item(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
    ) -> DeleteFoodItemResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteFoodItemResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteFoodItemParams {
                id,
                user_id: auth.0,
            })
            .await
        {
            Ok(()) => DeleteFoodItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteFoodItemResponse::NotFound(json),
                    _ => DeleteFoodItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Upload a food photo
    ///
    /// Accepts a base64 image and returns the public URL to attach to an item.
    #[oai(
        path = "/food-items/images",
        method = "post",
        tag = "ApiTags::FoodItems"
    )]
    async fn upload_food_image(
        &self,
        _auth: FirebaseBearer,
        body: Json<UploadImageRequest>,
    ) -> UploadFoodImageResponse {
        let params = UploadFoodImageParams {
            original_name: body.0.file_name,
            image_base64: body.0.image_base64,
        };

        match self.upload_image_use_case.execute(params).await {
            Ok(uploaded) => UploadFoodImageResponse::Created(Json(uploaded.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UploadFoodImageResponse::BadRequest(json),
                    _ => UploadFoodImageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateFoodItemResponse {
    #[oai(status = 201)]
    Created(Json<FoodItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FoodItemListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FoodItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFoodItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<FoodItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateFoodItemResponse {
    #[oai(status = 200)]
    Ok(Json<FoodItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteFoodItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadFoodImageResponse {
    #[oai(status = 201)]
    Created(Json<UploadImageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
