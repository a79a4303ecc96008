use std::sync::Arc;

use logger::TracingLogger;
use persistence::food_item::repository::FoodItemRepositoryPostgres;
use persistence::image_storage::local::LocalImageStorage;

use business::application::food_item::classify_expiry::ClassifyExpiryUseCaseImpl;
use business::application::food_item::create::CreateFoodItemUseCaseImpl;
use business::application::food_item::delete::DeleteFoodItemUseCaseImpl;
use business::application::food_item::get_all::GetAllFoodItemsUseCaseImpl;
use business::application::food_item::get_by_id::GetFoodItemByIdUseCaseImpl;
use business::application::food_item::get_expiring::GetExpiringFoodItemsUseCaseImpl;
use business::application::food_item::update::UpdateFoodItemUseCaseImpl;
use business::application::food_item::upload_image::UploadFoodImageUseCaseImpl;
use business::domain::shared::clock::{Clock, SystemClock};

use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub food_item_api: crate::api::food_item::routes::FoodItemApi,
    pub expiry_api: crate::api::expiry::routes::ExpiryApi,
    pub category_api: crate::api::category::routes::CategoryApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, storage: &StorageConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let repository = Arc::new(FoodItemRepositoryPostgres::new(pool));
        let image_storage = Arc::new(LocalImageStorage::new(
            storage.root_dir.clone(),
            storage.public_base_url.clone(),
        ));

        // Food item use cases
        let create_use_case = Arc::new(CreateFoodItemUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllFoodItemsUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let get_expiring_use_case = Arc::new(GetExpiringFoodItemsUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetFoodItemByIdUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateFoodItemUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteFoodItemUseCaseImpl {
            repository,
            logger: logger.clone(),
        });
        let upload_image_use_case = Arc::new(UploadFoodImageUseCaseImpl {
            storage: image_storage,
            clock: clock.clone(),
            logger,
        });

        // Expiry use cases
        let classify_use_case = Arc::new(ClassifyExpiryUseCaseImpl { clock });

        let food_item_api = crate::api::food_item::routes::FoodItemApi::new(
            create_use_case,
            get_all_use_case,
            get_expiring_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            upload_image_use_case,
        );
        let expiry_api = crate::api::expiry::routes::ExpiryApi::new(classify_use_case);
        let category_api = crate::api::category::routes::CategoryApi::new();

        Self {
            health_api,
            food_item_api,
            expiry_api,
            category_api,
        }
    }
}
