use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;

use business::application::product::add::AddProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_in_stock::GetInStockProductsUseCaseImpl;
use business::application::product::locks::ProductLocks;
use business::application::product::order::OrderProductUseCaseImpl;
use business::application::product::restock::RestockProductUseCaseImpl;
use business::application::product::ship::ShipProductUseCaseImpl;

use crate::api::health::routes::Api as HealthApi;
use crate::api::warehouse::routes::WarehouseApi;
use crate::config::database_config::ProductStore;
use crate::config::warehouse_config::WarehouseConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub warehouse_api: WarehouseApi,
}

impl DependencyContainer {
    pub fn new(store: ProductStore, config: WarehouseConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let repository = store.repository;
        let health_api = HealthApi::new(store.kind);

        // Order, ship and restock share the locks so one product is mutated at a time
        let locks = Arc::new(ProductLocks::new());

        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_in_stock_use_case = Arc::new(GetInStockProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let order_use_case = Arc::new(OrderProductUseCaseImpl {
            repository: repository.clone(),
            locks: locks.clone(),
            logger: logger.clone(),
        });
        let ship_use_case = Arc::new(ShipProductUseCaseImpl {
            repository: repository.clone(),
            locks: locks.clone(),
            reserved_on_ship: config.reserved_on_ship,
            logger: logger.clone(),
        });
        let restock_use_case = Arc::new(RestockProductUseCaseImpl {
            repository: repository.clone(),
            locks,
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddProductUseCaseImpl {
            repository,
            catalog_lock: Mutex::new(()),
            name_suffix: config.name_suffix,
            logger,
        });

        let warehouse_api = WarehouseApi::new(
            get_by_id_use_case,
            get_in_stock_use_case,
            get_all_use_case,
            order_use_case,
            ship_use_case,
            restock_use_case,
            add_use_case,
        );

        Self {
            health_api,
            warehouse_api,
        }
    }
}
