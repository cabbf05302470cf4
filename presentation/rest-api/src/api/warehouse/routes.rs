use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::add::{AddProductParams, AddProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_in_stock::GetInStockProductsUseCase;
use business::domain::product::use_cases::order::OrderProductUseCase;
use business::domain::product::use_cases::restock::RestockProductUseCase;
use business::domain::product::use_cases::ship::ShipProductUseCase;
use business::domain::product::value_objects::OperationResult;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::warehouse::dto::{
    AddProductRequest, CreateResponse, ProductResponse, UpdateQuantityRequest, UpdateResponse,
};

pub struct WarehouseApi {
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_in_stock_use_case: Arc<dyn GetInStockProductsUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    order_use_case: Arc<dyn OrderProductUseCase>,
    ship_use_case: Arc<dyn ShipProductUseCase>,
    restock_use_case: Arc<dyn RestockProductUseCase>,
    add_use_case: Arc<dyn AddProductUseCase>,
}

impl WarehouseApi {
    pub fn new(
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_in_stock_use_case: Arc<dyn GetInStockProductsUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        order_use_case: Arc<dyn OrderProductUseCase>,
        ship_use_case: Arc<dyn ShipProductUseCase>,
        restock_use_case: Arc<dyn RestockProductUseCase>,
        add_use_case: Arc<dyn AddProductUseCase>,
    ) -> Self {
        Self {
            get_by_id_use_case,
            get_in_stock_use_case,
            get_all_use_case,
            order_use_case,
            ship_use_case,
            restock_use_case,
            add_use_case,
        }
    }
}

fn quantity_response(result: Result<OperationResult, ProductError>) -> UpdateQuantityResponse {
    match result {
        Ok(result) => UpdateQuantityResponse::Ok(Json(result.into())),
        Err(err) => {
            let (_status, json) = err.into_error_response();
            UpdateQuantityResponse::InternalError(json)
        }
    }
}

fn product_list_response(
    result: Result<Vec<business::domain::product::model::Product>, ProductError>,
) -> ProductListResponse {
    match result {
        Ok(products) => {
            ProductListResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
        }
        Err(err) => {
            let (_status, json) = err.into_error_response();
            ProductListResponse::InternalError(json)
        }
    }
}

/// Warehouse inventory API
///
/// Business refusals (bad quantity, unknown product, not enough stock) are
/// answered with 200 and `success: false`; only store failures produce 5xx.
#[OpenApi]
impl WarehouseApi {
    /// Get a product by ID
    #[oai(path = "/api/warehouse/:id", method = "get", tag = "ApiTags::Warehouse")]
    async fn get_product(&self, id: Path<i64>) -> GetProductResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products in stock
    ///
    /// In stock means the in-stock quantity is above zero and above the
    /// reserved quantity.
    #[oai(path = "/api/warehouse", method = "get", tag = "ApiTags::Warehouse")]
    async fn get_in_stock_products(&self) -> ProductListResponse {
        product_list_response(self.get_in_stock_use_case.execute().await)
    }

    /// List every product, including out-of-stock ones
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Warehouse")]
    async fn get_all_products(&self) -> ProductListResponse {
        product_list_response(self.get_all_use_case.execute().await)
    }

    /// Reserve stock for an order
    ///
    /// Fails with `NotEnoughQuantity` when the reservation would exceed the
    /// in-stock quantity.
    #[oai(path = "/api/warehouse/order", method = "post", tag = "ApiTags::Warehouse")]
    async fn order_item(&self, body: Json<UpdateQuantityRequest>) -> UpdateQuantityResponse {
        quantity_response(self.order_use_case.execute(body.0.into()).await)
    }

    /// Ship stock
    ///
    /// Decreases both in-stock and reserved quantities. Fails with
    /// `NotEnoughQuantity` when in-stock would drop below zero.
    #[oai(path = "/api/warehouse/ship", method = "post", tag = "ApiTags::Warehouse")]
    async fn ship_item(&self, body: Json<UpdateQuantityRequest>) -> UpdateQuantityResponse {
        quantity_response(self.ship_use_case.execute(body.0.into()).await)
    }

    /// Restock
    #[oai(path = "/api/warehouse/restock", method = "post", tag = "ApiTags::Warehouse")]
    async fn restock_item(&self, body: Json<UpdateQuantityRequest>) -> UpdateQuantityResponse {
        quantity_response(self.restock_use_case.execute(body.0.into()).await)
    }

    /// Add a new product
    ///
    /// The name is trimmed and, if already taken, suffixed with the next free
    /// counter. Reserved quantity always starts at zero.
    #[oai(path = "/api/warehouse/add", method = "post", tag = "ApiTags::Warehouse")]
    async fn add_new_product(&self, body: Json<AddProductRequest>) -> AddProductResponse {
        let params = AddProductParams {
            name: body.0.name,
            in_stock_quantity: body.0.in_stock_quantity,
        };

        match self.add_use_case.execute(params).await {
            Ok(result) => AddProductResponse::Ok(Json(result.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AddProductResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<UpdateResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 200)]
    Ok(Json<CreateResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::Product;
    use business::domain::product::policies::{NameSuffix, ReservedOnShip};
    use persistence::product::in_memory::ProductRepositoryInMemory;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use crate::config::database_config::ProductStore;
    use crate::config::warehouse_config::WarehouseConfig;
    use crate::setup::dependency_injection::DependencyContainer;

    fn client(products: Vec<Product>) -> TestClient<Route> {
        let container = DependencyContainer::new(
            ProductStore::in_memory(ProductRepositoryInMemory::with_products(products)),
            WarehouseConfig {
                reserved_on_ship: ReservedOnShip::Subtract,
                name_suffix: NameSuffix::Parenthesized,
            },
        );
        let service = OpenApiService::new(container.warehouse_api, "Warehouse API", "test");
        TestClient::new(Route::new().nest("/", service))
    }

    fn widget() -> Product {
        Product::from_repository(1, "Widget".to_string(), 10, 5)
    }

    #[tokio::test]
    async fn should_order_and_report_success() {
        let client = client(vec![widget()]);

        let resp = client
            .post("/api/warehouse/order")
            .body_json(&json!({ "id": 1, "quantity": 5 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body = resp.json().await;
        body.value().object().get("success").assert_bool(true);
        body.value().object().get("errorReason").assert_null();

        let resp = client.get("/api/warehouse/1").send().await;
        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("reservedQuantity")
            .assert_i64(10);
    }

    #[tokio::test]
    async fn should_report_reason_by_symbolic_name() {
        let client = client(vec![widget()]);

        let resp = client
            .post("/api/warehouse/ship")
            .body_json(&json!({ "id": 1, "quantity": 11 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body = resp.json().await;
        body.value().object().get("success").assert_bool(false);
        body.value()
            .object()
            .get("errorReason")
            .assert_string("NotEnoughQuantity");
    }

    #[tokio::test]
    async fn should_prefer_quantity_invalid_over_missing_product() {
        let client = client(vec![]);

        let resp = client
            .post("/api/warehouse/restock")
            .body_json(&json!({ "id": 77, "quantity": -1 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("errorReason")
            .assert_string("QuantityInvalid");
    }

    #[tokio::test]
    async fn should_add_product_with_unique_name() {
        let client = client(vec![widget()]);

        let resp = client
            .post("/api/warehouse/add")
            .body_json(&json!({
                "id": 1,
                "name": " Widget ",
                "inStockQuantity": 3,
                "reservedQuantity": 2
            }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body = resp.json().await;
        body.value().object().get("success").assert_bool(true);
        let model = body.value().object().get("model").object();
        model.get("id").assert_i64(2);
        model.get("name").assert_string("Widget(1)");
        model.get("inStockQuantity").assert_i64(3);
        model.get("reservedQuantity").assert_i64(0);
    }

    #[tokio::test]
    async fn should_reject_blank_name_without_model() {
        let client = client(vec![]);

        let resp = client
            .post("/api/warehouse/add")
            .body_json(&json!({ "name": "   ", "inStockQuantity": 3 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body = resp.json().await;
        body.value().object().get("success").assert_bool(false);
        body.value()
            .object()
            .get("errorReason")
            .assert_string("InvalidRequest");
        body.value().object().get("model").assert_null();
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_product() {
        let client = client(vec![]);

        let resp = client.get("/api/warehouse/5").send().await;

        resp.assert_status(poem::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_list_only_in_stock_products() {
        let client = client(vec![
            widget(),
            Product::from_repository(2, "Gadget".to_string(), 4, 4),
        ]);

        let in_stock = client.get("/api/warehouse").send().await;
        in_stock.assert_status_is_ok();
        in_stock.json().await.value().array().assert_len(1);

        let all = client.get("/api/products").send().await;
        all.assert_status_is_ok();
        all.json().await.value().array().assert_len(2);
    }
}
