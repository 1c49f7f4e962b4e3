//! 产品业务服务
//!
//! 内存中的有序产品集合，唯一允许修改集合的组件。所有操作都是线性扫描，
//! 集合规模较大时需要引入索引。

use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use super::model::{ListQuery, NewProduct, Product, ProductPatch};
use crate::core::error::CoreError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Clone, Default)]
pub struct ProductService {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// 使用示例数据初始化
    pub fn with_seed_data() -> Self {
        let service = Self::with_products(seed_products());
        info!("✅ 已初始化 {} 个示例产品", service.len());
        service
    }

    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 先按分类、再按名称过滤，然后分页
    pub fn list_products(&self, query: &ListQuery) -> Result<Vec<Product>, CoreError> {
        let products = self.products.read().map_err(poisoned)?;
        let pagination = query.pagination();

        Ok(products
            .iter()
            .filter(|p| query.matches(p))
            .skip(pagination.offset())
            .take(pagination.limit)
            .cloned()
            .collect())
    }

    pub fn get_product(&self, id: &str) -> Result<Product, CoreError> {
        let products = self.products.read().map_err(poisoned)?;

        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    pub fn create_product(&self, payload: NewProduct) -> Result<Product, CoreError> {
        let product = payload.into_product(Uuid::new_v4().to_string())?;

        let mut products = self.products.write().map_err(poisoned)?;
        products.push(product.clone());

        info!("创建产品: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub fn update_product(&self, id: &str, patch: ProductPatch) -> Result<Product, CoreError> {
        let mut products = self.products.write().map_err(poisoned)?;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(not_found)?;
        patch.apply_to(product);

        info!("更新产品: {}", id);
        Ok(product.clone())
    }

    pub fn delete_product(&self, id: &str) -> Result<Product, CoreError> {
        let mut products = self.products.write().map_err(poisoned)?;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(not_found)?;
        let removed = products.remove(index);

        info!("删除产品: {}", id);
        Ok(removed)
    }
}

fn not_found() -> CoreError {
    CoreError::NotFound(PRODUCT_NOT_FOUND.to_string())
}

fn poisoned<T>(_: PoisonError<T>) -> CoreError {
    CoreError::InternalServerError("product store lock poisoned".to_string())
}

fn seed_products() -> Vec<Product> {
    vec![
        seed(
            "1",
            "Laptop",
            "High-performance laptop with 16GB RAM",
            1200,
            "electronics",
            true,
        ),
        seed(
            "2",
            "Smartphone",
            "Latest model with 128GB storage",
            800,
            "electronics",
            true,
        ),
        seed(
            "3",
            "Coffee Maker",
            "Programmable coffee maker with timer",
            50,
            "kitchen",
            false,
        ),
    ]
}

fn seed(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    category: &str,
    in_stock: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: Value::from(name),
        description: Value::from(description),
        price: Value::from(price),
        category: Value::from(category),
        in_stock: Value::from(in_stock),
    }
}
