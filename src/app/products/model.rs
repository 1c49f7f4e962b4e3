//! 产品数据模型
//!
//! 除 `id` 外的字段按客户端提交的 JSON 原样保存，只做存在性检查，不做类型校验。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::CoreError;

pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: Value,
    pub description: Value,
    pub price: Value,
    pub category: Value,
    pub in_stock: Value,
}

/// 判断字段是否"有值"：null、false、0、NaN 和空字符串视为无值
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

/// 创建产品请求
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub in_stock: Option<Value>,
}

impl NewProduct {
    /// 校验必填字段并补全默认值
    pub fn into_product(self, id: String) -> Result<Product, CoreError> {
        let (Some(name), Some(price)) = (truthy(self.name), truthy(self.price)) else {
            return Err(CoreError::BadRequest(
                "Name and price are required".to_string(),
            ));
        };

        Ok(Product {
            id,
            name,
            description: truthy(self.description).unwrap_or_else(|| Value::from("")),
            price,
            category: truthy(self.category).unwrap_or_else(|| Value::from(DEFAULT_CATEGORY)),
            in_stock: self.in_stock.unwrap_or(Value::Bool(true)),
        })
    }
}

/// 更新产品请求
///
/// 只覆盖请求中出现的字段。没有 `id` 字段，请求体中的 `id` 会被忽略。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub in_stock: Option<Value>,
}

impl ProductPatch {
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
    }
}

/// 列表查询参数
///
/// 由原始查询键值对构建，同名参数取第一个；`page` 和 `limit` 非正整数时回退到默认值。
#[derive(Debug, Default, Clone)]
pub struct ListQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut query.category,
                "q" => &mut query.q,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// 名称不是字符串的产品不会命中搜索
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if product.category.as_str() != Some(category) {
                return false;
            }
        }

        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            let needle = q.to_lowercase();
            let hit = product
                .name
                .as_str()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        }
    }
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Pagination {
    /// 从 1 开始计页
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laptop() -> Product {
        Product {
            id: "1".to_string(),
            name: json!("Laptop"),
            description: json!("High-performance laptop with 16GB RAM"),
            price: json!(1200),
            category: json!("electronics"),
            in_stock: json!(true),
        }
    }

    fn payload(value: Value) -> NewProduct {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn truthiness_follows_presence_rules() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&value), "{} should be falsy", value);
        }
        for value in [json!(true), json!(-1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{} should be truthy", value);
        }
    }

    #[test]
    fn new_product_applies_defaults() {
        let product = payload(json!({ "name": "Desk", "price": 150 }))
            .into_product("abc".to_string())
            .unwrap();

        assert_eq!(product.id, "abc");
        assert_eq!(product.description, json!(""));
        assert_eq!(product.category, json!("general"));
        assert_eq!(product.in_stock, json!(true));
    }

    #[test]
    fn new_product_keeps_values_of_any_type() {
        let product = payload(json!({ "name": 123, "price": "10", "inStock": false }))
            .into_product("abc".to_string())
            .unwrap();

        assert_eq!(product.name, json!(123));
        assert_eq!(product.price, json!("10"));
        assert_eq!(product.in_stock, json!(false));
    }

    #[test]
    fn new_product_requires_name_and_price() {
        for body in [
            json!({ "name": "Desk" }),
            json!({ "name": "", "price": 10 }),
            json!({ "name": "Desk", "price": 0 }),
            json!({ "name": null, "price": 10 }),
            json!({}),
        ] {
            assert!(matches!(
                payload(body).into_product("a".into()),
                Err(CoreError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn patch_overrides_only_present_fields() {
        let mut product = laptop();
        let patch: ProductPatch =
            serde_json::from_value(json!({ "price": "999", "id": "hijacked" })).unwrap();

        patch.apply_to(&mut product);

        assert_eq!(product.price, json!("999"));
        assert_eq!(product.id, "1");
        assert_eq!(product.name, json!("Laptop"));
        assert_eq!(product.category, json!("electronics"));
    }

    #[test]
    fn query_filters_by_category_and_name() {
        let product = laptop();

        let query = ListQuery {
            category: Some("electronics".to_string()),
            q: Some("LAP".to_string()),
            ..Default::default()
        };
        assert!(query.matches(&product));

        let query = ListQuery {
            category: Some("Electronics".to_string()),
            ..Default::default()
        };
        assert!(!query.matches(&product));

        let query = ListQuery {
            category: Some(String::new()),
            q: Some(String::new()),
            ..Default::default()
        };
        assert!(query.matches(&product));

        let numeric_name = Product {
            name: json!(42),
            ..laptop()
        };
        let query = ListQuery {
            q: Some("4".to_string()),
            ..Default::default()
        };
        assert!(!query.matches(&numeric_name));
    }

    #[test]
    fn query_from_pairs_keeps_first_value() {
        let pairs = [("page", "2"), ("page", "7"), ("q", "lap"), ("sort", "x")]
            .map(|(k, v)| (k.to_string(), v.to_string()));
        let query = ListQuery::from_pairs(pairs);

        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.q.as_deref(), Some("lap"));
        assert!(query.category.is_none());
    }

    #[test]
    fn pagination_falls_back_to_defaults() {
        let query = ListQuery {
            page: Some("abc".to_string()),
            limit: Some("0".to_string()),
            ..Default::default()
        };
        assert_eq!(query.pagination(), Pagination { page: 1, limit: 5 });

        let query = ListQuery {
            page: Some("3".to_string()),
            limit: Some("2".to_string()),
            ..Default::default()
        };
        let pagination = query.pagination();
        assert_eq!(pagination, Pagination { page: 3, limit: 2 });
        assert_eq!(pagination.offset(), 4);
    }

    #[test]
    fn serializes_in_stock_as_camel_case() {
        let text = serde_json::to_string(&laptop()).unwrap();
        assert!(text.contains(r#""inStock":true"#));
        assert!(text.contains(r#""price":1200"#));
        assert!(!text.contains("1200.0"));
        assert!(!text.contains("in_stock"));
    }
}
