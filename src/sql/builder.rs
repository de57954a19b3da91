//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the products table.

use crate::model::{CategoryFilter, ProductDraft, ProductFilter};
use crate::sql::PgBindValue;

pub const PRODUCT_TABLE: &str = "products";

/// Column list shared by every statement that returns product rows.
pub const PRODUCT_COLUMNS: &str =
    "id, name, description, price, available, category, created_at, updated_at";

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn draft_params(q: &mut QueryBuf, draft: &ProductDraft) -> [u32; 5] {
    [
        q.push_param(PgBindValue::Text(draft.name.clone())),
        q.push_param(PgBindValue::Text(draft.description.clone())),
        q.push_param(PgBindValue::Numeric(draft.price)),
        q.push_param(PgBindValue::Bool(draft.available)),
        q.push_param(PgBindValue::Text(draft.category.as_str().to_string())),
    ]
}

/// INSERT one product; id and timestamps come from column defaults.
pub fn insert_product(draft: &ProductDraft) -> QueryBuf {
    let mut q = QueryBuf::new();
    let [name, description, price, available, category] = draft_params(&mut q, draft);
    q.sql = format!(
        "INSERT INTO {} (name, description, price, available, category) \
         VALUES (${}::text, ${}::text, ${}::numeric, ${}::boolean, ${}::text) RETURNING {}",
        PRODUCT_TABLE, name, description, price, available, category, PRODUCT_COLUMNS
    );
    q
}

pub fn select_product_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE id = ${}::int4",
        PRODUCT_COLUMNS, PRODUCT_TABLE, n
    );
    q
}

/// UPDATE every mutable column of one product and refresh `updated_at`.
pub fn update_product(id: i32, draft: &ProductDraft) -> QueryBuf {
    let mut q = QueryBuf::new();
    let [name, description, price, available, category] = draft_params(&mut q, draft);
    let id_param = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET name = ${}::text, description = ${}::text, price = ${}::numeric, \
         available = ${}::boolean, category = ${}::text, updated_at = NOW() \
         WHERE id = ${}::int4 RETURNING {}",
        PRODUCT_TABLE, name, description, price, available, category, id_param, PRODUCT_COLUMNS
    );
    q
}

pub fn delete_product(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!("DELETE FROM {} WHERE id = ${}::int4", PRODUCT_TABLE, n);
    q
}

/// SELECT products matching every present predicate, ordered by id.
/// Callers short-circuit unsatisfiable filters; an unrecognized category adds no predicate here.
pub fn select_products(filter: &ProductFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    if let Some(name) = filter.name.as_deref().filter(|n| !n.is_empty()) {
        let n = q.push_param(PgBindValue::Text(format!("%{}%", escape_like(name))));
        where_parts.push(format!("name ILIKE ${}::text ESCAPE '\\'", n));
    }
    if let Some(available) = filter.available {
        let n = q.push_param(PgBindValue::Bool(available));
        where_parts.push(format!("available = ${}::boolean", n));
    }
    if let Some(CategoryFilter::Known(category)) = &filter.category {
        let n = q.push_param(PgBindValue::Text(category.as_str().to_string()));
        where_parts.push(format!("category = ${}::text", n));
    }
    q.sql = format!("SELECT {} FROM {}", PRODUCT_COLUMNS, PRODUCT_TABLE);
    if !where_parts.is_empty() {
        q.sql.push_str(" WHERE ");
        q.sql.push_str(&where_parts.join(" AND "));
    }
    q.sql.push_str(" ORDER BY id");
    q
}

/// Escape LIKE wildcards so user input matches literally.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
