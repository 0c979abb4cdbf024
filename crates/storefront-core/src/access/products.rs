// Product catalog operations, mirroring the user directory: fetch,
// filter, paginate, and mutate against the upstream catalog.

use tracing::debug;

use storefront_api::CatalogClient;
use storefront_api::catalog::types::ProductWriteBody;

use super::paginate_vec;
use crate::envelope::ApiResponse;
use crate::error::CoreError;
use crate::model::{CreateProductInput, Product, UpdateProductInput};

#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Envelope-producing facade over [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    client: CatalogClient,
}

impl ProductCatalog {
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    pub async fn get_all(
        &self,
        filters: &ProductFilters,
    ) -> Result<ApiResponse<Vec<Product>>, CoreError> {
        debug!(?filters, "fetching products");
        let raw = self.client.list_products().await?;
        let mut products: Vec<Product> = raw.into_iter().map(Product::from).collect();

        if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            products.retain(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            });
        }
        if let Some(category) = filters.category.as_deref() {
            products.retain(|p| p.category == category);
        }
        if let Some(min) = filters.min_price {
            products.retain(|p| p.price >= min);
        }
        if let Some(max) = filters.max_price {
            products.retain(|p| p.price <= max);
        }

        let envelope = match (filters.page, filters.limit) {
            (None, None) => ApiResponse::ok(products, "Products fetched successfully"),
            (page, limit) => {
                let (paged, meta) =
                    paginate_vec(products, page.unwrap_or(1), limit.unwrap_or(10));
                ApiResponse::ok(paged, "Products fetched successfully").with_meta(meta)
            }
        };
        Ok(envelope)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<ApiResponse<Product>, CoreError> {
        debug!(id, "fetching product");
        let raw = self
            .client
            .get_product(id)
            .await
            .map_err(|e| CoreError::for_entity("Product", id, e))?;
        Ok(ApiResponse::ok(
            Product::from(raw),
            "Product fetched successfully",
        ))
    }

    pub async fn create(
        &self,
        input: &CreateProductInput,
    ) -> Result<ApiResponse<Product>, CoreError> {
        validate_create(input)?;
        debug!(name = %input.name, "creating product");
        let body = ProductWriteBody::from(input);
        let raw = self.client.create_product(&body).await?;
        let mut product = Product::from(raw);
        // The echo from the fake upstream may omit fields we sent.
        if product.name.is_empty() {
            product.name.clone_from(&input.name);
        }
        if product.category.is_empty() {
            product.category.clone_from(&input.category);
        }
        Ok(ApiResponse::ok(product, "Product created successfully"))
    }

    pub async fn update(
        &self,
        id: &str,
        input: &UpdateProductInput,
    ) -> Result<ApiResponse<Product>, CoreError> {
        if input.is_empty() {
            return Err(CoreError::validation("No fields to update"));
        }
        debug!(id, "updating product");
        let body = ProductWriteBody::from(input);
        let raw = self
            .client
            .update_product(id, &body)
            .await
            .map_err(|e| CoreError::for_entity("Product", id, e))?;
        let mut product = Product::from(raw);
        product.id = id.to_owned();
        Ok(ApiResponse::ok(product, "Product updated successfully"))
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<()>, CoreError> {
        debug!(id, "deleting product");
        self.client
            .delete_product(id)
            .await
            .map_err(|e| CoreError::for_entity("Product", id, e))?;
        Ok(ApiResponse::ok_empty("Product deleted successfully"))
    }
}

fn validate_create(input: &CreateProductInput) -> Result<(), CoreError> {
    if input.name.is_empty() {
        return Err(CoreError::validation("Product name is required"));
    }
    if input.price < 0.0 {
        return Err(CoreError::validation("Price must not be negative"));
    }
    Ok(())
}
