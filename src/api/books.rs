//! Book endpoints: authenticated CRUD on `/libros` plus the public catalog

use crate::types::{Book, BookForm, CatalogQuery, Genre};

use super::client::{ensure_success, extract_list, ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<Book>, ApiError> {
    let payload = client.get("/libros").await?;
    Ok(extract_list(&payload))
}

pub async fn create(client: &ApiClient, form: &BookForm) -> Result<(), ApiError> {
    let payload = client.post("/libros", form).await?;
    ensure_success(&payload)
}

pub async fn update(client: &ApiClient, id: &str, form: &BookForm) -> Result<(), ApiError> {
    let payload = client.put(&format!("/libros/{id}"), form).await?;
    ensure_success(&payload)
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let payload = client.delete(&format!("/libros/{id}")).await?;
    ensure_success(&payload)
}

/// Public catalog, no credential required.
pub async fn public_catalog(
    client: &ApiClient,
    query: &CatalogQuery,
) -> Result<Vec<Book>, ApiError> {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        params.push(("busqueda", search.to_string()));
    }
    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        params.push(("categoria", category.to_string()));
    }
    if let Some(page) = query.page {
        params.push(("page", page.to_string()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }

    let payload = client.get_query("/libros/publicos", &params).await?;
    Ok(extract_list(&payload))
}

/// Public category list for the catalog filter.
pub async fn public_categories(client: &ApiClient) -> Result<Vec<Genre>, ApiError> {
    let payload = client.get("/categorias/publicas").await?;
    Ok(extract_list(&payload))
}
