//! Loan endpoints (`/prestamos`)

use serde_json::json;

use crate::types::{Loan, RenewLoanForm, ReturnLoanForm};

use super::client::{ensure_success, extract_list, ApiClient, ApiError};

/// All loans (admin view).
pub async fn list_all(client: &ApiClient) -> Result<Vec<Loan>, ApiError> {
    let payload = client.get("/prestamos").await?;
    Ok(extract_list(&payload))
}

/// Loans of the authenticated user.
pub async fn my_loans(client: &ApiClient) -> Result<Vec<Loan>, ApiError> {
    let payload = client.get("/prestamos/mis-prestamos").await?;
    Ok(extract_list(&payload))
}

/// Borrow a book for the authenticated user.
pub async fn borrow(client: &ApiClient, book_id: &str) -> Result<(), ApiError> {
    let payload = client
        .post("/prestamos", &json!({ "libroId": book_id }))
        .await?;
    ensure_success(&payload)
}

pub async fn return_loan(
    client: &ApiClient,
    id: &str,
    form: &ReturnLoanForm,
) -> Result<(), ApiError> {
    let payload = client
        .patch(&format!("/prestamos/{id}/devolver"), form)
        .await?;
    ensure_success(&payload)
}

pub async fn renew(client: &ApiClient, id: &str, form: &RenewLoanForm) -> Result<(), ApiError> {
    let payload = client
        .patch(&format!("/prestamos/{id}/renovar"), form)
        .await?;
    ensure_success(&payload)
}
