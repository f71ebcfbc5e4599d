use axum::{
    response::{IntoResponse, Response, Redirect},
    http::StatusCode,
};
use urlencoding;
use crate::errors::AppError;

// The IntoResponse trait implementation converts AppError into a well-formed HTTP response.
// Page-flow failures redirect back to the page that triggered them with the
// message in the query string; everything else maps to a status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            // Authentication errors redirect to the login page
            AppError::InvalidCredentials | AppError::Auth(_) => {
                Redirect::to(&format!("/?error={}", urlencoding::encode(&message)))
                    .into_response()
            }

            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                message
            ).into_response(),

            // Catalog, import and edit failures render as a banner on the inventory page
            AppError::CatalogLoad(_)
            | AppError::UnsupportedFormat(_)
            | AppError::MissingRequiredColumns(_)
            | AppError::Import(_)
            | AppError::Edit(_) => {
                Redirect::to(&format!("/inventory?error={}", urlencoding::encode(&message)))
                    .into_response()
            }

            AppError::File(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("File error: {}", e)
            ).into_response(),

            AppError::Csv(e) => (
                StatusCode::BAD_REQUEST,
                format!("CSV error: {}", e)
            ).into_response(),
        }
    }
}
