use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use crate::catalog::import;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::CatalogService;
use super::auth::require_admin;

pub async fn process_import(
    State((catalog_service, _config)): State<(CatalogService, Config)>,
    session: Session,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let auth = require_admin(&session).await?;
    tracing::info!("Processing catalog import for user: {}", auth.username);

    // The upload is read fully into memory; the body limit layer bounds it
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to get next field from multipart form: {}", e);
        AppError::Import(format!("Failed to process form field: {}", e))
    })? {
        match field.name().unwrap_or("") {
            "file" => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| AppError::Import("Missing filename in upload".to_string()))?
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Import(format!("Failed to read upload: {}", e)))?;
                tracing::debug!("Received upload {} ({} bytes)", filename, data.len());
                upload = Some((filename, data.to_vec()));
            }
            field_name => {
                tracing::warn!("Unexpected form field: {}", field_name);
            }
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Import("No se subió ningún archivo".to_string()))?;

    // Parse and validate fully before touching disk: the persisted catalog
    // is only replaced once the whole new table is known good
    let catalog = import::import_table(&filename, &data)?;
    catalog_service.save(&catalog)?;

    tracing::info!("Catalog replaced from {} ({} rows)", filename, catalog.rows.len());
    Ok(Redirect::to(&format!(
        "/inventory?info={}",
        urlencoding::encode("Inventario cargado correctamente y guardado en el sistema.")
    ))
    .into_response())
}
