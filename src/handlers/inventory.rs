use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;
use std::fs;
use crate::catalog::search;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{InventoryParams, Role};
use crate::services::{CatalogService, LoadOutcome};
use super::{auth::current_session, banner, html_escape};

// Admin-only upload control injected into the page
const UPLOAD_SECTION: &str = r#"<section class="panel">
  <h2>🔄 Actualizar Inventario</h2>
  <form action="/import" method="post" enctype="multipart/form-data">
    <input type="file" name="file" accept=".csv,.xlsx,.xls" required>
    <button type="submit">Subir archivo</button>
  </form>
</section>"#;

pub async fn serve_inventory_page(
    State((catalog_service, _config)): State<(CatalogService, Config)>,
    session: Session,
    Query(params): Query<InventoryParams>,
) -> AppResult<Response> {
    let auth = current_session(&session).await?;
    tracing::info!("Serving inventory page for user: {}", auth.username);

    // The catalog is re-read from disk on every interaction
    let (catalog, outcome) = catalog_service.load();
    let query = params.q.unwrap_or_default();
    let results = search::filter(&catalog, &query);

    // Flash messages from redirects, then load/search conditions
    let mut banners = String::new();
    if let Some(error) = params.error.as_deref() {
        banners.push_str(&banner("error", error));
    }
    if let Some(info) = params.info.as_deref() {
        banners.push_str(&banner("info", info));
    }
    match &outcome {
        LoadOutcome::NoSavedCatalog => {
            banners.push_str(&banner("warning", "No existe archivo de inventario guardado todavía."));
        }
        LoadOutcome::LoadFailed(message) => {
            // same wording as the taxonomy variant so the banner and any
            // future error path read identically
            banners.push_str(&banner(
                "error",
                &AppError::CatalogLoad(message.clone()).to_string(),
            ));
        }
        LoadOutcome::Loaded => {}
    }
    if !query.is_empty() && results.is_empty() && !catalog.is_empty() {
        banners.push_str(&banner("warning", "No se encontraron productos con ese término de búsqueda."));
    }

    let is_admin = auth.role == Role::Administrator;

    // Table head: every catalog column, plus an action column for admins
    let mut table_head: String = catalog
        .columns
        .iter()
        .map(|column| format!("<th>{}</th>", html_escape(column)))
        .collect();
    if is_admin {
        table_head.push_str("<th></th>");
    }

    let table_rows = results
        .iter()
        .map(|row| {
            let mut cells: String = catalog
                .columns
                .iter()
                .map(|column| format!("<td>{}</td>", html_escape(&row.field(column))))
                .collect();
            if is_admin {
                cells.push_str(&format!(
                    r#"<td><a class="edit-btn" href="/edit/{}">✏️ Modificar</a></td>"#,
                    urlencoding::encode(&row.id)
                ));
            }
            format!("<tr>{}</tr>", cells)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let inventory_html = fs::read_to_string("templates/inventory.html").map_err(AppError::File)?;
    let html = inventory_html
        .replace("{{username}}", &html_escape(&auth.username))
        .replace("{{role}}", auth.role.label())
        .replace("{{notices}}", &banners)
        .replace("{{upload_section}}", if is_admin { UPLOAD_SECTION } else { "" })
        .replace("{{search_value}}", &html_escape(&query))
        .replace("{{table_head}}", &table_head)
        .replace("{{table_rows}}", &table_rows);

    Ok(Html(html).into_response())
}
