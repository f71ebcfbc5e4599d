use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use std::fs;
use crate::catalog::edit;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{format_precio, EditForm};
use crate::services::CatalogService;
use super::{auth::require_admin, html_escape};

pub async fn serve_edit_page(
    State((catalog_service, _config)): State<(CatalogService, Config)>,
    session: Session,
    Path(id): Path<String>,
) -> AppResult<Response> {
    require_admin(&session).await?;

    let (catalog, _) = catalog_service.load();
    // First match wins when IDs are duplicated; the commit still updates all
    let row = edit::first_by_id(&catalog, &id)
        .ok_or_else(|| AppError::Edit(format!("No existe un producto con ID {}", id)))?;

    let total = edit::compute_total(row.precio, row.stock);

    let edit_html = fs::read_to_string("templates/edit.html").map_err(AppError::File)?;
    let html = edit_html
        .replace("{{id}}", &html_escape(&row.id))
        .replace("{{nombre}}", &html_escape(&row.nombre))
        .replace("{{precio}}", &format_precio(row.precio))
        .replace("{{stock}}", &row.stock.to_string())
        .replace("{{total}}", &edit::format_currency(total));

    Ok(Html(html).into_response())
}

pub async fn handle_edit(
    State((catalog_service, _config)): State<(CatalogService, Config)>,
    session: Session,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    require_admin(&session).await?;

    let (mut catalog, _) = catalog_service.load();
    let updated = edit::apply_edit(&mut catalog, &form.id, form.precio, form.stock)?;
    catalog_service.save(&catalog)?;

    tracing::info!("Updated {} row(s) for product ID {}", updated, form.id);
    Ok(Redirect::to(&format!(
        "/inventory?info={}",
        urlencoding::encode("Cambios guardados correctamente.")
    ))
    .into_response())
}

// Discards nothing server-side: pending edits only ever lived in the form
pub async fn cancel_edit() -> Response {
    Redirect::to(&format!(
        "/inventory?info={}",
        urlencoding::encode("Cambios cancelados.")
    ))
    .into_response()
}
