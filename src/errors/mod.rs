// Defines a custom error type and a result type alias for the application using the thiserror crate.
use thiserror::Error;

// Make the response module public
pub mod response;

// User-facing messages are Spanish because that is the language of the page.
// The variants form a closed taxonomy of everything a handler can surface.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usuario o contraseña incorrecta")]
    InvalidCredentials,

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Se requiere rol de Administrador para esta acción")]
    Forbidden,

    #[error("Error al leer el archivo de inventario: {0}")]
    CatalogLoad(String),

    #[error("Formato de archivo no soportado ({0}). Use CSV o Excel.")]
    UnsupportedFormat(String),

    #[error("El archivo debe contener las columnas: {}", .0.join(", "))]
    MissingRequiredColumns(Vec<String>),

    #[error("Error al procesar el archivo: {0}")]
    Import(String),

    #[error("{0}")]
    Edit(String),

    // The #[from] attribute automatically converts a std::io::Error into an AppError::File using the From trait.
    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
