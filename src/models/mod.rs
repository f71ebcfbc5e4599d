mod user;
mod forms;
mod product;

pub use user::{User, Role, AuthSession};
pub use forms::{LoginForm, EditForm, MessageParams, InventoryParams};
pub use product::{
    Catalog, ProductRow, format_precio,
    COL_ID, COL_NOMBRE, COL_CATEGORIA, COL_SUBCATEGORIA, COL_PRECIO, COL_STOCK,
    CANONICAL_COLUMNS, REQUIRED_COLUMNS,
};
