use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// Flash messages arrive through the query string on redirects
#[derive(Debug, Deserialize, Default)]
pub struct MessageParams {
    pub error: Option<String>,
    pub info: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InventoryParams {
    pub q: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
}

// Negative stock is unrepresentable here; negative price is rejected in apply_edit
#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub id: String,
    pub precio: f64,
    pub stock: u32,
}
