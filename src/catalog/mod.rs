pub mod codec;
pub mod edit;
pub mod import;
pub mod search;
