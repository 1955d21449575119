pub mod redirect;
pub mod url;
