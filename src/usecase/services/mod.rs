pub mod import_service;
pub mod render_service;
