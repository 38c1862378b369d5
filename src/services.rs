pub mod auth;
pub use auth::AuthService;
pub mod cliente_service;
pub use cliente_service::ClienteService;
pub mod processo_service;
pub use processo_service::ProcessoService;
