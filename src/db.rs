pub mod advogado_repo;
pub use advogado_repo::AdvogadoRepository;
pub mod cliente_repo;
pub use cliente_repo::ClienteRepository;
pub mod processo_repo;
pub use processo_repo::ProcessoRepository;
