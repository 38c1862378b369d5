pub mod advogado;
pub mod cliente;
pub mod processo;
