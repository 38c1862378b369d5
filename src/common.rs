pub mod datas;
pub mod error;
pub mod validacao;
