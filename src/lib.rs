pub mod adapter;
pub mod assembler;
pub mod catalog;
pub mod cipher;
pub mod config;
pub mod embed;
pub mod errors;
pub mod logger;
pub mod metrics;
pub mod policy;
pub mod sink;
