//! Tower-field parameters, one module per curve family

pub mod bls12_381;
