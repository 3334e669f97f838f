// handlers/mod.rs - one module per upstream table
//
// Every /api/* handler takes the caller's Authorization header (AuthToken),
// calls exactly one service method and wraps the result in the envelope.

pub mod admin;
pub mod observation;
pub mod profile;
pub mod specie;
