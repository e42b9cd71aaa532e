//! API route handlers

pub mod crud;
pub mod health;
pub mod professeur;
