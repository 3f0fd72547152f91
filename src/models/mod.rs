pub mod token;

pub use token::TokenObservation;
