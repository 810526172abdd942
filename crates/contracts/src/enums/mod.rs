pub mod representative;

pub use representative::Representative;
