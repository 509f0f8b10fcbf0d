pub mod check;
pub mod docs;
pub mod export;
pub mod info;
pub mod new;
pub mod sample;
pub mod settings;
