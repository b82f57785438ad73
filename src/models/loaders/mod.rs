pub mod json_loader;

pub use json_loader::{load_all_banks, load_subject_bank};
