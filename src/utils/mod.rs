pub mod assets;
pub mod helpers;
