pub mod auth;
pub mod cards;
pub mod notes;
pub mod rewrite;
pub mod scripts;
pub mod styles;
pub mod translate;
