pub mod migration;
pub mod readme;

pub use migration::{migration_script, readme_stub};
pub use readme::{badge, render_readme};
