// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, PageShell, etc.)
// - list.rs: ResourceList and its toolbar, empty state and pagination
// - certificates.rs: PEM / JWKS certificate input

pub mod certificates;
pub mod common;
pub mod list;

pub use certificates::*;
pub use common::*;
pub use list::*;
