//! Pure mapping from engine payloads to HTML panels.
//!
//! Nothing in here touches the network or session state, and nothing here fails:
//! every missing field resolves through the fallback table in `dossier` and `summary`.

pub mod dossier;
pub mod panels;
pub mod summary;

pub use dossier::*;
pub use panels::*;
pub use summary::*;
