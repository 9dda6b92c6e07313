//! Translation from declared diagrams to backend input.
//!
//! The pipeline from declaration to file:
//!
//! ```text
//! Diagram (nodes, clusters, edges)
//!       |  export (this module)
//!       v
//! DOT AST (dot-structures)
//!       |  print / exec (backend module)
//!       v
//! DOT source or image bytes
//! ```
//!
//! All visual styling decisions live on this side of the pipeline; the
//! backend only lays out and rasterizes what the exporter produced.

pub(crate) mod dot;
