//! Report and graph rendering
//!
//! Rendering consumes only data the core produces: the graph topology and the
//! node-to-color-class map. The `GraphRenderer` trait is the seam where a
//! graphics-backed implementation (raster images, SVG) would plug in; the
//! built-in renderer emits Graphviz DOT text so the service itself carries no
//! graphics dependency.
//!
//! # Module Structure
//!
//! - `dot` - Graphviz DOT renderer
//! - `html` - Self-contained HTML report page assembly

pub mod dot;
pub mod html;


pub use dot::DotRenderer;
pub use html::render_report_page;

use crate::core::graph::DependencyGraph;
use std::collections::BTreeMap;

/// Render a dependency graph annotated with per-node status classes
pub trait GraphRenderer {
    /// Produce a textual rendering of the colored graph
    fn render(
        &self,
        graph: &DependencyGraph,
        status_classes: &BTreeMap<String, &'static str>,
    ) -> String;
}
