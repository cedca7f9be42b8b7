//! The layout solver: a constraint-based 1-D partitioner composed
//! recursively into 2-D region trees, plus higher-level composites
//! (`Dock`, `Stack`, `Grid`/`Columns`, `Flow`) specified as reductions
//! onto the solver.

mod composite;
mod constraint;
mod error;
mod flex;
mod layout;
mod solver;
mod spacing;

pub use composite::{ColumnOrder, Columns, Dock, Flow, FlowItem, Grid, Stack};
pub use constraint::Constraint;
pub use error::LayoutError;
pub use flex::Flex;
pub use layout::Layout;
pub use spacing::Spacing;
