//! Algorithmic core of an interactive graph sketching tool: a mutable
//! weighted-graph model with last-action undo, a Dijkstra shortest-path
//! engine running over immutable snapshots, and the glue that maps a found
//! path back to the edges a frontend should highlight.

pub mod graphs;
pub mod highlight;
pub mod queue;
pub mod search;
