//! Use-Cases der Application-Layer-Orchestrierung.

pub mod content;
pub mod exchange;
pub mod room_graph;
