//! `swn-metrics` — network statistics over built interaction graphs.
//!
//! All operations are read-only; a built `InteractionGraph` may be shared
//! across concurrent metric computations.
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`paths`]       | `DistanceHistogram`, average shortest path length    |
//! | [`clustering`]  | directed local clustering coefficient                |
//! | [`components`]  | weak-component labeling, connectivity coverage       |
//! | [`error`]       | `MetricsError`, `MetricsResult`                      |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs per-source BFS on Rayon's thread pool.         |

pub mod clustering;
pub mod components;
pub mod error;
pub mod paths;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clustering::{clustering, ClusteringResult};
pub use components::{connectivity, ConnectivityReport};
pub use error::{MetricsError, MetricsResult};
pub use paths::{
    average_path_length, distance_histogram, distance_histogram_sampled, DistanceHistogram,
};
