/// Graph algorithms module
///
/// Path search over built graphs. The search itself has no failure modes
/// beyond "no path", so it reports absence with `Option` rather than an
/// error type.

pub mod shortest_path;

pub use shortest_path::{find_shortest_path, path_weight};
