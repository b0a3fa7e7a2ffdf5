/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  *.dat (`;`-delimited)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → DataTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ DataTable │  rectangular Vec<Vec<f64>>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Series   │  (x, y) columns + legend label
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
