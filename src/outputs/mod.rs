//! Output generation modules for the rendered feed.
//!
//! # Submodules
//!
//! - [`html`]: renders a `FeedPage` to a self-contained HTML page
//! - [`json`]: writes `FeedPage` snapshots for API consumption
//! - [`indexes`]: regenerates the `index.html` listing all editions
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2026-08-07/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//!
//! html_output_dir/
//! ├── 2026-08-07_morning.html
//! ├── 2026-08-07_evening.html
//! └── index.html
//! ```

pub mod html;
pub mod indexes;
pub mod json;
