//! Font database access for Font Catalogue.
//!
//! This crate wraps `fontdb` and `ttf-parser` to answer the two questions the
//! catalogue asks of the host font system:
//!
//! - which fonts are installed (the names shown in the list), and
//! - how wide a piece of text renders in a given font (the display size key).
//!
//! ```no_run
//! use font_catalogue_text::{FontDatabase, FontDatabaseConfig};
//!
//! let db = FontDatabase::with_config(FontDatabaseConfig::new().point_size(17.0));
//! for name in db.font_names() {
//!     let width = db.measure_text(&name, &name);
//!     println!("{name}: {width:?}");
//! }
//! ```

mod font_database;

pub use font_database::{FontDatabase, FontDatabaseConfig, FontFaceInfo};
