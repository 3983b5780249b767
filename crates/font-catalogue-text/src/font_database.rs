//! Font database management and text measurement.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use font_catalogue_core::{CatalogueError, Result};
use font_catalogue_core::logging::{span_names, targets};
use fontdb::ID as FontFaceId;
use parking_lot::Mutex;

/// Default point size used when measuring text.
const DEFAULT_POINT_SIZE: f64 = 17.0;

/// Configuration for initializing the font database.
#[derive(Debug, Clone)]
pub struct FontDatabaseConfig {
    /// Whether to load system fonts on initialization.
    pub load_system_fonts: bool,
    /// Additional directories scanned for font files.
    pub font_dirs: Vec<PathBuf>,
    /// Point size that measured widths are scaled to.
    pub point_size: f64,
}

impl Default for FontDatabaseConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            font_dirs: Vec::new(),
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl FontDatabaseConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to load system fonts on initialization.
    pub fn load_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// Add a directory to scan for font files.
    pub fn font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dirs.push(dir.into());
        self
    }

    /// Set the point size used for measurement.
    pub fn point_size(mut self, size: f64) -> Self {
        self.point_size = size;
        self
    }
}

/// Information about a loaded font face.
#[derive(Debug, Clone)]
pub struct FontFaceInfo {
    /// The unique identifier for this font face.
    pub id: FontFaceId,
    /// The family names this face belongs to.
    pub families: Vec<String>,
    /// The PostScript name of this face.
    pub post_script_name: String,
    /// Whether this is a monospaced font.
    pub monospaced: bool,
}

impl FontFaceInfo {
    fn from_fontdb(face: &fontdb::FaceInfo) -> Self {
        Self {
            id: face.id,
            families: face.families.iter().map(|(name, _)| name.clone()).collect(),
            post_script_name: face.post_script_name.clone(),
            monospaced: face.monospaced,
        }
    }

    /// The name this face is listed under: its PostScript name, or its first
    /// family name when the PostScript name is empty.
    pub fn display_name(&self) -> Option<&str> {
        if !self.post_script_name.is_empty() {
            Some(self.post_script_name.as_str())
        } else {
            self.families.first().map(String::as_str)
        }
    }

    /// Returns true if `name` matches this face's PostScript or family name,
    /// ignoring ASCII case.
    pub fn matches(&self, name: &str) -> bool {
        self.post_script_name.eq_ignore_ascii_case(name)
            || self.families.iter().any(|f| f.eq_ignore_ascii_case(name))
    }
}

/// The font database enumerates installed fonts and measures text in them.
///
/// Measurements are cached per `(font, text)` pair, since sorting by display
/// size measures every label and parsing a face is comparatively expensive.
///
/// # Example
///
/// ```no_run
/// use font_catalogue_text::FontDatabase;
///
/// let db = FontDatabase::new();
/// println!("{} faces loaded", db.face_count());
/// ```
pub struct FontDatabase {
    db: fontdb::Database,
    point_size: f64,
    measure_cache: Mutex<HashMap<(String, String), Option<f64>>>,
}

impl FontDatabase {
    /// Create a new font database with default configuration.
    ///
    /// This loads all system fonts, which may take a noticeable moment
    /// depending on the number of fonts installed.
    pub fn new() -> Self {
        Self::with_config(FontDatabaseConfig::default())
    }

    /// Create a new font database with custom configuration.
    pub fn with_config(config: FontDatabaseConfig) -> Self {
        let _span = tracing::debug_span!(target: targets::TEXT, span_names::ENUMERATE).entered();
        let mut db = fontdb::Database::new();
        if config.load_system_fonts {
            db.load_system_fonts();
        }
        for dir in &config.font_dirs {
            db.load_fonts_dir(dir);
        }
        tracing::debug!(
            target: targets::TEXT,
            faces = db.len(),
            dirs = config.font_dirs.len(),
            "font database initialized"
        );

        Self {
            db,
            point_size: config.point_size,
            measure_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Get a reference to the underlying font database.
    pub fn database(&self) -> &fontdb::Database {
        &self.db
    }

    /// Returns the point size measurements are scaled to.
    pub fn point_size(&self) -> f64 {
        self.point_size
    }

    /// Load a font file from disk.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.db
            .load_font_file(path)
            .map_err(|e| CatalogueError::FontLoad(format!("{}: {e}", path.display())))?;
        self.measure_cache.get_mut().clear();
        Ok(())
    }

    /// Load font data from memory.
    ///
    /// The data should be the raw contents of a TTF, OTF, TTC, or OTC file.
    /// Unparseable data is skipped by the database without an error.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
        self.measure_cache.get_mut().clear();
    }

    /// Load all fonts from a directory.
    ///
    /// This recursively scans the directory for TTF, OTF, TTC, and OTC files.
    pub fn load_fonts_dir(&mut self, path: impl AsRef<Path>) {
        self.db.load_fonts_dir(path);
        self.measure_cache.get_mut().clear();
    }

    /// Get the number of loaded font faces.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Iterate over all loaded font faces.
    pub fn faces(&self) -> impl Iterator<Item = FontFaceInfo> + '_ {
        self.db.faces().map(FontFaceInfo::from_fontdb)
    }

    /// Names of all loaded faces, in database order, without duplicates.
    pub fn font_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.faces()
            .filter_map(|face| face.display_name().map(str::to_owned))
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    /// Get all unique font family names in the database, sorted.
    pub fn family_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .db
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Find the face listed under `name`.
    ///
    /// PostScript names are preferred over family names.
    pub fn find_face(&self, name: &str) -> Option<FontFaceInfo> {
        let faces: Vec<FontFaceInfo> = self.faces().filter(|f| f.matches(name)).collect();
        faces
            .iter()
            .find(|f| f.post_script_name.eq_ignore_ascii_case(name))
            .or_else(|| faces.first())
            .cloned()
    }

    /// Measure the rendered advance width of `text` set in the font `font_name`.
    ///
    /// Returns `None` when no face matches or the face cannot be parsed.
    /// Characters without a glyph use the `.notdef` advance.
    pub fn measure_text(&self, font_name: &str, text: &str) -> Option<f64> {
        let key = (font_name.to_owned(), text.to_owned());
        if let Some(cached) = self.measure_cache.lock().get(&key) {
            return *cached;
        }

        let width = self.find_face(font_name).and_then(|face| {
            self.db
                .with_face_data(face.id, |data, face_index| {
                    ttf_parser::Face::parse(data, face_index)
                        .ok()
                        .map(|parsed| advance_width(&parsed, text, self.point_size))
                })
                .flatten()
        });

        if width.is_none() {
            tracing::warn!(
                target: targets::TEXT,
                font = font_name,
                "unable to measure text, font not found or unreadable"
            );
        }

        self.measure_cache.lock().insert(key, width);
        width
    }
}

/// Sum of horizontal advances of `text` in `face`, scaled to `point_size`.
fn advance_width(face: &ttf_parser::Face<'_>, text: &str, point_size: f64) -> f64 {
    let units_per_em = f64::from(face.units_per_em().max(1));
    let units: f64 = text
        .chars()
        .map(|c| {
            let glyph = face.glyph_index(c).unwrap_or(ttf_parser::GlyphId(0));
            f64::from(face.glyph_hor_advance(glyph).unwrap_or(0))
        })
        .sum();
    units * point_size / units_per_em
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontDatabase")
            .field("face_count", &self.face_count())
            .field("point_size", &self.point_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_database() -> FontDatabase {
        FontDatabase::with_config(FontDatabaseConfig::new().load_system_fonts(false))
    }

    fn face(post_script_name: &str, families: &[&str]) -> FontFaceInfo {
        FontFaceInfo {
            id: fontdb::ID::dummy(),
            families: families.iter().map(|s| s.to_string()).collect(),
            post_script_name: post_script_name.to_string(),
            monospaced: false,
        }
    }

    #[test]
    fn test_database_creation() {
        let db = empty_database();
        assert_eq!(db.face_count(), 0);
        assert!(db.font_names().is_empty());
        assert!(db.family_names().is_empty());
        assert_eq!(db.point_size(), DEFAULT_POINT_SIZE);
    }

    #[test]
    fn test_config_builder() {
        let config = FontDatabaseConfig::new()
            .load_system_fonts(false)
            .font_dir("/usr/share/fonts")
            .point_size(12.0);

        assert!(!config.load_system_fonts);
        assert_eq!(config.font_dirs, vec![PathBuf::from("/usr/share/fonts")]);
        assert_eq!(config.point_size, 12.0);
    }

    #[test]
    fn test_display_name_prefers_post_script_name() {
        assert_eq!(
            face("Arial-BoldMT", &["Arial"]).display_name(),
            Some("Arial-BoldMT")
        );
        assert_eq!(face("", &["Arial"]).display_name(), Some("Arial"));
        assert_eq!(face("", &[]).display_name(), None);
    }

    #[test]
    fn test_face_matching_ignores_case() {
        let info = face("Helvetica-Bold", &["Helvetica"]);
        assert!(info.matches("helvetica-bold"));
        assert!(info.matches("HELVETICA"));
        assert!(!info.matches("Helvetica Neue"));
    }

    #[test]
    fn test_garbage_font_data_is_skipped() {
        let mut db = empty_database();
        db.load_font_data(vec![0u8; 64]);
        assert_eq!(db.face_count(), 0);
    }

    #[test]
    fn test_missing_font_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut db = empty_database();
        let err = db.load_font_file(dir.path().join("missing.ttf")).unwrap_err();
        assert!(matches!(err, CatalogueError::FontLoad(_)));
    }

    #[test]
    fn test_measure_unknown_font() {
        let db = empty_database();
        assert_eq!(db.measure_text("NoSuchFont", "NoSuchFont"), None);
        // Second lookup is served from the cache.
        assert_eq!(db.measure_text("NoSuchFont", "NoSuchFont"), None);
        assert_eq!(db.measure_cache.lock().len(), 1);
    }

    const TUFFY: &[u8] = include_bytes!("../tests/fonts/Tuffy.ttf");

    fn tuffy_database(point_size: f64) -> FontDatabase {
        let mut db = FontDatabase::with_config(
            FontDatabaseConfig::new()
                .load_system_fonts(false)
                .point_size(point_size),
        );
        db.load_font_data(TUFFY.to_vec());
        db
    }

    #[test]
    fn test_enumerate_loaded_face() {
        let db = tuffy_database(DEFAULT_POINT_SIZE);
        assert_eq!(db.face_count(), 1);
        assert_eq!(db.font_names(), vec!["Tuffy"]);
        assert_eq!(db.family_names(), vec!["Tuffy"]);

        let face = db.find_face("tuffy").unwrap();
        assert_eq!(face.post_script_name, "Tuffy");
    }

    #[test]
    fn test_measure_text_in_face() {
        let db = tuffy_database(DEFAULT_POINT_SIZE);

        let single = db.measure_text("Tuffy", "W").unwrap();
        assert!(single > 0.0);
        let double = db.measure_text("Tuffy", "WW").unwrap();
        assert!((double - 2.0 * single).abs() < 1e-9);
        assert_eq!(db.measure_text("Tuffy", ""), Some(0.0));

        // Family lookup is case-insensitive.
        assert_eq!(db.measure_text("TUFFY", "W"), Some(single));
    }

    #[test]
    fn test_measure_scales_with_point_size() {
        let small = tuffy_database(10.0).measure_text("Tuffy", "Tuffy").unwrap();
        let large = tuffy_database(20.0).measure_text("Tuffy", "Tuffy").unwrap();
        assert!((large - 2.0 * small).abs() < 1e-9);
    }

    #[test]
    fn test_measure_long_text() {
        let db = tuffy_database(DEFAULT_POINT_SIZE);
        let single = db.measure_text("Tuffy", "W").unwrap();

        let repeats = 200_000;
        let long = db.measure_text("Tuffy", &"W".repeat(repeats)).unwrap();
        assert!((long - single * repeats as f64).abs() < 1e-3);
    }

    #[test]
    fn test_loading_clears_measure_cache() {
        let mut db = empty_database();
        assert_eq!(db.measure_text("Tuffy", "W"), None);

        db.load_font_data(TUFFY.to_vec());
        assert!(db.measure_text("Tuffy", "W").is_some());
    }

    #[test]
    fn test_empty_font_dir() {
        let dir = tempfile::tempdir().unwrap();
        let db = FontDatabase::with_config(
            FontDatabaseConfig::new()
                .load_system_fonts(false)
                .font_dir(dir.path()),
        );
        assert_eq!(db.face_count(), 0);
    }
}
