//! Font Catalogue demo
//!
//! Enumerates installed fonts and prints the list under each sort criterion
//! and transformation.
//!
//! Run with: cargo run -p font-catalogue --example catalogue -- [settings.toml]
//!
//! Set `RUST_LOG=debug` to see model logging.

use std::sync::Arc;

use font_catalogue::logging::filter_directive;
use font_catalogue::model::{FontListModel, SortCriterion};
use font_catalogue::settings::CatalogueSettings;
use font_catalogue::source::DisplaySizeMetric;
use font_catalogue::text::FontDatabase;
use tracing_subscriber::EnvFilter;

const SHOWN: usize = 10;

fn print_list(title: &str, model: &FontListModel) {
    println!("{title} ({} fonts)", model.count());
    for index in 0..model.count().min(SHOWN) {
        println!("  {:>3}. {}", index + 1, model.label_at(index));
    }
    if model.count() > SHOWN {
        println!("  ... {} more", model.count() - SHOWN);
    }
    println!();
}

fn main() -> font_catalogue::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive("info")));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => CatalogueSettings::load_toml_or_default(path)?,
        None => CatalogueSettings::default(),
    };

    let db = Arc::new(FontDatabase::with_config(settings.font_database_config()));
    let model = FontListModel::from_source(&*db)?
        .with_display_metric(DisplaySizeMetric::new(db.clone()));

    model.apply_settings(&settings);
    print_list("As configured", &model);

    for criterion in SortCriterion::ALL {
        model.sort(criterion);
        print_list(&format!("Sorted by {criterion}"), &model);
    }

    model.reverse_order();
    print_list("Reversed order", &model);

    model.reverse_characters();
    print_list("Reversed characters", &model);

    if model.count() > 1 {
        let first = model.label_at(0);
        model.move_row(0, model.count() - 1);
        print_list(&format!("Moved {first} to the end"), &model);
    }

    model.reverse_characters();
    model.sort(SortCriterion::None);
    print_list("Insertion order", &model);

    println!("{}", model.settings_snapshot().to_toml_string()?);
    Ok(())
}
