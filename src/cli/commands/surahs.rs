//! Surahs command handler

use quran_range::core::SurahCatalog;

/// Print the catalog in canonical order
pub fn run(catalog: &SurahCatalog, names_only: bool) {
    if names_only {
        for (number, name) in catalog.list_options() {
            println!("{number:>3}  {name}");
        }
        return;
    }

    println!("{:>3}  {:<16} {:>6}  Name", "#", "Transliteration", "Verses");
    for surah in catalog.iter() {
        println!(
            "{:>3}  {:<16} {:>6}  {}",
            surah.number, surah.english_name, surah.verse_count, surah.name
        );
    }
    println!(
        "\n{} surahs, {} verses",
        catalog.len(),
        catalog.total_verses()
    );
}
