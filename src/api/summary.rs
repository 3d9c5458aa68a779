use crate::filters::{ChoroplethFilters, ScatterFilters};

use super::number_format::format_fr;

/// Text shown in the scatter region when no observation matches.
pub const SCATTER_EMPTY_PLACEHOLDER: &str =
    "Aucune observation ne correspond aux filtres selectionnes.";

/// Summary shown alongside [`SCATTER_EMPTY_PLACEHOLDER`].
pub const SCATTER_EMPTY_SUMMARY: &str =
    "0 observation affichee pour cette combinaison de filtres.";

/// Picks the singular form for exactly one item and the plural otherwise.
#[must_use]
pub fn pluralize<'a>(count: f64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1.0 { singular } else { plural }
}

/// Sentence describing how many observations are drawn and which filters apply.
#[must_use]
pub fn scatter_summary(count: usize, filters: &ScatterFilters) -> String {
    let count_f = count as f64;
    let noun = pluralize(count_f, "observation", "observations");
    let participle = pluralize(count_f, "affichee", "affichees");

    let details = filters.active_details();
    let scope = if details.is_empty() {
        "l'ensemble du jeu de donnees".to_owned()
    } else {
        details.join(", ")
    };

    format!("{count} {noun} {participle} pour {scope}.")
}

/// Sentence giving the population total for the selected slice.
#[must_use]
pub fn choropleth_summary(total: f64, filters: &ChoroplethFilters) -> String {
    let noun = pluralize(total, "habitant", "habitants");
    format!(
        "{} {noun} ({}, tranche {}) en {}.",
        format_fr(total),
        filters.sex,
        filters.age,
        filters.year
    )
}
