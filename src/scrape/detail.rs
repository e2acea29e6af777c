// src/scrape/detail.rs
// =============================================================================
// This module enriches a partial record from the exhibitor's own page.
//
// Three fields are pulled from the detail page:
// - about the company: long description block, or a padded div fallback
// - categories: the category list, with the "SHOT - " style labels removed
// - press releases: a second padded div
//
// Each field is a FieldRule: an ordered list of CSS selectors (first match
// wins) plus a cleanup step. A field whose selectors all miss is an empty
// string.
// =============================================================================

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::info;

use super::record::{DetailFields, ExhibitorRecord, PartialRecord};
use crate::fetch::Fetcher;

// How to find and clean up one field on the detail page
struct FieldRule {
    selectors: &'static [&'static Lazy<Selector>],
    clean: fn(String) -> String,
}

impl FieldRule {
    fn extract(&self, document: &Html) -> String {
        self.selectors
            .iter()
            .find_map(|selector| document.select(selector).next())
            .map(|element| (self.clean)(element.text().collect()))
            .unwrap_or_default()
    }
}

static LONG_DESCRIPTION: Lazy<Selector> = Lazy::new(|| css("div.longString"));
static DESCRIPTION_BLOCK: Lazy<Selector> =
    Lazy::new(|| css(r#"div[style="padding:0px 5px 40px 5px;"]"#));
static CATEGORY_LIST: Lazy<Selector> = Lazy::new(|| css("ul.ffListHelper"));
static PRESS_RELEASE_BLOCK: Lazy<Selector> =
    Lazy::new(|| css(r#"div[style="padding:0px 5px 10px 5px;"]"#));

static ABOUT_RULE: FieldRule = FieldRule {
    selectors: &[&LONG_DESCRIPTION, &DESCRIPTION_BLOCK],
    clean: clean_description,
};

static CATEGORIES_RULE: FieldRule = FieldRule {
    selectors: &[&CATEGORY_LIST],
    clean: clean_categories,
};

static PRESS_RELEASES_RULE: FieldRule = FieldRule {
    selectors: &[&PRESS_RELEASE_BLOCK],
    clean: std::convert::identity,
};

fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("detail page selector is valid")
}

// "(less)" is the label of the page's collapse toggle
fn clean_description(text: String) -> String {
    text.replace("(less)", "").trim().to_string()
}

fn clean_categories(text: String) -> String {
    text.replace("SHOT - ", "")
        .replace("Supplier - ", "")
        .trim_start_matches(',')
        .to_string()
}

// Reads the three enrichment fields from a detail page
pub fn extract_details(document: &Html) -> DetailFields {
    DetailFields {
        about_company: ABOUT_RULE.extract(document),
        categories: CATEGORIES_RULE.extract(document),
        press_releases: PRESS_RELEASES_RULE.extract(document),
    }
}

// Fetches the record's company page and fills in the enrichment fields
//
// If the page can't be fetched the enrichment fields are left empty; the
// Fetcher has already logged why. Only enriched records are echoed.
pub async fn enrich(fetcher: &Fetcher, partial: PartialRecord) -> ExhibitorRecord {
    let Some(document) = fetcher.fetch(&partial.link_company).await else {
        return ExhibitorRecord::new(partial, DetailFields::default());
    };

    let record = ExhibitorRecord::new(partial, extract_details(&document));
    info!(
        record = %serde_json::to_string(&record).unwrap_or_default(),
        "Enriched {}",
        record.company_name
    );
    record
}
