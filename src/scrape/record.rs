// src/scrape/record.rs
// =============================================================================
// The data that flows through the pipeline.
//
// - PartialRecord: what the listing page tells us about one exhibitor
// - DetailFields: what the exhibitor's own page adds
// - ExhibitorRecord: both combined, every field a plain String
//
// Records are plain values. A worker takes ownership of a PartialRecord and
// hands back a new ExhibitorRecord; nothing is shared or mutated in place.
// =============================================================================

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRecord {
    pub company_name: String,
    pub link_company: String,
    pub booth_number: String,
    pub link_booth: String,
}

// Enrichment fields; the default (all empty) is used when the detail page
// can't be fetched or an element is missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub about_company: String,
    pub categories: String,
    pub press_releases: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExhibitorRecord {
    pub company_name: String,
    pub link_company: String,
    pub booth_number: String,
    pub link_booth: String,
    pub about_company: String,
    pub categories: String,
    pub press_releases: String,
}

impl ExhibitorRecord {
    pub fn new(partial: PartialRecord, details: DetailFields) -> Self {
        Self {
            company_name: partial.company_name,
            link_company: partial.link_company,
            booth_number: partial.booth_number,
            link_booth: partial.link_booth,
            about_company: details.about_company,
            categories: details.categories,
            press_releases: details.press_releases,
        }
    }

    // Fields in output column order
    pub fn columns(&self) -> [&str; 7] {
        [
            &self.company_name,
            &self.link_company,
            &self.booth_number,
            &self.link_booth,
            &self.about_company,
            &self.categories,
            &self.press_releases,
        ]
    }
}
