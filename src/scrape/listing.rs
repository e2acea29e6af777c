// src/scrape/listing.rs
// =============================================================================
// This module turns the exhibitor listing page into partial records.
//
// The listing is a table; each exhibitor is a row like:
//
//   <tr class="ffTableSet" id="1000024_123">
//     <td><a href="exhibitor/view.php?id=123">Acme Corp</a></td>
//     <td><a href="floorplan/view.php?booth=4021">4021</a></td>
//   </tr>
//
// First anchor = company, second anchor (optional) = booth.
// Links in the page are relative, so they are glued onto a base URL taken
// from the listing URL itself.
// =============================================================================

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::record::PartialRecord;

// Number of '/'-separated pieces of the listing URL that make up the base.
// For "https://host/a/b/c/..." the pieces are "https:", "", "host", "a", "b", "c".
const BASE_URL_SEGMENTS: usize = 6;

static EXHIBITOR_ROW: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"tr.ffTableSet[id^="1000024_"]"#).expect("exhibitor row selector is valid")
});

static ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("anchor selector is valid"));

// Keeps the first six '/'-separated segments of a URL
//
// Example:
//   "https://n1b.goexposoftware.com/events/ss24/goExpo/exhibitor/list.php"
//   -> "https://n1b.goexposoftware.com/events/ss24/goExpo"
pub fn derive_base_url(url: &str) -> String {
    url.split('/')
        .take(BASE_URL_SEGMENTS)
        .collect::<Vec<_>>()
        .join("/")
}

// Extracts one PartialRecord per exhibitor row, in document order
//
// Rows without any anchor are skipped. Links are built as
// base_url + "/" + href with no normalisation.
pub fn parse_listing(document: &Html, base_url: &str) -> Vec<PartialRecord> {
    let mut records = Vec::new();

    for row in document.select(&EXHIBITOR_ROW) {
        let anchors: Vec<ElementRef> = row.select(&ANCHOR).collect();

        let Some(company) = anchors.first() else {
            continue;
        };

        let company_name = element_text(company);
        if company_name.trim().is_empty() {
            debug!(row_id = row.value().id().unwrap_or(""), "Skipping row without a company name");
            continue;
        }

        let (booth_number, link_booth) = match anchors.get(1) {
            Some(booth) => (element_text(booth), absolute_link(base_url, booth)),
            None => (String::new(), String::new()),
        };

        records.push(PartialRecord {
            company_name,
            link_company: absolute_link(base_url, company),
            booth_number,
            link_booth,
        });
    }

    records
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

// A missing href is treated as empty, giving "base_url/". Deliberately not
// a "None" placeholder segment, which would point at a page that doesn't exist.
fn absolute_link(base_url: &str, anchor: &ElementRef) -> String {
    let href = anchor.value().attr("href").unwrap_or("");
    format!("{}/{}", base_url, href)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://expo.example.com/events/ss24/goExpo";

    fn listing(rows: &str) -> Html {
        Html::parse_document(&format!("<html><body><table>{}</table></body></html>", rows))
    }

    #[test]
    fn test_derive_base_url_keeps_six_segments() {
        assert_eq!(
            derive_base_url(
                "https://n1b.goexposoftware.com/events/ss24/goExpo/exhibitor/listExhibitorProfiles.php"
            ),
            "https://n1b.goexposoftware.com/events/ss24/goExpo"
        );
        assert_eq!(
            derive_base_url("https://example.com/a/b/c/d/e/f/g/h"),
            "https://example.com/a/b/c"
        );
    }

    #[test]
    fn test_derive_base_url_short_url_unchanged() {
        assert_eq!(derive_base_url("https://example.com/a"), "https://example.com/a");
    }

    #[test]
    fn test_no_matching_rows() {
        let doc = listing(r#"<tr class="other" id="1000024_1"><td><a href="x">X</a></td></tr>"#);
        assert!(parse_listing(&doc, BASE).is_empty());

        let doc = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert!(parse_listing(&doc, BASE).is_empty());
    }

    #[test]
    fn test_row_with_two_anchors() {
        let doc = listing(
            r#"<tr class="ffTableSet" id="1000024_7">
                 <td><a href="exhibitor/view.php?id=7">Acme Corp</a></td>
                 <td><a href="floorplan/view.php?booth=4021">4021</a></td>
               </tr>"#,
        );
        let records = parse_listing(&doc, BASE);

        assert_eq!(
            records,
            vec![PartialRecord {
                company_name: "Acme Corp".to_string(),
                link_company: format!("{}/exhibitor/view.php?id=7", BASE),
                booth_number: "4021".to_string(),
                link_booth: format!("{}/floorplan/view.php?booth=4021", BASE),
            }]
        );
    }

    #[test]
    fn test_row_with_one_anchor_has_empty_booth() {
        let doc = listing(
            r#"<tr class="ffTableSet" id="1000024_8"><td><a href="exhibitor/view.php?id=8">Solo Ltd</a></td></tr>"#,
        );
        let records = parse_listing(&doc, BASE);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company_name, "Solo Ltd");
        assert_eq!(records[0].link_company, format!("{}/exhibitor/view.php?id=8", BASE));
        assert_eq!(records[0].booth_number, "");
        assert_eq!(records[0].link_booth, "");
    }

    #[test]
    fn test_rows_without_anchors_or_prefix_are_skipped() {
        let doc = listing(
            r#"<tr class="ffTableSet" id="1000024_1"><td>no link</td></tr>
               <tr class="ffTableSet" id="2000000_2"><td><a href="b">Wrong Prefix</a></td></tr>
               <tr class="ffTableSet"><td><a href="c">No Id</a></td></tr>
               <tr class="ffTableSet" id="1000024_3"><td><a href="d">Kept</a></td></tr>"#,
        );
        let records = parse_listing(&doc, BASE);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company_name, "Kept");
    }

    #[test]
    fn test_document_order_and_duplicates_kept() {
        let doc = listing(
            r#"<tr class="ffTableSet alt" id="1000024_1"><td><a href="z">Zeta</a></td></tr>
               <tr class="ffTableSet" id="1000024_2"><td><a href="a">Alpha</a></td></tr>
               <tr class="ffTableSet" id="1000024_3"><td><a href="a">Alpha</a></td></tr>"#,
        );
        let names: Vec<_> = parse_listing(&doc, BASE)
            .into_iter()
            .map(|r| r.company_name)
            .collect();

        assert_eq!(names, vec!["Zeta", "Alpha", "Alpha"]);
    }

    #[test]
    fn test_links_are_concatenated_verbatim() {
        let doc = listing(
            r#"<tr class="ffTableSet" id="1000024_1"><td><a href="/abs/path">Slash</a></td></tr>
               <tr class="ffTableSet" id="1000024_2"><td><a>No Href</a></td></tr>"#,
        );
        let records = parse_listing(&doc, BASE);

        assert_eq!(records[0].link_company, format!("{}//abs/path", BASE));
        assert_eq!(records[1].link_company, format!("{}/", BASE));
    }

    #[test]
    fn test_blank_company_name_is_skipped() {
        let doc = listing(
            r#"<tr class="ffTableSet" id="1000024_1"><td><a href="x">  </a></td></tr>"#,
        );
        assert!(parse_listing(&doc, BASE).is_empty());
    }
}
