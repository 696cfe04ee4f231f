//! Pure render derivations for the display pages
//!
//! Price strings are stored raw ("14900", "14900/15700") and only
//! formatted at render time. Chunking and poster layout are derived
//! from the section data so the pages stay dumb.

use shared::models::{MenuItem, MenuSection};

/// Format a raw price string for display.
///
/// Digits are grouped with '.' every three ("14900" becomes
/// "$ 14.900"). A '/' in the raw value marks a dual price and both
/// halves are formatted and joined with " / ". Anything without
/// digits formats to the empty string, never an error.
pub fn format_price(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if raw.contains('/') {
        let parts: Vec<String> = raw
            .split('/')
            .map(|p| digits_of(p.trim()))
            .filter(|d| !d.is_empty())
            .map(|d| group_thousands(&d))
            .collect();
        if parts.is_empty() {
            return String::new();
        }
        return format!("$ {}", parts.join(" / "));
    }

    let digits = digits_of(raw);
    if digits.is_empty() {
        return String::new();
    }
    format!("$ {}", group_thousands(&digits))
}

fn digits_of(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn group_thousands(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };

    let mut out = String::with_capacity(trimmed.len() + trimmed.len() / 3);
    let offset = trimmed.len() % 3;
    for (i, c) in trimmed.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Split a section's items into rows of at most `chunk_size`.
/// A zero chunk size renders as one item per row rather than looping.
pub fn chunk_items(items: &[MenuItem], chunk_size: u32) -> Vec<&[MenuItem]> {
    if items.is_empty() {
        return Vec::new();
    }
    items.chunks(chunk_size.max(1) as usize).collect()
}

/// Poster images shown beside a section's item chunks, keyed by
/// section id. Sections without posters render as plain lists.
pub fn section_posters(section_id: &str) -> &'static [&'static str] {
    match section_id {
        "cafeteria" => &["/listadocafeteria.png"],
        "comidas" => &["/listadocomida.png"],
        "hamburguesas" => &[
            "/comboshamburguesas1.png",
            "/comboshamburguesas2.png",
            "/comboshamburguesas3.png",
        ],
        "hamburguesapollo" => &["/comboshamburguesas4.png"],
        "ensaladas" => &["/ensaladas.png"],
        _ => &[],
    }
}

/// One rendered block: an item chunk with the poster that sits next
/// to it, if the section has posters left for this position.
#[derive(Debug, PartialEq)]
pub struct PosterBlock<'a> {
    pub poster: Option<&'static str>,
    pub items: &'a [MenuItem],
}

/// How a section lays out on the page.
#[derive(Debug, PartialEq)]
pub enum SectionLayout<'a> {
    /// No posters: one plain list of items
    Plain(&'a [MenuItem]),
    /// Posters: item chunks paired positionally with poster images
    Posters(Vec<PosterBlock<'a>>),
}

/// Derive the layout for a section from its chunk size and poster
/// table. Extra chunks beyond the poster count get no poster; extra
/// posters beyond the chunk count are dropped.
pub fn section_layout(section: &MenuSection) -> SectionLayout<'_> {
    let posters = section_posters(&section.id);
    if posters.is_empty() {
        return SectionLayout::Plain(&section.items);
    }

    let blocks = chunk_items(&section.items, section.chunk_size)
        .into_iter()
        .enumerate()
        .map(|(i, items)| PosterBlock {
            poster: posters.get(i).copied(),
            items,
        })
        .collect();
    SectionLayout::Posters(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            desc: None,
            price: "1000".to_string(),
        }
    }

    #[test]
    fn formats_thousands_with_dots() {
        assert_eq!(format_price("14900"), "$ 14.900");
        assert_eq!(format_price("900"), "$ 900");
        assert_eq!(format_price("2800"), "$ 2.800");
        assert_eq!(format_price("1234567"), "$ 1.234.567");
    }

    #[test]
    fn formats_dual_prices() {
        assert_eq!(format_price("14900/15700"), "$ 14.900 / 15.700");
        assert_eq!(format_price(" 14900 / 15700 "), "$ 14.900 / 15.700");
    }

    #[test]
    fn dual_price_with_one_bad_half_keeps_the_good_one() {
        assert_eq!(format_price("14900/"), "$ 14.900");
        assert_eq!(format_price("/15700"), "$ 15.700");
    }

    #[test]
    fn garbage_formats_to_empty() {
        assert_eq!(format_price(""), "");
        assert_eq!(format_price("   "), "");
        assert_eq!(format_price("consultar"), "");
        assert_eq!(format_price("abc/def"), "");
    }

    #[test]
    fn leading_zeros_are_dropped() {
        assert_eq!(format_price("014900"), "$ 14.900");
        assert_eq!(format_price("000"), "$ 0");
    }

    #[test]
    fn non_digit_noise_is_stripped() {
        assert_eq!(format_price("$14.900"), "$ 14.900");
        assert_eq!(format_price("14 900"), "$ 14.900");
    }

    #[test]
    fn chunks_split_by_size() {
        let items: Vec<MenuItem> = (0..7).map(|i| item(&format!("item-{i}"))).collect();
        let chunks = chunk_items(&items, 3);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }

    #[test]
    fn zero_chunk_size_falls_back_to_one_per_row() {
        let items: Vec<MenuItem> = (0..3).map(|i| item(&format!("item-{i}"))).collect();
        assert_eq!(chunk_items(&items, 0).len(), 3);
    }

    #[test]
    fn empty_items_yield_no_chunks() {
        assert!(chunk_items(&[], 3).is_empty());
    }

    #[test]
    fn sections_without_posters_lay_out_plain() {
        let section = MenuSection {
            id: "bebidas".to_string(),
            title: "BEBIDAS".to_string(),
            chunk_size: 3,
            items: vec![item("Agua")],
        };
        assert_eq!(section_layout(&section), SectionLayout::Plain(&section.items));
    }

    #[test]
    fn poster_sections_pair_chunks_with_posters() {
        let section = MenuSection {
            id: "hamburguesas".to_string(),
            title: "HAMBURGUESAS".to_string(),
            chunk_size: 2,
            items: (0..5).map(|i| item(&format!("burger-{i}"))).collect(),
        };

        let SectionLayout::Posters(blocks) = section_layout(&section) else {
            panic!("expected poster layout");
        };
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].poster, Some("/comboshamburguesas1.png"));
        assert_eq!(blocks[2].poster, Some("/comboshamburguesas3.png"));
        assert_eq!(blocks[2].items.len(), 1);
    }

    #[test]
    fn chunks_beyond_the_poster_count_get_none() {
        let section = MenuSection {
            id: "ensaladas".to_string(),
            title: "ENSALADAS".to_string(),
            chunk_size: 2,
            items: (0..5).map(|i| item(&format!("ensalada-{i}"))).collect(),
        };

        let SectionLayout::Posters(blocks) = section_layout(&section) else {
            panic!("expected poster layout");
        };
        assert_eq!(blocks[0].poster, Some("/ensaladas.png"));
        assert_eq!(blocks[1].poster, None);
        assert_eq!(blocks[2].poster, None);
    }
}
