use chrono::NaiveDate;
use lazy_static::lazy_static;
use url::Url;

use db::rotation;

/// Subjects to search for when the caller supplies no keyword.
const MOOD_KEYWORDS: [&str; 7] = [
    "serene",
    "peaceful",
    "spiritual",
    "nature",
    "sunrise",
    "light",
    "hope",
];

lazy_static! {
    static ref STOCK_PHOTO_BASE: Url =
        Url::parse("https://images.unsplash.com/random").unwrap();
}

/// Builds a stock-photo URL to use as a scripture background.
///
/// With no keyword the mood rotates with the calendar day, so the result
/// is a pure function of its arguments. No network I/O happens here; the
/// URL is stored and handed to clients as-is.
pub fn fallback_image_url(keyword: Option<&str>, date: NaiveDate) -> String {
    let keyword = match keyword {
        Some(k) if !k.is_empty() => k,
        _ => {
            let index =
                rotation::rotation_index(rotation::days_since_epoch(date), MOOD_KEYWORDS.len());
            MOOD_KEYWORDS[index]
        }
    };

    let mut url = STOCK_PHOTO_BASE.clone();
    url.query_pairs_mut()
        .append_pair("query", keyword)
        .append_pair("w", "1280")
        .append_pair("h", "720")
        .append_pair("fit", "crop");
    url.into()
}
