use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;
use url::Url;

use crate::utils::regex::first_capture;

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)").expect("Number regex should compile"));

/// Swaps the locale decimal comma for a dot: "25,4 g" -> "25.4 g"
pub(crate) fn normalize_decimal(text: &str) -> String {
    text.replace(',', ".")
}

/// Is capable of reading the first number out of:
/// 1. "25,4 g"
/// 2. "30g (2 scoops)"
/// 3. "< 0.5"
///
/// Anything without a digit is 0.
pub(crate) fn text_to_number(text: &str) -> f64 {
    let normalized = normalize_decimal(text);

    first_capture(&NUMBER_REGEX, &normalized)
        .and_then(|number| number.parse::<f64>().ok())
        .unwrap_or_else(|| {
            trace!("No number found in {text:?}");
            0.0
        })
}

/// Same as [`text_to_number`] but the number must be directly followed by
/// the unit captured in `unit_regex`; there is no fallback to a bare number.
pub(crate) fn text_to_number_with_unit(text: &str, unit_regex: &Regex) -> f64 {
    let normalized = normalize_decimal(text);

    first_capture(unit_regex, &normalized)
        .and_then(|number| number.parse::<f64>().ok())
        .unwrap_or_else(|| {
            trace!("No number with unit {} in {text:?}", unit_regex.as_str());
            0.0
        })
}

/// Builds the regex for a number immediately followed by `unit`.
pub(crate) fn number_with_unit_regex(unit: &str) -> Regex {
    Regex::new(&format!(r"([0-9]+(?:\.[0-9]+)?)\s*{}", regex::escape(unit)))
        .expect("Escaped unit should always compile")
}

/// Turns "/products/top-whey" into "https://maxtitanium.eu/products/top-whey".
pub(crate) fn absolute_url(base_url: &str, href: &str) -> Option<String> {
    let base = Url::parse(base_url).ok()?;

    base.join(href.trim()).ok().map(String::from)
}

/// Path after `marker`, without query string, fragment or trailing slash.
pub(crate) fn slug_from_url(url: &str, marker: &str) -> Option<String> {
    let (_, tail) = url.rsplit_once(marker)?;
    let slug = tail
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    if slug.is_empty() {
        return None;
    }

    Some(slug.to_string())
}

/// "top-whey-3w-sabor-900g" -> "Top Whey 3W Sabor 900G"
///
/// A letter is upper-cased when it does not follow another letter, every
/// other letter is lower-cased.
pub(crate) fn slug_to_title(slug: &str) -> String {
    let mut title = String::with_capacity(slug.len());
    let mut previous_is_letter = false;

    for character in slug.replace('-', " ").chars() {
        if character.is_alphabetic() {
            if previous_is_letter {
                title.extend(character.to_lowercase());
            } else {
                title.extend(character.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            title.push(character);
            previous_is_letter = false;
        }
    }

    title
}
