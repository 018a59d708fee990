//! Korean administrative region normalization.
//!
//! Work24 mixes abbreviated and official province names freely ("서울",
//! "서울시", "서울특별시"). Matching is a table lookup plus a suffix heuristic
//! for the city/county/district level; it is approximate on purpose.

/// Abbreviated or colloquial province token -> official name.
pub const REGION_MAPPINGS: &[(&str, &str)] = &[
    // Special / metropolitan cities
    ("서울", "서울특별시"),
    ("서울시", "서울특별시"),
    ("부산", "부산광역시"),
    ("부산시", "부산광역시"),
    ("대구", "대구광역시"),
    ("대구시", "대구광역시"),
    ("인천", "인천광역시"),
    ("인천시", "인천광역시"),
    ("광주", "광주광역시"),
    ("광주시", "광주광역시"),
    ("대전", "대전광역시"),
    ("대전시", "대전광역시"),
    ("울산", "울산광역시"),
    ("울산시", "울산광역시"),
    // Special self-governing city / provinces
    ("세종", "세종특별자치시"),
    ("세종시", "세종특별자치시"),
    ("강원", "강원특별자치도"),
    ("강원도", "강원특별자치도"),
    ("전북", "전북특별자치도"),
    ("전라북", "전북특별자치도"),
    ("전라북도", "전북특별자치도"),
    ("제주", "제주특별자치도"),
    ("제주도", "제주특별자치도"),
    // Provinces
    ("경기", "경기도"),
    ("경남", "경상남도"),
    ("경상남", "경상남도"),
    ("경북", "경상북도"),
    ("경상북", "경상북도"),
    ("충남", "충청남도"),
    ("충청남", "충청남도"),
    ("충북", "충청북도"),
    ("충청북", "충청북도"),
    ("전남", "전라남도"),
    ("전라남", "전라남도"),
];

/// Full or colloquial form -> the short form users type into filters.
/// Ordered so that a longer form is always replaced before any of its prefixes.
const SHORT_FORMS: &[(&str, &str)] = &[
    ("세종특별자치시", "세종"),
    ("강원특별자치도", "강원"),
    ("전북특별자치도", "전북"),
    ("제주특별자치도", "제주"),
    ("서울특별시", "서울"),
    ("부산광역시", "부산"),
    ("대구광역시", "대구"),
    ("인천광역시", "인천"),
    ("광주광역시", "광주"),
    ("대전광역시", "대전"),
    ("울산광역시", "울산"),
    ("경상남도", "경남"),
    ("경상북도", "경북"),
    ("충청남도", "충남"),
    ("충청북도", "충북"),
    ("전라남도", "전남"),
    ("전라북도", "전북"),
    ("경상남", "경남"),
    ("경상북", "경북"),
    ("충청남", "충남"),
    ("충청북", "충북"),
    ("전라남", "전남"),
    ("전라북", "전북"),
    ("강원도", "강원"),
    ("제주도", "제주"),
    ("경기도", "경기"),
    ("서울시", "서울"),
    ("부산시", "부산"),
    ("대구시", "대구"),
    ("인천시", "인천"),
    ("대전시", "대전"),
    ("울산시", "울산"),
    ("광주시", "광주"),
    ("세종시", "세종"),
];

/// Suffixes marking a city (시), county (군) or district (구).
const DISTRICT_SUFFIXES: [char; 3] = ['시', '군', '구'];

fn lookup(token: &str) -> Option<&'static str> {
    REGION_MAPPINGS
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, canonical)| *canonical)
}

/// Map the first segment of a region phrase to its official province name.
///
/// Unrecognized segments pass through unchanged, so official names are fixed
/// points. Empty or whitespace-only input is returned as is.
pub fn normalize_region(token: &str) -> String {
    match token.split_whitespace().next() {
        Some(first) => lookup(first).unwrap_or(first).to_string(),
        None => token.to_string(),
    }
}

/// Split a work-location phrase into (province, district).
///
/// The district is the first later segment ending in 시/군/구.
pub fn parse_region(phrase: &str) -> (Option<String>, Option<String>) {
    let mut parts = phrase.split_whitespace();
    let Some(first) = parts.next() else {
        return (None, None);
    };

    let district = parts
        .find(|part| part.ends_with(DISTRICT_SUFFIXES))
        .map(str::to_string);

    (Some(normalize_region(first)), district)
}

/// Reduce every full or colloquial province name in `text` to its short form.
///
/// This is the inverse direction of [`normalize_region`] and is applied to both
/// sides of a region filter comparison.
pub fn shorten_region(text: &str) -> String {
    let mut out = text.trim().to_string();
    for (long, short) in SHORT_FORMS {
        if out.contains(long) {
            out = out.replace(long, short);
        }
    }
    out
}

/// Whether a resolved work region satisfies a user-supplied region filter.
pub fn region_matches(work_region: &str, filter: &str) -> bool {
    let needle = shorten_region(filter);
    if needle.is_empty() {
        return true;
    }
    !work_region.is_empty() && shorten_region(work_region).contains(&needle)
}
