//! Static lookup tables shared by all databases.
//!
//! Region codes are the FIPS 10-4 codes used by legacy databases, except for the United States
//! and Canada which use postal letter codes.

mod countries;
mod regions;
mod time_zones;

use countries::COUNTRIES;
use regions::REGION_NAMES;
use time_zones::{COUNTRY_TIME_ZONES, REGION_TIME_ZONES};

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Country {
    pub code: &'static str,
    pub code3: &'static str,
    pub name: &'static str,
    pub continent: &'static str,
}

impl Country {
    const fn new(
        code: &'static str,
        code3: &'static str,
        name: &'static str,
        continent: &'static str,
    ) -> Self {
        Self {
            code,
            code3,
            name,
            continent,
        }
    }
}

/// Placeholder stored under id 0
pub(crate) const UNKNOWN_COUNTRY: Country = COUNTRIES[0];

/// Country stored under `id`, id 0 is the "unknown" placeholder and yields `None`
pub fn country_by_id(id: u32) -> Option<&'static Country> {
    match id {
        0 => None,
        id => COUNTRIES.get(usize::try_from(id).ok()?),
    }
}

pub fn country_id_by_code(code: &str) -> Option<u32> {
    COUNTRIES
        .iter()
        .skip(1)
        .position(|country| country.code.eq_ignore_ascii_case(code))
        .map(|index| index as u32 + 1)
}

fn country_by_code(code: &str) -> Option<&'static Country> {
    country_id_by_code(code).and_then(country_by_id)
}

/// Country name for a two-letter country code, `None` for unknown codes
pub fn country_name_by_code(code: &str) -> Option<&'static str> {
    country_by_code(code).map(|country| country.name)
}

pub fn country_code3_by_code(code: &str) -> Option<&'static str> {
    country_by_code(code).map(|country| country.code3)
}

pub fn continent_by_code(code: &str) -> Option<&'static str> {
    country_by_code(code).map(|country| country.continent)
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_uppercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_uppercase()))
}

/// Binary search in a table sorted by country then region
fn find_region(
    table: &[(&str, &str, &'static str)],
    country_code: &str,
    region_code: &str,
) -> Option<&'static str> {
    table
        .binary_search_by(|(country, region, _)| {
            cmp_ignore_case(country, country_code)
                .then_with(|| cmp_ignore_case(region, region_code))
        })
        .ok()
        .map(|index| table[index].2)
}

pub fn region_name_by_code(country_code: &str, region_code: &str) -> Option<&'static str> {
    find_region(REGION_NAMES, country_code, region_code)
}

/// Time zone of a region, or of the whole country when it has a single one
pub fn time_zone_by_country_and_region(
    country_code: &str,
    region_code: Option<&str>,
) -> Option<&'static str> {
    region_code
        .and_then(|region_code| find_region(REGION_TIME_ZONES, country_code, region_code))
        .or_else(|| {
            COUNTRY_TIME_ZONES
                .iter()
                .find(|(country, _)| country.eq_ignore_ascii_case(country_code))
                .map(|(_, zone)| *zone)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        assert_eq!(country_id_by_code("US"), Some(225));
        assert_eq!(country_by_id(225).unwrap().code3, "USA");
        assert_eq!(country_id_by_code("AP"), Some(1));
        assert_eq!(country_by_id(0), None);
        assert_eq!(country_by_id(256), None);
        assert_eq!(country_id_by_code("--"), None);
        assert_eq!(country_id_by_code("XX"), None);
    }

    #[test]
    fn duplicated_other_resolves_to_first_id() {
        let id = country_id_by_code("O1").unwrap();
        assert_eq!(id, 246);
        assert_eq!(country_by_id(255).unwrap().code, "O1");
    }

    #[test]
    fn names() {
        assert_eq!(country_name_by_code("de"), Some("Germany"));
        assert_eq!(country_name_by_code("ZZ"), None);
        assert_eq!(continent_by_code("BR"), Some("SA"));
        assert_eq!(country_code3_by_code("GB"), Some("GBR"));
    }

    #[test]
    fn region_names() {
        assert_eq!(region_name_by_code("US", "CA"), Some("California"));
        assert_eq!(region_name_by_code("CA", "QC"), Some("Quebec"));
        assert_eq!(region_name_by_code("US", "ZZ"), None);
        assert_eq!(region_name_by_code("FR", "A8"), Some("Ile-de-France"));
        assert_eq!(region_name_by_code("gb", "h9"), Some("London, City of"));
        assert_eq!(region_name_by_code("DE", "16"), Some("Berlin"));
        assert_eq!(region_name_by_code("RU", "48"), Some("Moscow City"));
        assert_eq!(region_name_by_code("AU", "02"), Some("New South Wales"));
        assert_eq!(region_name_by_code("BR", "27"), Some("Sao Paulo"));
        assert_eq!(region_name_by_code("FR", "16"), None);
    }

    #[test]
    fn region_tables_are_sorted() {
        for table in [REGION_NAMES, REGION_TIME_ZONES] {
            assert!(table
                .windows(2)
                .all(|pair| (pair[0].0, pair[0].1) < (pair[1].0, pair[1].1)));
        }
    }

    #[test]
    fn region_time_zones_exist_for_known_regions() {
        for (country, region, _) in REGION_TIME_ZONES {
            assert!(
                region_name_by_code(country, region).is_some(),
                "{} {}",
                country,
                region
            );
        }
    }

    #[test]
    fn time_zones() {
        assert_eq!(
            time_zone_by_country_and_region("US", Some("NY")),
            Some("America/New_York")
        );
        assert_eq!(time_zone_by_country_and_region("US", None), None);
        assert_eq!(
            time_zone_by_country_and_region("DE", None),
            Some("Europe/Berlin")
        );
        assert_eq!(
            time_zone_by_country_and_region("FR", Some("A8")),
            Some("Europe/Paris")
        );
        assert_eq!(
            time_zone_by_country_and_region("BR", Some("27")),
            Some("America/Sao_Paulo")
        );
        assert_eq!(
            time_zone_by_country_and_region("BR", Some("04")),
            Some("America/Manaus")
        );
        assert_eq!(
            time_zone_by_country_and_region("RU", Some("48")),
            Some("Europe/Moscow")
        );
        assert_eq!(
            time_zone_by_country_and_region("RU", Some("59")),
            Some("Asia/Vladivostok")
        );
        assert_eq!(
            time_zone_by_country_and_region("AU", Some("08")),
            Some("Australia/West")
        );
        assert_eq!(
            time_zone_by_country_and_region("mx", Some("02")),
            Some("America/Tijuana")
        );
        assert_eq!(
            time_zone_by_country_and_region("ES", Some("53")),
            Some("Atlantic/Canary")
        );
        assert_eq!(
            time_zone_by_country_and_region("NZ", Some("10")),
            Some("Pacific/Chatham")
        );
        assert_eq!(
            time_zone_by_country_and_region("NZ", Some("E7")),
            Some("Pacific/Auckland")
        );
        // No single zone to fall back to
        assert_eq!(time_zone_by_country_and_region("BR", None), None);
        assert_eq!(time_zone_by_country_and_region("RU", Some("99")), None);
    }
}
