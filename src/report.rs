//! `geoiplookup`-style answers.

use crate::geo::tables::{country_name_by_code, region_name_by_code};
use crate::geo::{AddressFamily, EditionKind, GeoError, GeoRecord};
use crate::GeoIp;

const NOT_FOUND: &str = "IP Address not found";

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

fn city_line(record: &GeoRecord, with_metro: bool) -> String {
    let region_name = record
        .region
        .as_deref()
        .and_then(|region| region_name_by_code(&record.country_code, region));
    let mut line = format!(
        "{}, {}, {}, {}, {}, {:.6}, {:.6}",
        record.country_code,
        or_na(record.region.as_deref()),
        or_na(region_name),
        or_na(record.city.as_deref()),
        or_na(record.postal_code.as_deref()),
        record.latitude,
        record.longitude,
    );
    if with_metro {
        line += &format!(
            ", {}, {}",
            record.metro_code.unwrap_or(0),
            record.area_code.unwrap_or(0)
        );
    }
    line
}

/// One line answering where `address` is according to `db`, `None` if `db` is closed
pub fn report(db: &GeoIp, address: &str) -> Result<Option<String>, GeoError> {
    let edition = match db.database_edition()? {
        Some(edition) => edition,
        None => return Ok(None),
    };
    let v6 = edition.family() == AddressFamily::V6;

    let answer = match edition.kind() {
        EditionKind::Country => {
            let result = if v6 {
                db.country_v6(address)?
            } else {
                db.country(address)?
            };
            result.country_code.map(|code| {
                format!(
                    "{}, {}",
                    code,
                    country_name_by_code(code).unwrap_or_default()
                )
            })
        }
        EditionKind::Region => db.region(address)?.map(|region| {
            format!(
                "{}, {}",
                region.country_code,
                or_na(region.region.as_deref())
            )
        }),
        EditionKind::City => {
            let result = if v6 {
                db.lookup_ipv6_city(address)?
            } else {
                db.lookup_ipv4_city(address)?
            };
            result
                .record
                .map(|record| city_line(&record, edition.has_metro_codes()))
        }
        EditionKind::Name => {
            let result = if v6 {
                db.name_v6(address)?
            } else {
                db.name(address)?
            };
            result.name
        }
        EditionKind::Other => {
            return Err(GeoError::WrongDatabaseType {
                actual: edition,
                lookup: "report",
            })
        }
    };
    Ok(Some(format!(
        "{}: {}",
        edition,
        answer.as_deref().unwrap_or(NOT_FOUND)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::dat::{CityEntry, DatBuilder};
    use crate::geo::DatabaseEdition;

    #[test]
    fn country_lines() {
        let mut builder = DatBuilder::new(DatabaseEdition::Country);
        builder
            .insert_country(&"8.8.8.0/24".parse().unwrap(), "US")
            .unwrap();
        let db = GeoIp::from_bytes(builder.build().unwrap()).unwrap();
        assert_eq!(
            report(&db, "8.8.8.8").unwrap().as_deref(),
            Some("GeoIP Country Edition: US, United States")
        );
        assert_eq!(
            report(&db, "9.9.9.9").unwrap().as_deref(),
            Some("GeoIP Country Edition: IP Address not found")
        );
        assert!(matches!(
            report(&db, "nine"),
            Err(GeoError::InvalidAddress { .. })
        ));

        db.close();
        assert_eq!(report(&db, "8.8.8.8").unwrap(), None);
    }

    #[test]
    fn city_line_format() {
        let mut builder = DatBuilder::new(DatabaseEdition::CityRev1);
        builder
            .insert_city(
                &"1.2.3.0/24".parse().unwrap(),
                &CityEntry {
                    country_code: "US".to_owned(),
                    region: Some("CA".to_owned()),
                    city: Some("Mountain View".to_owned()),
                    latitude: 37.5,
                    longitude: -122.25,
                    metro_code: Some(807),
                    area_code: Some(650),
                    ..Default::default()
                },
            )
            .unwrap();
        let db = GeoIp::from_bytes(builder.build().unwrap()).unwrap();
        assert_eq!(
            report(&db, "1.2.3.4").unwrap().as_deref(),
            Some(
                "GeoIP City Edition, Rev 1: US, CA, California, Mountain View, N/A, \
                 37.500000, -122.250000, 807, 650"
            )
        );
    }

    #[test]
    fn region_and_name_lines() {
        let mut builder = DatBuilder::new(DatabaseEdition::RegionRev0);
        builder
            .insert_region(&"3.0.0.0/8".parse().unwrap(), "US", Some("TX"))
            .unwrap();
        let db = GeoIp::from_bytes(builder.build().unwrap()).unwrap();
        assert_eq!(
            report(&db, "3.3.3.3").unwrap().as_deref(),
            Some("GeoIP Region Edition, Rev 0: US, TX")
        );

        let mut builder = DatBuilder::new(DatabaseEdition::AsnumV6);
        builder
            .insert_name(&"2001:4860::/32".parse().unwrap(), "AS15169 Google LLC")
            .unwrap();
        let db = GeoIp::from_bytes(builder.build().unwrap()).unwrap();
        assert_eq!(
            report(&db, "2001:4860::8888").unwrap().as_deref(),
            Some("GeoIP ASNum V6 Edition: AS15169 Google LLC")
        );
    }
}
