//! Pure-Rust reader of legacy GeoIP `.dat` files.
//!
//! A database is a binary trie over address bits followed by a data section and a short trailer.
//! Every node holds two little-endian records, a record below `segment` points to the next node,
//! anything else is a leaf: either a value (country and region editions) or a pointer into the
//! data section.

pub use builder::{BuildError, CityEntry, DatBuilder, Network, NetworkError};

mod builder;
mod storage;
mod structure;

use storage::Storage;
use structure::{read_u24, StructureInfo};

use crate::geo::edition::{ORG_RECORD_LENGTH, STATE_BEGIN_REV0, STATE_BEGIN_REV1};
use crate::geo::tables::{country_by_id, UNKNOWN_COUNTRY};
use crate::geo::{
    Charset, DatabaseEdition, EngineTrait, GeoError, OpenError, OpenFlags, RawRecord, RawRegion,
    RawString,
};

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

const MAX_RECORD_LENGTH: usize = 300;
const CHECK_CACHE_INTERVAL: Duration = Duration::from_secs(1);

const US_OFFSET: u32 = 1;
const CANADA_OFFSET: u32 = 677;
const WORLD_OFFSET: u32 = 1353;
const FIPS_RANGE: u32 = 360;
const REV0_US_OFFSET: u32 = 1000;

/// Letters of a US state or Canadian province packed as `first * 26 + second`
fn region_letters(packed: u32) -> Option<String> {
    if packed >= 26 * 26 {
        return None;
    }
    let letters = [packed / 26, packed % 26]
        .iter()
        .map(|&letter| char::from(b'A' + letter as u8))
        .collect();
    Some(letters)
}

/// Addresses of the Teredo prefix `2001:0000::/32` carry the client address, inverted, in their
/// last 32 bits
fn teredo_client(address: Ipv6Addr) -> Option<Ipv6Addr> {
    let segments = address.segments();
    if segments[0] != 0x2001 || segments[1] != 0 {
        return None;
    }
    let client = !(u128::from(address) as u32);
    Some(Ipv6Addr::from(u128::from(client)))
}

struct Watched {
    path: PathBuf,
    modified: Option<SystemTime>,
    checked_at: Instant,
}

pub struct DatEngine {
    storage: Storage,
    structure: StructureInfo,
    flags: OpenFlags,
    teredo: bool,
    watched: Option<Watched>,
}

impl DatEngine {
    pub fn open(path: &Path, flags: OpenFlags) -> Result<Self, OpenError> {
        let (storage, structure) = Self::load(path, flags)?;
        let watched = if flags.contains(OpenFlags::CHECK_CACHE) {
            Some(Watched {
                path: path.to_owned(),
                modified: std::fs::metadata(path)?.modified().ok(),
                checked_at: Instant::now(),
            })
        } else {
            None
        };
        if !flags.contains(OpenFlags::SILENCE) {
            log::info!(
                r#"Opened {} database "{}""#,
                structure.edition,
                path.display()
            );
        }
        Ok(Self {
            storage,
            structure,
            flags,
            teredo: true,
            watched,
        })
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, OpenError> {
        let mut storage = Storage::Memory(data);
        let structure = StructureInfo::read(&mut storage)?;
        Ok(Self {
            storage,
            structure,
            flags: OpenFlags::MEMORY_CACHE,
            teredo: true,
            watched: None,
        })
    }

    fn load(path: &Path, flags: OpenFlags) -> Result<(Storage, StructureInfo), OpenError> {
        let mut storage = Storage::load(path, flags)?;
        let structure = StructureInfo::read(&mut storage)?;
        if flags.contains(OpenFlags::INDEX_CACHE) {
            let tree_size = structure.tree_size(storage.len());
            storage.cache_index(tree_size)?;
        }
        Ok((storage, structure))
    }

    /// Reloads the file if it changed on disk, at most once per [CHECK_CACHE_INTERVAL]
    fn reload_if_changed(&mut self) {
        let watched = match &mut self.watched {
            Some(watched) => watched,
            None => return,
        };
        if watched.checked_at.elapsed() < CHECK_CACHE_INTERVAL {
            return;
        }
        watched.checked_at = Instant::now();

        let modified = match std::fs::metadata(&watched.path).and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(error) => {
                log::warn!(
                    r#"Cannot check "{}" for updates: {}"#,
                    watched.path.display(),
                    error
                );
                return;
            }
        };
        if watched.modified == Some(modified) {
            return;
        }
        match Self::load(&watched.path, self.flags) {
            Ok((storage, structure)) => {
                log::info!(r#"Reloaded database "{}""#, watched.path.display());
                watched.modified = Some(modified);
                self.storage = storage;
                self.structure = structure;
            }
            Err(error) => log::warn!(
                r#"Failed to reload "{}", keeping previous data: {}"#,
                watched.path.display(),
                error
            ),
        }
    }

    /// Walks the tree, returning the leaf value and the number of bits consumed
    fn seek(&mut self, address: IpAddr) -> Result<(u32, u8), GeoError> {
        let address = match address {
            IpAddr::V6(v6) if self.teredo => teredo_client(v6).map_or(address, IpAddr::V6),
            _ => address,
        };
        let (bits, width) = match address {
            IpAddr::V4(v4) => (u128::from(u32::from(v4)), 32),
            IpAddr::V6(v6) => (u128::from(v6), 128),
        };

        let record_length = self.structure.record_length;
        let mut node = [0; 2 * ORG_RECORD_LENGTH];
        let node = &mut node[..2 * record_length];
        let mut offset = 0u32;
        for depth in (0..width).rev() {
            let position = u64::from(offset) * 2 * record_length as u64;
            if self.storage.read_at(position, node)? != node.len() {
                return Err(GeoError::Corrupted { offset: position });
            }
            let record = if (bits >> depth) & 1 == 1 {
                &node[record_length..]
            } else {
                &node[..record_length]
            };
            let value = record
                .iter()
                .rev()
                .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte));
            if value >= self.structure.segment {
                return Ok((value, (width - depth) as u8));
            }
            offset = value;
        }
        Err(GeoError::Corrupted {
            offset: u64::from(offset) * 2 * record_length as u64,
        })
    }

    fn read_record(&mut self, leaf: u32) -> Result<Vec<u8>, GeoError> {
        let offset = self.structure.record_offset(leaf);
        let mut record = vec![0; MAX_RECORD_LENGTH];
        let read = self.storage.read_at(offset, &mut record)?;
        if read == 0 {
            return Err(GeoError::Corrupted { offset });
        }
        record.truncate(read);
        Ok(record)
    }

    fn decode_city(&self, record: &[u8], netmask: u8) -> RawRecord {
        let mut cursor = Cursor::new(record);
        let country = country_by_id(u32::from(cursor.byte())).unwrap_or(&UNKNOWN_COUNTRY);
        let region = cursor.string();
        let city = cursor.string();
        let postal_code = cursor.string();
        let latitude = cursor.coordinate();
        let longitude = cursor.coordinate();
        let (metro_code, area_code) =
            if self.structure.edition.has_metro_codes() && country.code == "US" {
                let combo = cursor.u24();
                (Some(combo / 1000), Some(combo % 1000))
            } else {
                (None, None)
            };
        RawRecord {
            country_code: country.code.into(),
            country_code3: country.code3.into(),
            country_name: country.name.into(),
            region,
            city,
            postal_code,
            latitude,
            longitude,
            metro_code,
            area_code,
            charset: Charset::Utf8,
            continent_code: country.continent.into(),
            netmask,
        }
    }
}

/// Forgiving reader over a data record, a truncated record yields empty fields
struct Cursor<'a> {
    data: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn take(&mut self, n: usize) -> &'a [u8] {
        let (head, tail) = self.data.split_at(n.min(self.data.len()));
        self.data = tail;
        head
    }

    fn byte(&mut self) -> u8 {
        self.take(1).first().copied().unwrap_or(0)
    }

    fn u24(&mut self) -> u32 {
        read_u24(self.take(3))
    }

    fn coordinate(&mut self) -> f32 {
        (f64::from(self.u24()) / 10000.0 - 180.0) as f32
    }

    fn string(&mut self) -> RawString {
        let end = self
            .data
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(self.data.len());
        let value = self.take(end);
        self.take(1);
        RawString::new(value.to_vec(), Charset::Iso8859_1)
    }
}

impl EngineTrait for DatEngine {
    fn refresh(&mut self) {
        self.reload_if_changed();
    }

    fn edition(&self) -> DatabaseEdition {
        self.structure.edition
    }

    fn info(&mut self) -> Result<RawString, GeoError> {
        Ok(self.structure.database_info(&mut self.storage)?)
    }

    fn teredo(&self) -> bool {
        self.teredo
    }

    fn set_teredo(&mut self, enabled: bool) {
        self.teredo = enabled;
    }

    fn name_by_addr(&mut self, address: IpAddr) -> Result<(RawString, u8), GeoError> {
        let (leaf, netmask) = self.seek(address)?;
        if leaf == self.structure.segment {
            return Ok((RawString::default(), netmask));
        }
        let record = self.read_record(leaf)?;
        Ok((Cursor::new(&record).string(), netmask))
    }

    fn record_by_addr(&mut self, address: IpAddr) -> Result<(Option<RawRecord>, u8), GeoError> {
        let (leaf, netmask) = self.seek(address)?;
        if leaf == self.structure.segment {
            return Ok((None, netmask));
        }
        let record = self.read_record(leaf)?;
        Ok((Some(self.decode_city(&record, netmask)), netmask))
    }

    fn country_id_by_addr(&mut self, address: IpAddr) -> Result<(u32, u8), GeoError> {
        let (leaf, netmask) = self.seek(address)?;
        Ok((leaf - self.structure.segment, netmask))
    }

    fn region_by_addr(&mut self, address: Ipv4Addr) -> Result<Option<RawRegion>, GeoError> {
        let (leaf, _) = self.seek(IpAddr::V4(address))?;
        let country = |id: u32| {
            country_by_id(id).map(|country| RawRegion {
                country_code: country.code.into(),
                region: RawString::default(),
            })
        };
        let region = match self.structure.edition {
            DatabaseEdition::RegionRev0 => match leaf - STATE_BEGIN_REV0 {
                value if value >= REV0_US_OFFSET => {
                    region_letters(value - REV0_US_OFFSET).map(|letters| RawRegion {
                        country_code: "US".into(),
                        region: letters.into(),
                    })
                }
                id => country(id),
            },
            _ => match leaf - STATE_BEGIN_REV1 {
                0 => None,
                value if value < CANADA_OFFSET => Some(RawRegion {
                    country_code: "US".into(),
                    region: region_letters(value - US_OFFSET)
                        .map(RawString::from)
                        .unwrap_or_default(),
                }),
                value if value < WORLD_OFFSET => Some(RawRegion {
                    country_code: "CA".into(),
                    region: region_letters(value - CANADA_OFFSET)
                        .map(RawString::from)
                        .unwrap_or_default(),
                }),
                value => country((value - WORLD_OFFSET) / FIPS_RANGE),
            },
        };
        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{GeoRecord, Region};

    use std::io::Write;

    fn engine(builder: &DatBuilder) -> DatEngine {
        DatEngine::from_bytes(builder.build().unwrap()).unwrap()
    }

    fn record(engine: &mut DatEngine, address: &str) -> (Option<GeoRecord>, u8) {
        let (record, netmask) = engine.record_by_addr(address.parse().unwrap()).unwrap();
        (record.map(RawRecord::decode), netmask)
    }

    fn name(engine: &mut DatEngine, address: &str) -> (Option<String>, u8) {
        let (name, netmask) = engine.name_by_addr(address.parse().unwrap()).unwrap();
        (name.decode(), netmask)
    }

    fn region(engine: &mut DatEngine, address: &str) -> Option<Region> {
        engine
            .region_by_addr(address.parse().unwrap())
            .unwrap()
            .map(RawRegion::decode)
    }

    #[test]
    fn teredo_mapping() {
        let address: Ipv6Addr = "2001:0:4136:e378:8000:63bf:3fff:fdd2".parse().unwrap();
        assert_eq!(
            teredo_client(address),
            Some("::192.0.2.45".parse().unwrap())
        );
        assert_eq!(teredo_client("2001:db8::1".parse().unwrap()), None);
    }

    #[test]
    fn letters() {
        assert_eq!(region_letters(0).as_deref(), Some("AA"));
        assert_eq!(region_letters(2 * 26).as_deref(), Some("CA"));
        assert_eq!(region_letters(25 * 26 + 25).as_deref(), Some("ZZ"));
        assert_eq!(region_letters(26 * 26), None);
        assert_eq!(region_letters(191 * 26), None);
    }

    #[test]
    fn out_of_range_state_is_not_found() {
        // Both branches of the root lead to a state value past "ZZ"
        let leaf = STATE_BEGIN_REV0 + REV0_US_OFFSET + 191 * 26;
        let mut data = vec![];
        for _ in 0..2 {
            data.extend_from_slice(&leaf.to_le_bytes()[..3]);
        }
        data.extend_from_slice(&[0xFF, 0xFF, 0xFF, DatabaseEdition::RegionRev0 as u8]);
        let mut engine = DatEngine::from_bytes(data).unwrap();
        assert_eq!(engine.structure.edition, DatabaseEdition::RegionRev0);
        assert_eq!(region(&mut engine, "1.2.3.4"), None);
    }

    #[test]
    fn country_lookup_and_netmask() {
        let mut builder = DatBuilder::new(DatabaseEdition::Country);
        builder
            .insert_country(&"1.0.0.0/8".parse().unwrap(), "AU")
            .unwrap();
        builder
            .insert_country(&"1.2.0.0/16".parse().unwrap(), "CN")
            .unwrap();
        let mut engine = engine(&builder);

        let (id, netmask) = engine
            .country_id_by_addr("1.2.3.4".parse().unwrap())
            .unwrap();
        assert_eq!(country_by_id(id).unwrap().code, "CN");
        assert_eq!(netmask, 16);

        // The /16 split the /8 leaf, the remaining half ends one level deeper
        let (id, netmask) = engine
            .country_id_by_addr("1.128.0.1".parse().unwrap())
            .unwrap();
        assert_eq!(country_by_id(id).unwrap().code, "AU");
        assert_eq!(netmask, 9);

        let (id, netmask) = engine
            .country_id_by_addr("128.0.0.1".parse().unwrap())
            .unwrap();
        assert_eq!(id, 0);
        assert_eq!(netmask, 1);
    }

    #[test]
    fn city_records() {
        let mut builder = DatBuilder::new(DatabaseEdition::CityRev1);
        builder
            .insert_city(
                &"1.2.3.0/24".parse().unwrap(),
                &CityEntry {
                    country_code: "US".to_owned(),
                    region: Some("CA".to_owned()),
                    city: Some("Mountain View".to_owned()),
                    postal_code: Some("94043".to_owned()),
                    latitude: 37.386,
                    longitude: -122.0838,
                    metro_code: Some(807),
                    area_code: Some(650),
                },
            )
            .unwrap();
        builder
            .insert_city(
                &"5.6.0.0/16".parse().unwrap(),
                &CityEntry {
                    country_code: "DE".to_owned(),
                    city: Some("München".to_owned()),
                    latitude: 48.15,
                    longitude: 11.5833,
                    ..Default::default()
                },
            )
            .unwrap();
        let mut engine = engine(&builder);

        let (found, netmask) = record(&mut engine, "1.2.3.4");
        assert_eq!(netmask, 24);
        let found = found.unwrap();
        assert_eq!(found.country_code, "US");
        assert_eq!(found.country_code3, "USA");
        assert_eq!(found.country_name, "United States");
        assert_eq!(found.continent_code, "NA");
        assert_eq!(found.region.as_deref(), Some("CA"));
        assert_eq!(found.city.as_deref(), Some("Mountain View"));
        assert_eq!(found.postal_code.as_deref(), Some("94043"));
        assert!((found.latitude - 37.386).abs() < 1e-3);
        assert!((found.longitude + 122.0838).abs() < 1e-3);
        assert_eq!(found.metro_code, Some(807));
        assert_eq!(found.area_code, Some(650));
        assert_eq!(found.netmask, 24);

        let found = record(&mut engine, "5.6.7.8").0.unwrap();
        assert_eq!(found.city.as_deref(), Some("München"));
        assert_eq!(found.region, None);
        assert_eq!(found.metro_code, None);

        assert_eq!(record(&mut engine, "1.2.4.1"), (None, 22));
    }

    #[test]
    fn names_and_info() {
        let mut builder = DatBuilder::new(DatabaseEdition::Org);
        builder
            .insert_name(&"8.8.8.0/24".parse().unwrap(), "Google LLC")
            .unwrap();
        builder.set_info("GEO-106 20240101 Build 1");
        let mut engine = engine(&builder);

        assert_eq!(
            name(&mut engine, "8.8.8.8"),
            (Some("Google LLC".to_owned()), 24)
        );
        assert_eq!(name(&mut engine, "9.9.9.9").0, None);
        assert_eq!(
            engine.info().unwrap().decode().as_deref(),
            Some("GEO-106 20240101 Build 1")
        );
    }

    #[test]
    fn regions() {
        for edition in [DatabaseEdition::RegionRev0, DatabaseEdition::RegionRev1] {
            let mut builder = DatBuilder::new(edition);
            builder
                .insert_region(&"3.0.0.0/8".parse().unwrap(), "US", Some("NY"))
                .unwrap();
            builder
                .insert_region(&"4.0.0.0/8".parse().unwrap(), "FR", None)
                .unwrap();
            if edition == DatabaseEdition::RegionRev1 {
                builder
                    .insert_region(&"5.0.0.0/8".parse().unwrap(), "CA", Some("QC"))
                    .unwrap();
            }
            let mut engine = engine(&builder);

            assert_eq!(
                region(&mut engine, "3.1.1.1"),
                Some(Region {
                    country_code: "US".to_owned(),
                    region: Some("NY".to_owned()),
                })
            );
            assert_eq!(
                region(&mut engine, "4.1.1.1"),
                Some(Region {
                    country_code: "FR".to_owned(),
                    region: None,
                })
            );
            assert_eq!(region(&mut engine, "6.1.1.1"), None);
            if edition == DatabaseEdition::RegionRev1 {
                let quebec = region(&mut engine, "5.1.1.1").unwrap();
                assert_eq!(quebec.region.as_deref(), Some("QC"));
            }
        }
    }

    #[test]
    fn teredo_toggle() {
        let mut builder = DatBuilder::new(DatabaseEdition::CountryV6);
        builder
            .insert_country(&"::192.0.2.0/120".parse().unwrap(), "NL")
            .unwrap();
        let mut engine = engine(&builder);
        let address: IpAddr = "2001:0:4136:e378:8000:63bf:3fff:fdd2".parse().unwrap();

        assert!(engine.teredo());
        let (id, _) = engine.country_id_by_addr(address).unwrap();
        assert_eq!(country_by_id(id).unwrap().code, "NL");

        engine.set_teredo(false);
        let (id, _) = engine.country_id_by_addr(address).unwrap();
        assert_eq!(id, 0);
    }

    #[test]
    fn cache_modes_agree() {
        let mut builder = DatBuilder::new(DatabaseEdition::CityRev0);
        builder
            .insert_city(
                &"10.0.0.0/8".parse().unwrap(),
                &CityEntry {
                    country_code: "JP".to_owned(),
                    city: Some("Tokyo".to_owned()),
                    ..Default::default()
                },
            )
            .unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&builder.build().unwrap()).unwrap();

        for flags in [
            OpenFlags::STANDARD,
            OpenFlags::MEMORY_CACHE,
            OpenFlags::INDEX_CACHE,
            OpenFlags::MMAP_CACHE,
            OpenFlags::MEMORY_CACHE | OpenFlags::CHECK_CACHE,
        ] {
            let mut engine = DatEngine::open(file.path(), flags).unwrap();
            assert_eq!(engine.edition(), DatabaseEdition::CityRev0);
            let found = record(&mut engine, "10.1.2.3").0.unwrap();
            assert_eq!(found.city.as_deref(), Some("Tokyo"), "{:?}", flags);
        }
    }

    #[test]
    fn check_cache_reloads_changed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GeoIPOrg.dat");

        let mut builder = DatBuilder::new(DatabaseEdition::Org);
        builder
            .insert_name(&"1.0.0.0/8".parse().unwrap(), "Old")
            .unwrap();
        builder.write_to(&path).unwrap();
        let mut engine =
            DatEngine::open(&path, OpenFlags::MEMORY_CACHE | OpenFlags::CHECK_CACHE).unwrap();

        let mut builder = DatBuilder::new(DatabaseEdition::Org);
        builder
            .insert_name(&"1.0.0.0/8".parse().unwrap(), "New")
            .unwrap();
        builder.write_to(&path).unwrap();
        // Rewrites within one mtime tick are indistinguishable, pretend the old file is ancient
        if let Some(watched) = &mut engine.watched {
            watched.modified = Some(SystemTime::UNIX_EPOCH);
        }

        // Too early to look at the file again
        engine.refresh();
        assert_eq!(name(&mut engine, "1.1.1.1").0.as_deref(), Some("Old"));
        if let Some(watched) = &mut engine.watched {
            watched.checked_at -= CHECK_CACHE_INTERVAL;
        }
        // Lookups alone never touch the file
        assert_eq!(name(&mut engine, "1.1.1.1").0.as_deref(), Some("Old"));
        engine.refresh();
        assert_eq!(name(&mut engine, "1.1.1.1").0.as_deref(), Some("New"));
    }

    #[test]
    fn corrupted_tree() {
        let mut data = vec![0; 6 * 4];
        data.extend_from_slice(&[0xFF, 0xFF, 0xFF, 2, 4, 0, 0]);
        let mut engine = DatEngine::from_bytes(data).unwrap();
        // Every record points back to node 0, the walk runs out of bits
        assert!(matches!(
            engine.record_by_addr("1.2.3.4".parse().unwrap()),
            Err(GeoError::Corrupted { .. })
        ));
    }
}
