use crate::canonical_ip::CanonicalIpAddr;
use crate::geo::dat::DatEngine;
use crate::geo::tables::country_by_id;
use crate::geo::{
    AddressFamily, Backend, CityResult, CountryResult, DatabaseEdition, EditionKind, Engine,
    EngineTrait, GeoError, GeoRecord, NameResult, OpenError, OpenFlags, RawRecord, RawRegion,
    Region,
};

use lazy_static::lazy_static;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

/// Locations tried by [GeoIp::open] when no path is given
pub const DEFAULT_PATHS: [&str; 4] = [
    "/usr/share/GeoIP/GeoIP.dat",
    "/usr/share/local/GeoIP/GeoIP.dat",
    "/usr/local/share/GeoIP/GeoIP.dat",
    "/opt/local/share/GeoIP/GeoIP.dat",
];

pub const DEFAULT_DIRECTORY: &str = "/usr/share/GeoIP";

lazy_static! {
    static ref CUSTOM_DIRECTORY: RwLock<Option<PathBuf>> = RwLock::new(None);
}

/// Sets the directory used by [GeoIp::open_type] for the rest of the process
pub fn set_custom_directory<P: AsRef<Path>>(dir: P) {
    let dir = dir.as_ref();
    #[cfg(feature = "libgeoip")]
    crate::geo::native::setup_custom_directory(dir);
    *CUSTOM_DIRECTORY
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(dir.to_owned());
}

pub fn data_directory() -> PathBuf {
    CUSTOM_DIRECTORY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY))
}

/// What lookups on a closed or never-opened handle do.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosedPolicy {
    /// Return empty results
    #[default]
    Lenient,
    /// Fail with [GeoError::Closed]
    Strict,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct OpenOptions {
    pub flags: OpenFlags,
    pub backend: Backend,
    pub teredo: bool,
    pub closed: ClosedPolicy,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            flags: OpenFlags::MEMORY_CACHE,
            backend: Backend::default(),
            teredo: true,
            closed: ClosedPolicy::default(),
        }
    }
}

fn parse_address(address: &str) -> Result<IpAddr, GeoError> {
    let ip: IpAddr = address
        .parse()
        .map_err(|source| GeoError::InvalidAddress {
            address: address.to_owned(),
            source,
        })?;
    Ok(ip.to_canonical_ip())
}

fn parse_v4(address: &str) -> Result<Ipv4Addr, GeoError> {
    match parse_address(address)? {
        IpAddr::V4(v4) => Ok(v4),
        IpAddr::V6(_) => Err(GeoError::WrongAddressFamily {
            address: address.to_owned(),
            expected: AddressFamily::V4,
        }),
    }
}

fn parse_v6(address: &str) -> Result<Ipv6Addr, GeoError> {
    match parse_address(address)? {
        IpAddr::V6(v6) => Ok(v6),
        IpAddr::V4(_) => Err(GeoError::WrongAddressFamily {
            address: address.to_owned(),
            expected: AddressFamily::V6,
        }),
    }
}

fn parse_for(family: AddressFamily, address: &str) -> Result<IpAddr, GeoError> {
    match family {
        AddressFamily::V4 => parse_v4(address).map(IpAddr::V4),
        AddressFamily::V6 => parse_v6(address).map(IpAddr::V6),
    }
}

fn check_edition(
    engine: &Engine,
    kind: EditionKind,
    family: AddressFamily,
    lookup: &'static str,
) -> Result<(), GeoError> {
    let edition = engine.edition();
    if edition.kind() == kind && edition.family() == family {
        Ok(())
    } else {
        Err(GeoError::WrongDatabaseType {
            actual: edition,
            lookup,
        })
    }
}

/// Handle of one opened GeoIP database.
///
/// Lookups lock the handle for the duration of the engine call, a handle can be shared between
/// threads. Strings are decoded after the lock is released. Closing is idempotent, a closed
/// handle answers according to its [ClosedPolicy].
#[derive(Default)]
pub struct GeoIp {
    engine: Mutex<Option<Engine>>,
    policy: ClosedPolicy,
}

impl GeoIp {
    /// Opens the first database of `paths` that exists with the memory cache, [DEFAULT_PATHS]
    /// are tried when `paths` is empty
    pub fn open<I, P>(paths: I) -> Result<Self, GeoError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::open_with(paths, &OpenOptions::default())
    }

    pub fn open_default() -> Result<Self, GeoError> {
        Self::open(DEFAULT_PATHS)
    }

    pub fn open_with<I, P>(paths: I, options: &OpenOptions) -> Result<Self, GeoError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut paths: Vec<PathBuf> = paths
            .into_iter()
            .map(|path| path.as_ref().to_owned())
            .collect();
        if paths.is_empty() {
            paths = DEFAULT_PATHS.iter().map(PathBuf::from).collect();
        }

        let mut last_error = None;
        for path in &paths {
            if let Err(error) = std::fs::metadata(path) {
                if error.kind() == std::io::ErrorKind::NotFound {
                    log::debug!(r#"GeoIP database "{}" doesn't exist"#, path.display());
                } else {
                    log::warn!(r#"Cannot access "{}": {}"#, path.display(), error);
                }
                continue;
            }
            match Engine::open(path, options.flags, options.backend) {
                Ok(engine) => return Ok(Self::from_engine(engine, options)),
                Err(source) => {
                    log::warn!(r#"Cannot open "{}": {}"#, path.display(), source);
                    last_error = Some(GeoError::Open {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }
        Err(last_error.unwrap_or(GeoError::NotFound { paths }))
    }

    /// Opens the conventional file of `edition` in [data_directory]
    pub fn open_type(edition: DatabaseEdition) -> Result<Self, GeoError> {
        Self::open_type_with(edition, &OpenOptions::default())
    }

    pub fn open_type_with(
        edition: DatabaseEdition,
        options: &OpenOptions,
    ) -> Result<Self, GeoError> {
        let directory = data_directory();
        #[cfg(feature = "libgeoip")]
        {
            if options.backend == Backend::Native {
                return crate::geo::native::NativeEngine::open_type(edition, options.flags)
                    .map(|engine| Self::from_engine(engine.into(), options))
                    .map_err(|source| GeoError::Open {
                        path: directory.join(edition.file_name().unwrap_or_default()),
                        source,
                    });
            }
        }
        match edition.file_name() {
            Some(file_name) => Self::open_with([directory.join(file_name)], options),
            None => Err(GeoError::NotFound { paths: vec![] }),
        }
    }

    /// Database held in memory, no file involved
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, OpenError> {
        let engine = DatEngine::from_bytes(data)?;
        Ok(Self::from_engine(engine.into(), &OpenOptions::default()))
    }

    fn from_engine(mut engine: Engine, options: &OpenOptions) -> Self {
        engine.set_teredo(options.teredo);
        Self {
            engine: Mutex::new(Some(engine)),
            policy: options.closed,
        }
    }

    pub fn with_closed_policy(mut self, policy: ClosedPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Option<Engine>> {
        // Engines are not left half-updated by a panic, the data is still valid
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` under the lock on an engine that has picked up changes of its file
    fn with_engine<T, F>(&self, f: F) -> Result<T, GeoError>
    where
        T: Default,
        F: FnOnce(&mut Engine) -> Result<T, GeoError>,
    {
        match self.lock().as_mut() {
            Some(engine) => {
                engine.refresh();
                f(engine)
            }
            None => match self.policy {
                ClosedPolicy::Lenient => Ok(T::default()),
                ClosedPolicy::Strict => Err(GeoError::Closed),
            },
        }
    }

    /// Releases the database, later calls behave as on a never-opened handle
    pub fn close(&self) {
        if let Some(engine) = self.lock().take() {
            log::debug!("Closing {} database", engine.edition());
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    pub fn database_edition(&self) -> Result<Option<DatabaseEdition>, GeoError> {
        self.with_engine(|engine| Ok(Some(engine.edition())))
    }

    pub fn database_info(&self) -> Result<Option<String>, GeoError> {
        let info = self.with_engine(|engine| engine.info())?;
        Ok(info.decode())
    }

    pub fn enable_teredo(&self) -> Result<(), GeoError> {
        self.with_engine(|engine| {
            engine.set_teredo(true);
            Ok(())
        })
    }

    pub fn disable_teredo(&self) -> Result<(), GeoError> {
        self.with_engine(|engine| {
            engine.set_teredo(false);
            Ok(())
        })
    }

    pub fn teredo(&self) -> Result<bool, GeoError> {
        self.with_engine(|engine| Ok(engine.teredo()))
    }

    fn name_lookup(&self, address: &str, family: AddressFamily) -> Result<NameResult, GeoError> {
        let (name, netmask) = self.with_engine(|engine| {
            check_edition(engine, EditionKind::Name, family, "name")?;
            let ip = parse_for(family, address)?;
            engine.name_by_addr(ip)
        })?;
        Ok(NameResult {
            name: name.decode(),
            netmask,
        })
    }

    /// Name and netmask from organization, ISP, ASN and similar databases
    pub fn name(&self, address: &str) -> Result<NameResult, GeoError> {
        self.name_lookup(address, AddressFamily::V4)
    }

    pub fn name_v6(&self, address: &str) -> Result<NameResult, GeoError> {
        self.name_lookup(address, AddressFamily::V6)
    }

    /// Name of the organization owning `address`, `None` on any failure
    pub fn org(&self, address: &str) -> Option<String> {
        match self.name(address) {
            Ok(result) => result.name,
            Err(error) => {
                log::warn!("Organization lookup failed: {}", error);
                None
            }
        }
    }

    fn city_lookup(&self, address: &str, family: AddressFamily) -> Result<CityResult, GeoError> {
        let (record, netmask) = self.with_engine(|engine| {
            check_edition(engine, EditionKind::City, family, "city")?;
            let ip = parse_for(family, address)?;
            engine.record_by_addr(ip)
        })?;
        Ok(CityResult {
            record: record.map(RawRecord::decode),
            netmask,
        })
    }

    /// City record of an IPv4 address, unmatched addresses keep the netmask of their range
    pub fn lookup_ipv4_city(&self, address: &str) -> Result<CityResult, GeoError> {
        self.city_lookup(address, AddressFamily::V4)
    }

    pub fn lookup_ipv6_city(&self, address: &str) -> Result<CityResult, GeoError> {
        self.city_lookup(address, AddressFamily::V6)
    }

    pub fn record(&self, address: &str) -> Option<GeoRecord> {
        match self.lookup_ipv4_city(address) {
            Ok(result) => result.record,
            Err(error) => {
                log::debug!("City lookup failed: {}", error);
                None
            }
        }
    }

    fn country_lookup(
        &self,
        address: &str,
        family: AddressFamily,
    ) -> Result<CountryResult, GeoError> {
        self.with_engine(|engine| {
            check_edition(engine, EditionKind::Country, family, "country")?;
            let ip = parse_for(family, address)?;
            let (id, netmask) = engine.country_id_by_addr(ip)?;
            Ok(CountryResult {
                country_code: country_by_id(id).map(|country| country.code),
                netmask,
            })
        })
    }

    pub fn country(&self, address: &str) -> Result<CountryResult, GeoError> {
        self.country_lookup(address, AddressFamily::V4)
    }

    pub fn country_v6(&self, address: &str) -> Result<CountryResult, GeoError> {
        self.country_lookup(address, AddressFamily::V6)
    }

    pub fn region(&self, address: &str) -> Result<Option<Region>, GeoError> {
        let region = self.with_engine(|engine| {
            check_edition(engine, EditionKind::Region, AddressFamily::V4, "region")?;
            let ip = parse_v4(address)?;
            engine.region_by_addr(ip)
        })?;
        Ok(region.map(RawRegion::decode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::dat::{CityEntry, DatBuilder};
    use crate::geo::tables::region_name_by_code;

    fn country_db() -> Vec<u8> {
        let mut builder = DatBuilder::new(DatabaseEdition::Country);
        for (network, country) in [
            ("1.0.0.0/8", "AU"),
            ("2.2.0.0/16", "FR"),
            ("3.3.3.0/24", "US"),
            ("4.4.4.4/32", "DE"),
        ] {
            builder
                .insert_country(&network.parse().unwrap(), country)
                .unwrap();
        }
        builder.set_info("GEO-106FREE 20240101 Build 1");
        builder.build().unwrap()
    }

    fn city_db(edition: DatabaseEdition) -> Vec<u8> {
        let (first, second) = match edition.family() {
            AddressFamily::V4 => ("1.2.3.0/24", "10.0.0.0/8"),
            AddressFamily::V6 => ("2001:db8::/32", "2a00::/16"),
        };
        let mut builder = DatBuilder::new(edition);
        builder
            .insert_city(
                &first.parse().unwrap(),
                &CityEntry {
                    country_code: "US".to_owned(),
                    region: Some("CA".to_owned()),
                    city: Some("San Francisco".to_owned()),
                    postal_code: Some("94107".to_owned()),
                    latitude: 37.7697,
                    longitude: -122.3933,
                    metro_code: Some(807),
                    area_code: Some(415),
                },
            )
            .unwrap();
        builder
            .insert_city(
                &second.parse().unwrap(),
                &CityEntry {
                    country_code: "GB".to_owned(),
                    city: Some("London".to_owned()),
                    latitude: 51.5142,
                    longitude: -0.0931,
                    ..Default::default()
                },
            )
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeoIp>();
    }

    #[test]
    fn never_opened_handle_is_lenient() {
        let geoip = GeoIp::default();
        assert!(!geoip.is_open());
        assert_eq!(geoip.name("1.2.3.4").unwrap(), NameResult::default());
        assert_eq!(geoip.org("1.2.3.4"), None);
        assert_eq!(geoip.lookup_ipv4_city("1.2.3.4").unwrap(), CityResult::default());
        assert_eq!(geoip.lookup_ipv6_city("::1").unwrap(), CityResult::default());
        assert_eq!(geoip.record("1.2.3.4"), None);
        assert_eq!(geoip.country("1.2.3.4").unwrap(), CountryResult::default());
        assert_eq!(geoip.country_v6("::1").unwrap(), CountryResult::default());
        assert_eq!(geoip.region("1.2.3.4").unwrap(), None);
        assert_eq!(geoip.database_edition().unwrap(), None);
        assert_eq!(geoip.database_info().unwrap(), None);
        assert!(!geoip.teredo().unwrap());
        geoip.enable_teredo().unwrap();
        // Nothing is validated without a database
        assert_eq!(geoip.country("not an address").unwrap(), CountryResult::default());
    }

    #[test]
    fn strict_policy_reports_closed() {
        let geoip = GeoIp::default().with_closed_policy(ClosedPolicy::Strict);
        assert!(matches!(geoip.name("1.2.3.4"), Err(GeoError::Closed)));
        assert!(matches!(geoip.country("garbage"), Err(GeoError::Closed)));
        assert!(matches!(geoip.database_edition(), Err(GeoError::Closed)));
        assert_eq!(geoip.org("1.2.3.4"), None);
    }

    #[test]
    fn close_is_idempotent() {
        let geoip = GeoIp::from_bytes(country_db()).unwrap();
        assert!(geoip.is_open());
        assert_eq!(geoip.country("3.3.3.3").unwrap().country_code, Some("US"));
        geoip.close();
        geoip.close();
        assert!(!geoip.is_open());
        assert_eq!(geoip.country("3.3.3.3").unwrap(), CountryResult::default());

        let geoip = geoip.with_closed_policy(ClosedPolicy::Strict);
        assert!(matches!(geoip.country("3.3.3.3"), Err(GeoError::Closed)));
    }

    #[test]
    fn first_existing_candidate_is_opened() {
        let dir = tempfile::tempdir().unwrap();
        let candidates: Vec<_> = (0..4)
            .map(|i| dir.path().join(format!("GeoIP{}.dat", i)))
            .collect();
        std::fs::write(&candidates[2], country_db()).unwrap();
        std::fs::write(&candidates[3], city_db(DatabaseEdition::CityRev1)).unwrap();

        let geoip = GeoIp::open(&candidates).unwrap();
        assert_eq!(
            geoip.database_edition().unwrap(),
            Some(DatabaseEdition::Country)
        );
        assert_eq!(
            geoip.database_info().unwrap().as_deref(),
            Some("GEO-106FREE 20240101 Build 1")
        );
    }

    #[test]
    fn open_failures() {
        let dir = tempfile::tempdir().unwrap();
        let missing = [dir.path().join("a.dat"), dir.path().join("b.dat")];
        match GeoIp::open(&missing) {
            Err(GeoError::NotFound { paths }) => assert_eq!(paths, missing),
            _ => panic!("missing files must give NotFound"),
        }

        let broken = dir.path().join("broken.dat");
        std::fs::write(&broken, [0xFF, 0xFF, 0xFF, 99]).unwrap();
        match GeoIp::open([&missing[0], &broken]) {
            Err(GeoError::Open { path, source }) => {
                assert_eq!(path, broken);
                assert!(matches!(source, OpenError::UnsupportedEdition(99)));
            }
            _ => panic!("unreadable database must give Open"),
        }

        let good = dir.path().join("good.dat");
        std::fs::write(&good, country_db()).unwrap();
        assert!(GeoIp::open([&broken, &good]).unwrap().is_open());
    }

    #[test]
    fn open_type_uses_custom_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = DatBuilder::new(DatabaseEdition::Org);
        builder
            .insert_name(&"8.8.8.0/24".parse().unwrap(), "Google LLC")
            .unwrap();
        builder.write_to(dir.path().join("GeoIPOrg.dat")).unwrap();

        set_custom_directory(dir.path());
        assert_eq!(data_directory(), dir.path());
        let geoip = GeoIp::open_type(DatabaseEdition::Org).unwrap();
        assert_eq!(geoip.org("8.8.8.8").as_deref(), Some("Google LLC"));

        assert!(matches!(
            GeoIp::open_type(DatabaseEdition::Asnum),
            Err(GeoError::NotFound { .. })
        ));
        assert!(matches!(
            GeoIp::open_type(DatabaseEdition::LargeCountry),
            Err(GeoError::NotFound { .. })
        ));
    }

    #[test]
    fn city_lookup_fixture() {
        let geoip = GeoIp::from_bytes(city_db(DatabaseEdition::CityRev1)).unwrap();

        let result = geoip.lookup_ipv4_city("1.2.3.4").unwrap();
        assert_eq!(result.netmask, 24);
        let record = result.record.unwrap();
        assert_eq!(record.country_code, "US");
        assert_eq!(record.city.as_deref(), Some("San Francisco"));
        assert_eq!(record.metro_code, Some(807));
        assert_eq!(record.area_code, Some(415));
        assert_eq!(geoip.record("1.2.3.4"), Some(record));

        let result = geoip.lookup_ipv4_city("1.2.4.1").unwrap();
        assert_eq!(result.record, None);
        assert_eq!(result.netmask, 22);

        // Only 1.x and 10.x exist, the whole upper half is one unmatched range
        let result = geoip.lookup_ipv4_city("200.0.0.1").unwrap();
        assert_eq!(result.record, None);
        assert_eq!(result.netmask, 1);

        let london = geoip.record("10.20.30.40").unwrap();
        assert_eq!(london.country_name, "United Kingdom");
        assert_eq!(london.continent_code, "EU");
        assert_eq!(london.metro_code, None);
    }

    #[test]
    fn ipv6_city_lookup() {
        let geoip = GeoIp::from_bytes(city_db(DatabaseEdition::CityRev0V6)).unwrap();
        let result = geoip.lookup_ipv6_city("2001:db8::1").unwrap();
        assert_eq!(result.netmask, 32);
        let record = result.record.unwrap();
        assert_eq!(record.region.as_deref(), Some("CA"));
        // Rev 0 databases carry no metro codes
        assert_eq!(record.metro_code, None);
    }

    #[test]
    fn address_family_is_checked() {
        let v4 = GeoIp::from_bytes(city_db(DatabaseEdition::CityRev1)).unwrap();
        assert!(matches!(
            v4.lookup_ipv4_city("2001:db8::1"),
            Err(GeoError::WrongAddressFamily {
                expected: AddressFamily::V4,
                ..
            })
        ));
        let mapped = v4.lookup_ipv4_city("::ffff:1.2.3.4").unwrap();
        assert_eq!(mapped.netmask, 24);
        assert!(mapped.record.is_some());

        let v6 = GeoIp::from_bytes(city_db(DatabaseEdition::CityRev1V6)).unwrap();
        for address in ["1.2.3.4", "::ffff:1.2.3.4"] {
            assert!(matches!(
                v6.lookup_ipv6_city(address),
                Err(GeoError::WrongAddressFamily {
                    expected: AddressFamily::V6,
                    ..
                })
            ));
        }
        assert!(matches!(
            v4.lookup_ipv4_city("1.2.3"),
            Err(GeoError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn database_type_is_checked_first() {
        let geoip = GeoIp::from_bytes(country_db()).unwrap();
        for result in [
            geoip.lookup_ipv4_city("1.2.3.4"),
            geoip.lookup_ipv4_city("not an address"),
            geoip.lookup_ipv6_city("::1"),
        ] {
            assert!(matches!(
                result,
                Err(GeoError::WrongDatabaseType {
                    actual: DatabaseEdition::Country,
                    lookup: "city",
                })
            ));
        }
        assert!(matches!(
            geoip.name("1.2.3.4"),
            Err(GeoError::WrongDatabaseType { .. })
        ));
        assert!(matches!(
            geoip.country_v6("::1"),
            Err(GeoError::WrongDatabaseType { .. })
        ));
        assert!(matches!(
            geoip.region("1.2.3.4"),
            Err(GeoError::WrongDatabaseType { .. })
        ));
        assert_eq!(geoip.record("1.2.3.4"), None);
        assert_eq!(geoip.org("1.2.3.4"), None);
    }

    #[test]
    fn concurrent_lookups_keep_their_netmask() {
        let geoip = GeoIp::from_bytes(country_db()).unwrap();
        let expected = [
            ("1.9.9.9", "AU", 8),
            ("2.2.9.9", "FR", 16),
            ("3.3.3.9", "US", 24),
            ("4.4.4.4", "DE", 32),
        ];
        std::thread::scope(|scope| {
            for _ in 0..4 {
                for &(address, country, netmask) in &expected {
                    let geoip = &geoip;
                    scope.spawn(move || {
                        for _ in 0..500 {
                            let result = geoip.country(address).unwrap();
                            assert_eq!(result.country_code, Some(country));
                            assert_eq!(result.netmask, netmask);
                        }
                    });
                }
            }
        });
    }

    #[test]
    fn region_names_round_trip() {
        let mut builder = DatBuilder::new(DatabaseEdition::RegionRev1);
        builder
            .insert_region(&"24.0.0.0/8".parse().unwrap(), "CA", Some("BC"))
            .unwrap();
        let geoip = GeoIp::from_bytes(builder.build().unwrap()).unwrap();

        let region = geoip.region("24.1.2.3").unwrap().unwrap();
        assert_eq!(region.country_code, "CA");
        let code = region.region.unwrap();
        assert_eq!(
            region_name_by_code(&region.country_code, &code),
            Some("British Columbia")
        );
        assert_eq!(geoip.region("25.0.0.1").unwrap(), None);
    }

    #[test]
    fn reloaded_edition_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GeoIP.dat");
        let mut builder = DatBuilder::new(DatabaseEdition::Org);
        builder
            .insert_name(&"1.0.0.0/8".parse().unwrap(), "Org")
            .unwrap();
        builder.write_to(&path).unwrap();
        let options = OpenOptions {
            flags: OpenFlags::MEMORY_CACHE | OpenFlags::CHECK_CACHE,
            ..Default::default()
        };
        let geoip = GeoIp::open_with([&path], &options).unwrap();
        assert_eq!(geoip.name("1.1.1.1").unwrap().name.as_deref(), Some("Org"));

        // Past the check interval and into the next mtime second
        std::thread::sleep(std::time::Duration::from_millis(1100));
        std::fs::write(&path, country_db()).unwrap();

        assert!(matches!(
            geoip.name("1.1.1.1"),
            Err(GeoError::WrongDatabaseType {
                actual: DatabaseEdition::Country,
                lookup: "name",
            })
        ));
        assert_eq!(geoip.country("1.9.9.9").unwrap().country_code, Some("AU"));
        assert_eq!(
            geoip.database_edition().unwrap(),
            Some(DatabaseEdition::Country)
        );
    }

    #[test]
    fn confidence_and_distance_editions_serve_names() {
        for (edition, network, address) in [
            (DatabaseEdition::AccuracyRadius, "1.0.0.0/8", "1.2.3.4"),
            (DatabaseEdition::CityConf, "1.0.0.0/8", "1.2.3.4"),
            (DatabaseEdition::AccuracyRadiusV6, "2001:db8::/32", "2001:db8::1"),
        ] {
            let mut builder = DatBuilder::new(edition);
            builder.insert_name(&network.parse().unwrap(), "50").unwrap();
            let geoip = GeoIp::from_bytes(builder.build().unwrap()).unwrap();
            let result = match edition.family() {
                AddressFamily::V4 => geoip.name(address),
                AddressFamily::V6 => geoip.name_v6(address),
            };
            assert_eq!(result.unwrap().name.as_deref(), Some("50"), "{}", edition);
        }
    }

    #[test]
    fn latin1_strings_are_decoded() {
        let mut builder = DatBuilder::new(DatabaseEdition::Isp);
        builder
            .insert_name(&"5.0.0.0/8".parse().unwrap(), "Zürcher Kantonalbank")
            .unwrap();
        builder.set_info("GEO-121 Édition");
        let geoip = GeoIp::from_bytes(builder.build().unwrap()).unwrap();
        assert_eq!(
            geoip.name("5.5.5.5").unwrap(),
            NameResult {
                name: Some("Zürcher Kantonalbank".to_owned()),
                netmask: 8,
            }
        );
        assert_eq!(
            geoip.database_info().unwrap().as_deref(),
            Some("GEO-121 Édition")
        );
    }

    #[test]
    fn teredo_is_on_by_default() {
        let mut builder = DatBuilder::new(DatabaseEdition::CountryV6);
        builder
            .insert_country(&"::192.0.2.0/120".parse().unwrap(), "NL")
            .unwrap();
        let data = builder.build().unwrap();
        let teredo = "2001:0:4136:e378:8000:63bf:3fff:fdd2";

        let geoip = GeoIp::from_bytes(data.clone()).unwrap();
        assert!(geoip.teredo().unwrap());
        assert_eq!(geoip.country_v6(teredo).unwrap().country_code, Some("NL"));
        geoip.disable_teredo().unwrap();
        assert_eq!(geoip.country_v6(teredo).unwrap().country_code, None);
        geoip.enable_teredo().unwrap();
        assert_eq!(geoip.country_v6(teredo).unwrap().country_code, Some("NL"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GeoIPv6.dat");
        std::fs::write(&path, data).unwrap();
        let options = OpenOptions {
            teredo: false,
            ..Default::default()
        };
        let geoip = GeoIp::open_with([&path], &options).unwrap();
        assert!(!geoip.teredo().unwrap());
    }
}
