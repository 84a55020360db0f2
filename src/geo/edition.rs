use crate::geo::OpenError;

use serde::Deserialize;
use std::fmt;

pub const COUNTRY_BEGIN: u32 = 16776960;
pub const LARGE_COUNTRY_BEGIN: u32 = 16515072;
pub const STATE_BEGIN_REV0: u32 = 16700000;
pub const STATE_BEGIN_REV1: u32 = 16000000;

pub const STANDARD_RECORD_LENGTH: usize = 3;
pub const ORG_RECORD_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => f.write_str("IPv4"),
            Self::V6 => f.write_str("IPv6"),
        }
    }
}

/// Which lookup family an edition answers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum EditionKind {
    Country,
    Region,
    City,
    Name,
    Other,
}

/// Where the first leaf value of the search tree comes from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SegmentLayout {
    Fixed(u32),
    Stored,
}

/// Database type byte as stored in the structure info of a database file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum DatabaseEdition {
    Country = 1,
    CityRev1 = 2,
    RegionRev1 = 3,
    Isp = 4,
    Org = 5,
    CityRev0 = 6,
    RegionRev0 = 7,
    Proxy = 8,
    #[serde(alias = "asn")]
    Asnum = 9,
    Netspeed = 10,
    Domain = 11,
    CountryV6 = 12,
    LocationA = 13,
    AccuracyRadius = 14,
    CityConfidence = 15,
    CityConfidenceDist = 16,
    LargeCountry = 17,
    LargeCountryV6 = 18,
    CityConfidenceDistIspOrg = 19,
    CcmCountry = 20,
    #[serde(alias = "asn-v6")]
    AsnumV6 = 21,
    IspV6 = 22,
    OrgV6 = 23,
    DomainV6 = 24,
    LocationAV6 = 25,
    Registrar = 26,
    RegistrarV6 = 27,
    UserType = 28,
    UserTypeV6 = 29,
    CityRev1V6 = 30,
    CityRev0V6 = 31,
    NetspeedRev1 = 32,
    NetspeedRev1V6 = 33,
    CountryConf = 34,
    CityConf = 35,
    RegionConf = 36,
    PostalConf = 37,
    AccuracyRadiusV6 = 38,
}

const ALL_EDITIONS: [DatabaseEdition; 38] = [
    DatabaseEdition::Country,
    DatabaseEdition::CityRev1,
    DatabaseEdition::RegionRev1,
    DatabaseEdition::Isp,
    DatabaseEdition::Org,
    DatabaseEdition::CityRev0,
    DatabaseEdition::RegionRev0,
    DatabaseEdition::Proxy,
    DatabaseEdition::Asnum,
    DatabaseEdition::Netspeed,
    DatabaseEdition::Domain,
    DatabaseEdition::CountryV6,
    DatabaseEdition::LocationA,
    DatabaseEdition::AccuracyRadius,
    DatabaseEdition::CityConfidence,
    DatabaseEdition::CityConfidenceDist,
    DatabaseEdition::LargeCountry,
    DatabaseEdition::LargeCountryV6,
    DatabaseEdition::CityConfidenceDistIspOrg,
    DatabaseEdition::CcmCountry,
    DatabaseEdition::AsnumV6,
    DatabaseEdition::IspV6,
    DatabaseEdition::OrgV6,
    DatabaseEdition::DomainV6,
    DatabaseEdition::LocationAV6,
    DatabaseEdition::Registrar,
    DatabaseEdition::RegistrarV6,
    DatabaseEdition::UserType,
    DatabaseEdition::UserTypeV6,
    DatabaseEdition::CityRev1V6,
    DatabaseEdition::CityRev0V6,
    DatabaseEdition::NetspeedRev1,
    DatabaseEdition::NetspeedRev1V6,
    DatabaseEdition::CountryConf,
    DatabaseEdition::CityConf,
    DatabaseEdition::RegionConf,
    DatabaseEdition::PostalConf,
    DatabaseEdition::AccuracyRadiusV6,
];

impl TryFrom<u8> for DatabaseEdition {
    type Error = OpenError;

    fn try_from(value: u8) -> Result<Self, OpenError> {
        ALL_EDITIONS
            .iter()
            .copied()
            .find(|edition| *edition as u8 == value)
            .ok_or(OpenError::UnsupportedEdition(value))
    }
}

impl From<DatabaseEdition> for u8 {
    fn from(edition: DatabaseEdition) -> Self {
        edition as u8
    }
}

impl DatabaseEdition {
    pub fn description(self) -> &'static str {
        use DatabaseEdition::*;
        match self {
            Country => "GeoIP Country Edition",
            CityRev1 => "GeoIP City Edition, Rev 1",
            RegionRev1 => "GeoIP Region Edition, Rev 1",
            Isp => "GeoIP ISP Edition",
            Org => "GeoIP Organization Edition",
            CityRev0 => "GeoIP City Edition, Rev 0",
            RegionRev0 => "GeoIP Region Edition, Rev 0",
            Proxy => "GeoIP Proxy Edition",
            Asnum => "GeoIP ASNum Edition",
            Netspeed => "GeoIP Netspeed Edition",
            Domain => "GeoIP Domain Name Edition",
            CountryV6 => "GeoIP Country V6 Edition",
            LocationA => "GeoIP LocationID ASCII Edition",
            AccuracyRadius => "GeoIP Accuracy Radius Edition",
            CityConfidence => "GeoIP City with Confidence Edition",
            CityConfidenceDist => "GeoIP City with Confidence and Accuracy Edition",
            LargeCountry => "GeoIP Large Country Edition",
            LargeCountryV6 => "GeoIP Large Country V6 Edition",
            CityConfidenceDistIspOrg => "GeoIP CityConfidenceDist ISP ORG Edition",
            CcmCountry => "GeoIP CCM Edition",
            AsnumV6 => "GeoIP ASNum V6 Edition",
            IspV6 => "GeoIP ISP V6 Edition",
            OrgV6 => "GeoIP Organization V6 Edition",
            DomainV6 => "GeoIP Domain Name V6 Edition",
            LocationAV6 => "GeoIP LocationID ASCII V6 Edition",
            Registrar => "GeoIP Registrar Edition",
            RegistrarV6 => "GeoIP Registrar V6 Edition",
            UserType => "GeoIP UserType Edition",
            UserTypeV6 => "GeoIP UserType V6 Edition",
            CityRev1V6 => "GeoIP City Edition V6, Rev 1",
            CityRev0V6 => "GeoIP City Edition V6, Rev 0",
            NetspeedRev1 => "GeoIP Netspeed Edition, Rev 1",
            NetspeedRev1V6 => "GeoIP Netspeed Edition V6, Rev1",
            CountryConf => "GeoIP Country Confidence Edition",
            CityConf => "GeoIP City Confidence Edition",
            RegionConf => "GeoIP Region Confidence Edition",
            PostalConf => "GeoIP Postal Confidence Edition",
            AccuracyRadiusV6 => "GeoIP Accuracy Radius Edition V6",
        }
    }

    /// File name looked up by type-based opens, if the edition has a conventional one
    pub fn file_name(self) -> Option<&'static str> {
        use DatabaseEdition::*;
        let name = match self {
            Country => "GeoIP.dat",
            RegionRev0 | RegionRev1 => "GeoIPRegion.dat",
            CityRev0 | CityRev1 => "GeoIPCity.dat",
            Isp => "GeoIPISP.dat",
            Org => "GeoIPOrg.dat",
            Proxy => "GeoIPProxy.dat",
            Asnum => "GeoIPASNum.dat",
            Netspeed => "GeoIPNetSpeed.dat",
            Domain => "GeoIPDomain.dat",
            CountryV6 => "GeoIPv6.dat",
            LocationA => "GeoIPLocA.dat",
            AccuracyRadius => "GeoIPDistance.dat",
            AsnumV6 => "GeoIPASNumv6.dat",
            IspV6 => "GeoIPISPv6.dat",
            OrgV6 => "GeoIPOrgv6.dat",
            DomainV6 => "GeoIPDomainv6.dat",
            LocationAV6 => "GeoIPLocAv6.dat",
            Registrar => "GeoIPRegistrar.dat",
            RegistrarV6 => "GeoIPRegistrarv6.dat",
            UserType => "GeoIPUserType.dat",
            UserTypeV6 => "GeoIPUserTypev6.dat",
            CityRev0V6 | CityRev1V6 => "GeoLiteCityv6.dat",
            NetspeedRev1 => "GeoIPNetSpeedCell.dat",
            NetspeedRev1V6 => "GeoIPNetSpeedCellv6.dat",
            CountryConf => "GeoIPCountryConf.dat",
            CityConf => "GeoIPCityConf.dat",
            RegionConf => "GeoIPRegionConf.dat",
            PostalConf => "GeoIPPostalConf.dat",
            AccuracyRadiusV6 => "GeoIPDistancev6.dat",
            CityConfidence | CityConfidenceDist | LargeCountry | LargeCountryV6
            | CityConfidenceDistIspOrg | CcmCountry => return None,
        };
        Some(name)
    }

    pub fn kind(self) -> EditionKind {
        use DatabaseEdition::*;
        match self {
            Country | LargeCountry | Proxy | Netspeed | CountryV6 | LargeCountryV6 => {
                EditionKind::Country
            }
            RegionRev0 | RegionRev1 => EditionKind::Region,
            CityRev0 | CityRev1 | CityRev0V6 | CityRev1V6 => EditionKind::City,
            Org | Isp | Domain | Asnum | NetspeedRev1 | UserType | Registrar | LocationA
            | AccuracyRadius | CountryConf | CityConf | RegionConf | PostalConf | OrgV6
            | IspV6 | DomainV6 | AsnumV6 | NetspeedRev1V6 | UserTypeV6 | RegistrarV6
            | LocationAV6 | AccuracyRadiusV6 => EditionKind::Name,
            _ => EditionKind::Other,
        }
    }

    pub fn family(self) -> AddressFamily {
        use DatabaseEdition::*;
        match self {
            CountryV6 | LargeCountryV6 | AsnumV6 | IspV6 | OrgV6 | DomainV6 | LocationAV6
            | RegistrarV6 | UserTypeV6 | CityRev1V6 | CityRev0V6 | NetspeedRev1V6
            | AccuracyRadiusV6 => AddressFamily::V6,
            _ => AddressFamily::V4,
        }
    }

    pub fn segment_layout(self) -> SegmentLayout {
        use DatabaseEdition::*;
        match self {
            RegionRev0 => SegmentLayout::Fixed(STATE_BEGIN_REV0),
            RegionRev1 => SegmentLayout::Fixed(STATE_BEGIN_REV1),
            LargeCountry | LargeCountryV6 => SegmentLayout::Fixed(LARGE_COUNTRY_BEGIN),
            Country | Proxy | Netspeed | CountryV6 | CcmCountry => {
                SegmentLayout::Fixed(COUNTRY_BEGIN)
            }
            _ => SegmentLayout::Stored,
        }
    }

    pub fn record_length(self) -> usize {
        use DatabaseEdition::*;
        match self {
            Org | OrgV6 | Domain | DomainV6 | Isp | IspV6 => ORG_RECORD_LENGTH,
            _ => STANDARD_RECORD_LENGTH,
        }
    }

    /// Rev 1 city records carry metro and area codes for US locations
    pub fn has_metro_codes(self) -> bool {
        matches!(self, Self::CityRev1 | Self::CityRev1V6)
    }
}

impl fmt::Display for DatabaseEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edition_from_byte() {
        for edition in ALL_EDITIONS {
            let byte: u8 = edition.into();
            assert_eq!(DatabaseEdition::try_from(byte).unwrap(), edition);
        }
        assert!(matches!(
            DatabaseEdition::try_from(0),
            Err(OpenError::UnsupportedEdition(0))
        ));
        assert!(matches!(
            DatabaseEdition::try_from(39),
            Err(OpenError::UnsupportedEdition(39))
        ));
    }

    #[test]
    fn city_editions() {
        assert_eq!(DatabaseEdition::CityRev1.kind(), EditionKind::City);
        assert_eq!(DatabaseEdition::CityRev1.family(), AddressFamily::V4);
        assert_eq!(DatabaseEdition::CityRev0V6.family(), AddressFamily::V6);
        assert_eq!(
            DatabaseEdition::CityRev1.segment_layout(),
            SegmentLayout::Stored
        );
        assert!(DatabaseEdition::CityRev1V6.has_metro_codes());
        assert!(!DatabaseEdition::CityRev0.has_metro_codes());
    }

    #[test]
    fn name_editions() {
        use DatabaseEdition::*;
        for edition in [
            AccuracyRadius,
            AccuracyRadiusV6,
            CountryConf,
            CityConf,
            RegionConf,
            PostalConf,
        ] {
            assert_eq!(edition.kind(), EditionKind::Name, "{:?}", edition);
            assert_eq!(edition.segment_layout(), SegmentLayout::Stored);
        }
        assert_eq!(AccuracyRadiusV6.family(), AddressFamily::V6);
        for edition in [CityConfidence, CityConfidenceDist, CityConfidenceDistIspOrg] {
            assert_eq!(edition.kind(), EditionKind::Other);
        }
    }

    #[test]
    fn org_record_length() {
        assert_eq!(DatabaseEdition::Org.record_length(), 4);
        assert_eq!(DatabaseEdition::Asnum.record_length(), 3);
    }

    #[test]
    fn deserialize_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            edition: DatabaseEdition,
        }
        let wrapper: Wrapper = toml::from_str(r#"edition = "city-rev1-v6""#).unwrap();
        assert_eq!(wrapper.edition, DatabaseEdition::CityRev1V6);
        let wrapper: Wrapper = toml::from_str(r#"edition = "asn""#).unwrap();
        assert_eq!(wrapper.edition, DatabaseEdition::Asnum);
    }
}
