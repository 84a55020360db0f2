//! Writer of legacy `.dat` files.

use super::structure::{DATABASE_INFO_DELIMITER, DATABASE_INFO_MAX_SIZE, STRUCTURE_INFO_DELIMITER};
use crate::geo::edition::SegmentLayout;
use crate::geo::tables::country_id_by_code;
use crate::geo::{AddressFamily, DatabaseEdition, EditionKind};

use std::collections::HashMap;
use std::fmt;
use std::net::{AddrParseError, IpAddr};
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

const REV0_US_OFFSET: u32 = 1000;
const REV1_US_OFFSET: u32 = 1;
const REV1_CANADA_OFFSET: u32 = 677;
const REV1_WORLD_OFFSET: u32 = 1353;
const FIPS_RANGE: u32 = 360;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Network must be in format SUBNET/SUFFIX")]
    Parts,
    #[error("Subnet of the network has wrong format")]
    Subnet(#[from] AddrParseError),
    #[error("Suffix of the network has wrong format")]
    SuffixFormat(#[from] ParseIntError),
    #[error(r#"Suffix of the network is too large: "{0}""#)]
    SuffixTooLarge(u32),
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("{0} databases cannot be built")]
    UnsupportedEdition(DatabaseEdition),
    #[error("cannot insert {insert} into a {edition} database")]
    WrongEdition {
        edition: DatabaseEdition,
        insert: &'static str,
    },
    #[error("{expected} network expected, {network} given")]
    WrongAddressFamily {
        network: Network,
        expected: AddressFamily,
    },
    #[error(r#"unknown country code "{0}""#)]
    UnknownCountry(String),
    #[error(r#"region "{region}" of country "{country}" cannot be encoded"#)]
    UnsupportedRegion { country: String, region: String },
    #[error(r#""{0}" is not representable as a NUL-terminated ISO-8859-1 string"#)]
    Encoding(String),
    #[error("coordinate {0} is out of range")]
    Coordinate(f32),
    #[error("metro code {metro} with area code {area} doesn't fit into a record")]
    MetroCode { metro: u32, area: u32 },
    #[error("database doesn't fit into {0}-byte records")]
    TooLarge(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// IP network written as `ADDRESS/PREFIX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    address: IpAddr,
    prefix_len: u8,
}

impl Network {
    pub fn new(address: IpAddr, prefix_len: u8) -> Result<Self, NetworkError> {
        let width = match address {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if prefix_len > width {
            return Err(NetworkError::SuffixTooLarge(prefix_len.into()));
        }
        Ok(Self {
            address,
            prefix_len,
        })
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    fn family(&self) -> AddressFamily {
        match self.address {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Address bits aligned to the most significant end, and the tree width
    fn bits(&self) -> (u128, u8) {
        match self.address {
            IpAddr::V4(v4) => (u128::from(u32::from(v4)) << 96, 32),
            IpAddr::V6(v6) => (u128::from(v6), 128),
        }
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (subnet, suffix) = s.split_once('/').ok_or(NetworkError::Parts)?;
        let address: IpAddr = subnet.parse()?;
        let suffix: u32 = suffix.parse()?;
        let prefix_len = u8::try_from(suffix).map_err(|_| NetworkError::SuffixTooLarge(suffix))?;
        Self::new(address, prefix_len)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

/// Location stored by city databases.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CityEntry {
    pub country_code: String,
    pub region: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: f32,
    pub longitude: f32,
    /// Written by rev 1 databases for US locations only
    pub metro_code: Option<u32>,
    pub area_code: Option<u32>,
}

#[derive(Debug, Clone)]
struct Node {
    left: NodePointer,
    right: NodePointer,
}

impl Node {
    fn new_empty() -> Self {
        Self {
            left: NodePointer::Empty,
            right: NodePointer::Empty,
        }
    }

    fn child_mut(&mut self, bit: bool) -> &mut NodePointer {
        if bit {
            &mut self.right
        } else {
            &mut self.left
        }
    }
}

/// Leaves keep the prefix length they were inserted with, so that the longest prefix wins
/// whatever the insertion order is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodePointer {
    Node(u32),
    /// Offset from the segment and prefix length
    Data(u32, u8),
    Empty,
}

/// Builds legacy GeoIP databases in memory.
///
/// ```
/// use geoip::geo::dat::DatBuilder;
/// use geoip::geo::DatabaseEdition;
///
/// let mut builder = DatBuilder::new(DatabaseEdition::Country);
/// builder.insert_country(&"1.0.0.0/8".parse().unwrap(), "AU").unwrap();
/// let bytes = builder.build().unwrap();
/// assert_eq!(bytes[bytes.len() - 1], 1);
/// ```
pub struct DatBuilder {
    edition: DatabaseEdition,
    nodes: Vec<Node>,
    data: Vec<u8>,
    records: HashMap<Vec<u8>, u32>,
    info: String,
}

impl DatBuilder {
    pub fn new(edition: DatabaseEdition) -> Self {
        // Offset 0 of the data section is the "not found" leaf
        let data = match edition.kind() {
            EditionKind::City | EditionKind::Name => vec![0],
            _ => vec![],
        };
        Self {
            edition,
            nodes: vec![Node::new_empty()],
            data,
            records: HashMap::new(),
            info: String::new(),
        }
    }

    /// Free-form text returned by database info lookups, truncated to 100 bytes
    pub fn set_info(&mut self, info: &str) -> &mut Self {
        self.info = info.to_owned();
        self
    }

    fn expect_kind(&self, kind: EditionKind, insert: &'static str) -> Result<(), BuildError> {
        if self.edition.kind() == kind {
            Ok(())
        } else {
            Err(BuildError::WrongEdition {
                edition: self.edition,
                insert,
            })
        }
    }

    fn country_id(code: &str) -> Result<u32, BuildError> {
        country_id_by_code(code).ok_or_else(|| BuildError::UnknownCountry(code.to_owned()))
    }

    pub fn insert_country(&mut self, network: &Network, country_code: &str) -> Result<(), BuildError> {
        self.expect_kind(EditionKind::Country, "countries")?;
        let id = Self::country_id(country_code)?;
        self.insert_leaf(network, id)
    }

    /// Regions are letter codes of US states and Canadian provinces, other countries are stored
    /// without a region
    pub fn insert_region(
        &mut self,
        network: &Network,
        country_code: &str,
        region: Option<&str>,
    ) -> Result<(), BuildError> {
        self.expect_kind(EditionKind::Region, "regions")?;
        let id = Self::country_id(country_code)?;
        let unsupported = || BuildError::UnsupportedRegion {
            country: country_code.to_owned(),
            region: region.unwrap_or_default().to_owned(),
        };
        let letters = region.map(|region| packed_letters(region).ok_or_else(unsupported));
        let code = country_code.to_ascii_uppercase();
        let value = match (self.edition, code.as_str(), letters) {
            (_, _, Some(Err(error))) => return Err(error),
            (DatabaseEdition::RegionRev0, "US", Some(Ok(letters))) => REV0_US_OFFSET + letters,
            (DatabaseEdition::RegionRev0, _, None) => id,
            (DatabaseEdition::RegionRev1, "US", Some(Ok(letters))) => REV1_US_OFFSET + letters,
            (DatabaseEdition::RegionRev1, "CA", Some(Ok(letters))) => {
                REV1_CANADA_OFFSET + letters
            }
            (DatabaseEdition::RegionRev1, _, None) => REV1_WORLD_OFFSET + id * FIPS_RANGE,
            _ => return Err(unsupported()),
        };
        self.insert_leaf(network, value)
    }

    pub fn insert_name(&mut self, network: &Network, name: &str) -> Result<(), BuildError> {
        self.expect_kind(EditionKind::Name, "names")?;
        let mut record = vec![];
        push_string(&mut record, name)?;
        let offset = self.push_record(record);
        self.insert_leaf(network, offset)
    }

    pub fn insert_city(&mut self, network: &Network, entry: &CityEntry) -> Result<(), BuildError> {
        self.expect_kind(EditionKind::City, "cities")?;
        let id = Self::country_id(&entry.country_code)?;
        let mut record = vec![id as u8];
        for field in [&entry.region, &entry.city, &entry.postal_code] {
            push_string(&mut record, field.as_deref().unwrap_or_default())?;
        }
        push_coordinate(&mut record, entry.latitude)?;
        push_coordinate(&mut record, entry.longitude)?;
        if self.edition.has_metro_codes() && entry.country_code.eq_ignore_ascii_case("US") {
            push_metro_code(
                &mut record,
                entry.metro_code.unwrap_or(0),
                entry.area_code.unwrap_or(0),
            )?;
        }
        let offset = self.push_record(record);
        self.insert_leaf(network, offset)
    }

    fn push_record(&mut self, record: Vec<u8>) -> u32 {
        if let Some(&offset) = self.records.get(&record) {
            return offset;
        }
        let offset = self.data.len() as u32;
        self.data.extend_from_slice(&record);
        self.records.insert(record, offset);
        offset
    }

    fn insert_leaf(&mut self, network: &Network, value: u32) -> Result<(), BuildError> {
        if network.family() != self.edition.family() {
            return Err(BuildError::WrongAddressFamily {
                network: *network,
                expected: self.edition.family(),
            });
        }
        let (bits, _) = network.bits();
        let prefix_len = network.prefix_len();
        if prefix_len == 0 {
            self.backfill_less_specific(0, value, 0);
            return Ok(());
        }

        let mut node_id = 0;
        for depth in 0..prefix_len {
            let bit = (bits >> (127 - depth)) & 1 == 1;
            let child = *self.nodes[node_id as usize].child_mut(bit);

            if depth + 1 == prefix_len {
                match child {
                    NodePointer::Empty => {
                        *self.nodes[node_id as usize].child_mut(bit) =
                            NodePointer::Data(value, prefix_len);
                    }
                    NodePointer::Data(_, existing_prefix_len) => {
                        if prefix_len >= existing_prefix_len {
                            *self.nodes[node_id as usize].child_mut(bit) =
                                NodePointer::Data(value, prefix_len);
                        }
                    }
                    NodePointer::Node(child_id) => {
                        self.backfill_less_specific(child_id, value, prefix_len);
                    }
                }
                return Ok(());
            }

            node_id = match child {
                NodePointer::Node(child_id) => child_id,
                NodePointer::Empty => {
                    let new_id = self.allocate_node(Node::new_empty());
                    *self.nodes[node_id as usize].child_mut(bit) = NodePointer::Node(new_id);
                    new_id
                }
                // A less specific network covers this one, split its leaf
                NodePointer::Data(..) => {
                    let new_id = self.allocate_node(Node {
                        left: child,
                        right: child,
                    });
                    *self.nodes[node_id as usize].child_mut(bit) = NodePointer::Node(new_id);
                    new_id
                }
            };
        }
        Ok(())
    }

    fn allocate_node(&mut self, node: Node) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(node);
        id
    }

    /// Fills empty and less specific leaves under `node_id`
    fn backfill_less_specific(&mut self, node_id: u32, value: u32, prefix_len: u8) {
        for bit in [false, true] {
            let child = *self.nodes[node_id as usize].child_mut(bit);
            match child {
                NodePointer::Empty => {
                    *self.nodes[node_id as usize].child_mut(bit) =
                        NodePointer::Data(value, prefix_len);
                }
                NodePointer::Data(_, existing_prefix_len) if prefix_len > existing_prefix_len => {
                    *self.nodes[node_id as usize].child_mut(bit) =
                        NodePointer::Data(value, prefix_len);
                }
                NodePointer::Data(..) => {}
                NodePointer::Node(child_id) => {
                    self.backfill_less_specific(child_id, value, prefix_len)
                }
            }
        }
    }

    pub fn build(&self) -> Result<Vec<u8>, BuildError> {
        if self.edition.kind() == EditionKind::Other {
            return Err(BuildError::UnsupportedEdition(self.edition));
        }
        let record_length = self.edition.record_length();
        let too_large = || BuildError::TooLarge(record_length);
        let max_value = (1u64 << (8 * record_length)) - 1;
        let node_count = self.nodes.len() as u64;

        let segment = match self.edition.segment_layout() {
            SegmentLayout::Fixed(segment) => u64::from(segment),
            SegmentLayout::Stored => node_count,
        };
        if node_count > segment || segment + self.data.len() as u64 > max_value + 1 {
            return Err(too_large());
        }

        let mut bytes = Vec::with_capacity(self.nodes.len() * 2 * record_length + self.data.len());
        for node in &self.nodes {
            for pointer in [node.left, node.right] {
                let value = match pointer {
                    NodePointer::Node(id) => u64::from(id),
                    NodePointer::Data(offset, _) => segment + u64::from(offset),
                    NodePointer::Empty => segment,
                };
                if value > max_value {
                    return Err(too_large());
                }
                bytes.extend_from_slice(&value.to_le_bytes()[..record_length]);
            }
        }
        bytes.extend_from_slice(&self.data);

        bytes.extend_from_slice(&DATABASE_INFO_DELIMITER);
        let mut info = vec![];
        push_string(&mut info, &self.info)?;
        info.pop();
        info.truncate(DATABASE_INFO_MAX_SIZE as usize);
        bytes.extend_from_slice(&info);

        bytes.extend_from_slice(&STRUCTURE_INFO_DELIMITER);
        bytes.push(self.edition.into());
        if self.edition.segment_layout() == SegmentLayout::Stored {
            if segment > 0xFF_FFFF {
                return Err(too_large());
            }
            bytes.extend_from_slice(&segment.to_le_bytes()[..3]);
        }
        Ok(bytes)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), BuildError> {
        std::fs::write(path, self.build()?)?;
        Ok(())
    }
}

fn packed_letters(region: &str) -> Option<u32> {
    match region.as_bytes() {
        [first, second] if first.is_ascii_alphabetic() && second.is_ascii_alphabetic() => {
            let letter = |byte: u8| u32::from(byte.to_ascii_uppercase() - b'A');
            Some(letter(*first) * 26 + letter(*second))
        }
        _ => None,
    }
}

fn push_string(record: &mut Vec<u8>, value: &str) -> Result<(), BuildError> {
    for c in value.chars() {
        match u8::try_from(c) {
            Ok(byte) if byte != 0 => record.push(byte),
            _ => return Err(BuildError::Encoding(value.to_owned())),
        }
    }
    record.push(0);
    Ok(())
}

fn push_coordinate(record: &mut Vec<u8>, degrees: f32) -> Result<(), BuildError> {
    let raw = ((f64::from(degrees) + 180.0) * 10000.0).round();
    if !(0.0..=f64::from(0xFF_FFFF)).contains(&raw) {
        return Err(BuildError::Coordinate(degrees));
    }
    record.extend_from_slice(&(raw as u32).to_le_bytes()[..3]);
    Ok(())
}

/// Metro and area codes share three bytes as `metro * 1000 + area`
fn push_metro_code(record: &mut Vec<u8>, metro: u32, area: u32) -> Result<(), BuildError> {
    let combo = metro
        .checked_mul(1000)
        .and_then(|combo| combo.checked_add(area))
        .filter(|&combo| area < 1000 && combo <= 0xFF_FFFF)
        .ok_or(BuildError::MetroCode { metro, area })?;
    record.extend_from_slice(&combo.to_le_bytes()[..3]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::dat::DatEngine;
    use crate::geo::tables::country_by_id;
    use crate::geo::EngineTrait;

    fn network(s: &str) -> Network {
        s.parse().unwrap()
    }

    fn country_at(engine: &mut DatEngine, address: &str) -> (Option<&'static str>, u8) {
        let (id, netmask) = engine.country_id_by_addr(address.parse().unwrap()).unwrap();
        (country_by_id(id).map(|country| country.code), netmask)
    }

    #[test]
    fn parse_network() {
        let net = network("10.0.0.0/8");
        assert_eq!(net.prefix_len(), 8);
        assert_eq!(net.to_string(), "10.0.0.0/8");
        assert_eq!(network("2001:db8::/32").prefix_len(), 32);
        assert!(matches!(
            "10.0.0.0".parse::<Network>(),
            Err(NetworkError::Parts)
        ));
        assert!(matches!(
            "10.0.0/8".parse::<Network>(),
            Err(NetworkError::Subnet(_))
        ));
        assert!(matches!(
            "10.0.0.0/x".parse::<Network>(),
            Err(NetworkError::SuffixFormat(_))
        ));
        assert!(matches!(
            "10.0.0.0/33".parse::<Network>(),
            Err(NetworkError::SuffixTooLarge(33))
        ));
        assert!(matches!(
            "::/300".parse::<Network>(),
            Err(NetworkError::SuffixTooLarge(300))
        ));
    }

    #[test]
    fn longest_prefix_wins_in_any_order() {
        let mut forward = DatBuilder::new(DatabaseEdition::Country);
        forward.insert_country(&network("1.0.0.0/8"), "AU").unwrap();
        forward.insert_country(&network("1.2.0.0/16"), "CN").unwrap();
        forward.insert_country(&network("1.2.3.4/32"), "JP").unwrap();

        let mut backward = DatBuilder::new(DatabaseEdition::Country);
        backward.insert_country(&network("1.2.3.4/32"), "JP").unwrap();
        backward.insert_country(&network("1.2.0.0/16"), "CN").unwrap();
        backward.insert_country(&network("1.0.0.0/8"), "AU").unwrap();

        for builder in [forward, backward] {
            let mut engine = DatEngine::from_bytes(builder.build().unwrap()).unwrap();
            assert_eq!(country_at(&mut engine, "1.2.3.4").0, Some("JP"));
            assert_eq!(country_at(&mut engine, "1.2.3.5").0, Some("CN"));
            assert_eq!(country_at(&mut engine, "1.2.200.1").0, Some("CN"));
            assert_eq!(country_at(&mut engine, "1.128.0.1"), (Some("AU"), 9));
            assert_eq!(country_at(&mut engine, "2.0.0.1").0, None);
        }
    }

    #[test]
    fn default_route() {
        let mut builder = DatBuilder::new(DatabaseEdition::Country);
        builder.insert_country(&network("10.0.0.0/8"), "DE").unwrap();
        builder.insert_country(&network("0.0.0.0/0"), "FR").unwrap();
        let mut engine = DatEngine::from_bytes(builder.build().unwrap()).unwrap();
        assert_eq!(country_at(&mut engine, "10.1.1.1").0, Some("DE"));
        assert_eq!(country_at(&mut engine, "200.1.1.1"), (Some("FR"), 1));
    }

    #[test]
    fn identical_records_are_shared() {
        let mut builder = DatBuilder::new(DatabaseEdition::Asnum);
        builder.insert_name(&network("1.0.0.0/8"), "AS1 Example").unwrap();
        let single = builder.build().unwrap().len();
        builder.insert_name(&network("2.0.0.0/8"), "AS1 Example").unwrap();
        let shared = builder.build().unwrap().len();
        // Only tree nodes were added
        assert_eq!((shared - single) % 6, 0);
        assert!(shared - single < "AS1 Example".len() + 6 * 8);
        assert_eq!(builder.data.len(), 1 + "AS1 Example".len() + 1);
    }

    #[test]
    fn rejections() {
        let mut builder = DatBuilder::new(DatabaseEdition::Country);
        assert!(matches!(
            builder.insert_country(&network("::/0"), "US"),
            Err(BuildError::WrongAddressFamily {
                expected: AddressFamily::V4,
                ..
            })
        ));
        assert!(matches!(
            builder.insert_country(&network("1.0.0.0/8"), "XX"),
            Err(BuildError::UnknownCountry(_))
        ));
        assert!(matches!(
            builder.insert_name(&network("1.0.0.0/8"), "Org"),
            Err(BuildError::WrongEdition { .. })
        ));

        let mut builder = DatBuilder::new(DatabaseEdition::RegionRev0);
        assert!(matches!(
            builder.insert_region(&network("1.0.0.0/8"), "CA", Some("QC")),
            Err(BuildError::UnsupportedRegion { .. })
        ));
        assert!(matches!(
            builder.insert_region(&network("1.0.0.0/8"), "US", Some("New York")),
            Err(BuildError::UnsupportedRegion { .. })
        ));

        let mut builder = DatBuilder::new(DatabaseEdition::Org);
        assert!(matches!(
            builder.insert_name(&network("1.0.0.0/8"), "東京"),
            Err(BuildError::Encoding(_))
        ));

        let mut builder = DatBuilder::new(DatabaseEdition::CityRev0);
        let entry = CityEntry {
            country_code: "US".to_owned(),
            latitude: -200.0,
            ..Default::default()
        };
        assert!(matches!(
            builder.insert_city(&network("1.0.0.0/8"), &entry),
            Err(BuildError::Coordinate(_))
        ));

        let mut builder = DatBuilder::new(DatabaseEdition::CityRev1);
        for (metro, area) in [(4_294_968, 0), (16_778, 0), (807, 1000)] {
            let entry = CityEntry {
                country_code: "US".to_owned(),
                metro_code: Some(metro),
                area_code: Some(area),
                ..Default::default()
            };
            assert!(matches!(
                builder.insert_city(&network("1.0.0.0/8"), &entry),
                Err(BuildError::MetroCode { .. })
            ));
        }
        let entry = CityEntry {
            country_code: "US".to_owned(),
            metro_code: Some(16_777),
            area_code: Some(215),
            ..Default::default()
        };
        builder.insert_city(&network("1.0.0.0/8"), &entry).unwrap();
        let mut engine = DatEngine::from_bytes(builder.build().unwrap()).unwrap();
        let (record, _) = engine.record_by_addr("1.2.3.4".parse().unwrap()).unwrap();
        let record = record.unwrap();
        assert_eq!(record.metro_code, Some(16_777));
        assert_eq!(record.area_code, Some(215));

        assert!(matches!(
            DatBuilder::new(DatabaseEdition::CityConfidence).build(),
            Err(BuildError::UnsupportedEdition(_))
        ));
    }

    #[test]
    fn trailer_layout() {
        let mut builder = DatBuilder::new(DatabaseEdition::CityRev1);
        builder.set_info("Test");
        let bytes = builder.build().unwrap();
        // one empty root node, the "not found" byte, info and structure info
        assert_eq!(bytes.len(), 6 + 1 + 3 + 4 + 3 + 1 + 3);
        assert_eq!(&bytes[..6], &[1, 0, 0, 1, 0, 0]);
        assert_eq!(&bytes[bytes.len() - 7..], &[0xFF, 0xFF, 0xFF, 2, 1, 0, 0]);
    }
}
