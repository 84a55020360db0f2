#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Charset {
    Iso8859_1,
    #[default]
    Utf8,
}

/// City-level location of an address.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoRecord {
    pub country_code: String,
    pub country_code3: String,
    pub country_name: String,
    pub region: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: f32,
    pub longitude: f32,
    /// Only set by rev 1 databases for US locations
    pub metro_code: Option<u32>,
    pub area_code: Option<u32>,
    pub charset: Charset,
    pub continent_code: String,
    pub netmask: u8,
}

/// Result of a city lookup.
///
/// `record` is `None` when the address is not in the database, `netmask` is then the prefix
/// length of the unmatched range, which is what database enumeration needs to skip ahead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CityResult {
    pub record: Option<GeoRecord>,
    pub netmask: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameResult {
    pub name: Option<String>,
    pub netmask: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountryResult {
    pub country_code: Option<&'static str>,
    pub netmask: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub country_code: String,
    pub region: Option<String>,
}

/// Text as copied out of an engine, decoded by the handle once its lock is released.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawString {
    bytes: Vec<u8>,
    charset: Charset,
}

impl RawString {
    pub fn new(bytes: Vec<u8>, charset: Charset) -> Self {
        Self { bytes, charset }
    }

    /// Empty strings count as missing
    pub fn decode(self) -> Option<String> {
        if self.bytes.is_empty() {
            return None;
        }
        let text = match self.charset {
            Charset::Iso8859_1 => self.bytes.iter().map(|&byte| char::from(byte)).collect(),
            Charset::Utf8 => match String::from_utf8(self.bytes) {
                Ok(text) => text,
                Err(error) => String::from_utf8_lossy(error.as_bytes()).into_owned(),
            },
        };
        Some(text)
    }
}

impl From<&str> for RawString {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec(), Charset::Utf8)
    }
}

impl From<String> for RawString {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes(), Charset::Utf8)
    }
}

/// [GeoRecord] with undecoded strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    pub country_code: RawString,
    pub country_code3: RawString,
    pub country_name: RawString,
    pub region: RawString,
    pub city: RawString,
    pub postal_code: RawString,
    pub latitude: f32,
    pub longitude: f32,
    pub metro_code: Option<u32>,
    pub area_code: Option<u32>,
    pub charset: Charset,
    pub continent_code: RawString,
    pub netmask: u8,
}

impl RawRecord {
    pub fn decode(self) -> GeoRecord {
        GeoRecord {
            country_code: self.country_code.decode().unwrap_or_default(),
            country_code3: self.country_code3.decode().unwrap_or_default(),
            country_name: self.country_name.decode().unwrap_or_default(),
            region: self.region.decode(),
            city: self.city.decode(),
            postal_code: self.postal_code.decode(),
            latitude: self.latitude,
            longitude: self.longitude,
            metro_code: self.metro_code,
            area_code: self.area_code,
            charset: self.charset,
            continent_code: self.continent_code.decode().unwrap_or_default(),
            netmask: self.netmask,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRegion {
    pub country_code: RawString,
    pub region: RawString,
}

impl RawRegion {
    pub fn decode(self) -> Region {
        Region {
            country_code: self.country_code.decode().unwrap_or_default(),
            region: self.region.decode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_strings() {
        assert_eq!(
            RawString::new(b"M\xfcnchen".to_vec(), Charset::Iso8859_1)
                .decode()
                .as_deref(),
            Some("München")
        );
        assert_eq!(
            RawString::new("München".as_bytes().to_vec(), Charset::Utf8)
                .decode()
                .as_deref(),
            Some("München")
        );
        assert_eq!(
            RawString::new(b"M\xfcnchen".to_vec(), Charset::Utf8)
                .decode()
                .as_deref(),
            Some("M\u{FFFD}nchen")
        );
        assert_eq!(RawString::default().decode(), None);
        assert_eq!(RawString::from("").decode(), None);
    }
}
