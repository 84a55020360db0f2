pub use edition::{AddressFamily, DatabaseEdition, EditionKind};
pub use error::{GeoError, OpenError};
pub use record::{
    Charset, CityResult, CountryResult, GeoRecord, NameResult, RawRecord, RawRegion, RawString,
    Region,
};

pub mod dat;
mod edition;
mod error;
#[cfg(feature = "libgeoip")]
pub mod native;
mod record;
pub mod tables;

use bitflags::bitflags;
use enum_dispatch::enum_dispatch;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

bitflags! {
    /// Cache mode of an opened database, values match libGeoIP's `GeoIPOptions`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: u32 {
        /// Load the whole file into memory
        const MEMORY_CACHE = 1;
        /// Reload the file when its modification time changes
        const CHECK_CACHE = 2;
        /// Keep only the search tree in memory
        const INDEX_CACHE = 4;
        const MMAP_CACHE = 8;
        const SILENCE = 16;
    }
}

impl OpenFlags {
    /// Every read goes to the file
    pub const STANDARD: Self = Self::empty();
}

impl Default for OpenFlags {
    fn default() -> Self {
        Self::MEMORY_CACHE
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    #[serde(alias = "rust")]
    Dat,
    #[cfg(feature = "libgeoip")]
    #[serde(alias = "libgeoip")]
    Native,
}

#[enum_dispatch]
pub enum Engine {
    Dat(dat::DatEngine),
    #[cfg(feature = "libgeoip")]
    Native(native::NativeEngine),
}

/// Operations every database engine provides.
///
/// Callers validate the edition and the address family before calling a lookup, engines may
/// assume the address matches [EngineTrait::edition].
///
/// Text is returned as [RawString] so the caller can decode it without holding its lock.
#[enum_dispatch(Engine)]
pub trait EngineTrait: Send {
    /// Picks up changes of the underlying file, called before every validated lookup
    fn refresh(&mut self) {}
    fn edition(&self) -> DatabaseEdition;
    fn info(&mut self) -> Result<RawString, GeoError>;
    fn teredo(&self) -> bool;
    fn set_teredo(&mut self, enabled: bool);
    /// Name and netmask
    fn name_by_addr(&mut self, address: IpAddr) -> Result<(RawString, u8), GeoError>;
    /// City record and netmask
    fn record_by_addr(&mut self, address: IpAddr) -> Result<(Option<RawRecord>, u8), GeoError>;
    /// Country id and netmask, id 0 means no country
    fn country_id_by_addr(&mut self, address: IpAddr) -> Result<(u32, u8), GeoError>;
    fn region_by_addr(&mut self, address: Ipv4Addr) -> Result<Option<RawRegion>, GeoError>;
}

impl Engine {
    pub fn open(path: &Path, flags: OpenFlags, backend: Backend) -> Result<Self, OpenError> {
        match backend {
            Backend::Dat => Ok(dat::DatEngine::open(path, flags)?.into()),
            #[cfg(feature = "libgeoip")]
            Backend::Native => Ok(native::NativeEngine::open(path, flags)?.into()),
        }
    }
}
