//! Binding to the system `libGeoIP`.
//!
//! The library keeps the netmask of the last lookup inside its database struct, so every call
//! goes through `&mut NativeEngine` and the owning handle serializes them. Results are copied
//! out as bytes, the handle decodes them after unlocking.

use crate::geo::{
    Charset, DatabaseEdition, EngineTrait, GeoError, OpenError, OpenFlags, RawRecord, RawRegion,
    RawString,
};

use libc::{c_char, c_float, c_int, c_uchar, c_void};
use std::ffi::{CStr, CString};
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr::NonNull;

const GEOIP_CHARSET_UTF8: c_int = 1;

#[repr(C)]
struct GeoIPHandle {
    _private: [u8; 0],
}

#[repr(C)]
struct GeoIPRecord {
    country_code: *mut c_char,
    country_code3: *mut c_char,
    country_name: *mut c_char,
    region: *mut c_char,
    city: *mut c_char,
    postal_code: *mut c_char,
    latitude: c_float,
    longitude: c_float,
    /// Union of metro and DMA codes
    metro_code: c_int,
    area_code: c_int,
    charset: c_int,
    continent_code: *mut c_char,
    netmask: c_int,
}

#[repr(C)]
struct GeoIPRegion {
    country_code: [c_char; 3],
    region: [c_char; 3],
}

#[link(name = "GeoIP")]
extern "C" {
    fn GeoIP_open(filename: *const c_char, flags: c_int) -> *mut GeoIPHandle;
    fn GeoIP_open_type(edition: c_int, flags: c_int) -> *mut GeoIPHandle;
    fn GeoIP_delete(gi: *mut GeoIPHandle);
    fn GeoIP_set_charset(gi: *mut GeoIPHandle, charset: c_int) -> c_int;
    fn GeoIP_database_edition(gi: *mut GeoIPHandle) -> c_uchar;
    fn GeoIP_database_info(gi: *mut GeoIPHandle) -> *mut c_char;
    fn GeoIP_last_netmask(gi: *mut GeoIPHandle) -> c_int;
    fn GeoIP_enable_teredo(gi: *mut GeoIPHandle, true_false: c_int) -> c_int;
    fn GeoIP_teredo(gi: *mut GeoIPHandle) -> c_int;
    fn GeoIP_name_by_addr(gi: *mut GeoIPHandle, addr: *const c_char) -> *mut c_char;
    fn GeoIP_name_by_addr_v6(gi: *mut GeoIPHandle, addr: *const c_char) -> *mut c_char;
    fn GeoIP_record_by_addr(gi: *mut GeoIPHandle, addr: *const c_char) -> *mut GeoIPRecord;
    fn GeoIP_record_by_addr_v6(gi: *mut GeoIPHandle, addr: *const c_char) -> *mut GeoIPRecord;
    fn GeoIPRecord_delete(record: *mut GeoIPRecord);
    fn GeoIP_id_by_addr(gi: *mut GeoIPHandle, addr: *const c_char) -> c_int;
    fn GeoIP_id_by_addr_v6(gi: *mut GeoIPHandle, addr: *const c_char) -> c_int;
    fn GeoIP_region_by_addr(gi: *mut GeoIPHandle, addr: *const c_char) -> *mut GeoIPRegion;
    fn GeoIPRegion_delete(region: *mut GeoIPRegion);
    fn GeoIP_setup_custom_directory(dir: *mut c_char);
}

/// Points the library's type-based opens at `dir`.
///
/// The library keeps the pointer, the string is leaked on purpose.
pub(crate) fn setup_custom_directory(dir: &Path) {
    match CString::new(dir.as_os_str().as_bytes()) {
        // SAFETY: the string stays alive for the rest of the process
        Ok(dir) => unsafe { GeoIP_setup_custom_directory(dir.into_raw()) },
        Err(_) => log::warn!(
            r#"Custom directory "{}" contains a NUL byte, libGeoIP keeps its default"#,
            dir.display()
        ),
    }
}

/// Copies the bytes of a string owned by the library
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string
unsafe fn copy_string(ptr: *const c_char, charset: Charset) -> RawString {
    if ptr.is_null() {
        return RawString::default();
    }
    RawString::new(CStr::from_ptr(ptr).to_bytes().to_vec(), charset)
}

fn address_string(address: IpAddr) -> CString {
    // Display output of an address never contains NUL
    CString::new(address.to_string()).unwrap_or_default()
}

fn netmask(value: c_int) -> u8 {
    u8::try_from(value).unwrap_or(0)
}

pub struct NativeEngine {
    db: NonNull<GeoIPHandle>,
    edition: DatabaseEdition,
}

// SAFETY: the library handle is only used through &mut self
unsafe impl Send for NativeEngine {}

impl NativeEngine {
    pub fn open(path: &Path, flags: OpenFlags) -> Result<Self, OpenError> {
        let filename = CString::new(path.as_os_str().as_bytes())
            .map_err(|error| OpenError::Native(io::Error::new(io::ErrorKind::InvalidInput, error)))?;
        // SAFETY: filename is a valid C string for the duration of the call
        let db = unsafe { GeoIP_open(filename.as_ptr(), flags.bits() as c_int) };
        Self::from_raw(db)
    }

    pub fn open_type(edition: DatabaseEdition, flags: OpenFlags) -> Result<Self, OpenError> {
        // SAFETY: plain integer arguments
        let db = unsafe { GeoIP_open_type(c_int::from(u8::from(edition)), flags.bits() as c_int) };
        Self::from_raw(db)
    }

    fn from_raw(db: *mut GeoIPHandle) -> Result<Self, OpenError> {
        let db = NonNull::new(db).ok_or_else(|| OpenError::Native(io::Error::last_os_error()))?;
        // SAFETY: db is a live handle returned by the library
        let edition_byte = unsafe {
            GeoIP_set_charset(db.as_ptr(), GEOIP_CHARSET_UTF8);
            GeoIP_database_edition(db.as_ptr())
        };
        match DatabaseEdition::try_from(edition_byte) {
            Ok(edition) => Ok(Self { db, edition }),
            Err(error) => {
                // SAFETY: the handle is not stored anywhere else
                unsafe { GeoIP_delete(db.as_ptr()) };
                Err(error)
            }
        }
    }

    fn last_netmask(&mut self) -> u8 {
        // SAFETY: live handle
        netmask(unsafe { GeoIP_last_netmask(self.db.as_ptr()) })
    }

    /// # Safety
    /// `record` must be a non-null record returned by the library
    unsafe fn copy_record(&self, record: *const GeoIPRecord) -> RawRecord {
        let record = &*record;
        let charset = match record.charset {
            GEOIP_CHARSET_UTF8 => Charset::Utf8,
            _ => Charset::Iso8859_1,
        };
        let is_us = !record.country_code.is_null()
            && CStr::from_ptr(record.country_code).to_bytes() == b"US";
        let (metro_code, area_code) = if self.edition.has_metro_codes() && is_us {
            (
                u32::try_from(record.metro_code).ok(),
                u32::try_from(record.area_code).ok(),
            )
        } else {
            (None, None)
        };
        RawRecord {
            country_code: copy_string(record.country_code, charset),
            country_code3: copy_string(record.country_code3, charset),
            country_name: copy_string(record.country_name, charset),
            region: copy_string(record.region, charset),
            city: copy_string(record.city, charset),
            postal_code: copy_string(record.postal_code, charset),
            latitude: record.latitude,
            longitude: record.longitude,
            metro_code,
            area_code,
            charset,
            continent_code: copy_string(record.continent_code, charset),
            netmask: netmask(record.netmask),
        }
    }
}

impl Drop for NativeEngine {
    fn drop(&mut self) {
        // SAFETY: the handle is owned by self and deleted exactly once
        unsafe { GeoIP_delete(self.db.as_ptr()) }
    }
}

impl EngineTrait for NativeEngine {
    fn edition(&self) -> DatabaseEdition {
        self.edition
    }

    fn info(&mut self) -> Result<RawString, GeoError> {
        // SAFETY: the returned string is malloc'ed by the library and freed after copying
        unsafe {
            let info = GeoIP_database_info(self.db.as_ptr());
            let value = copy_string(info, Charset::Iso8859_1);
            libc::free(info as *mut c_void);
            Ok(value)
        }
    }

    fn teredo(&self) -> bool {
        // SAFETY: reads a flag of a live handle
        unsafe { GeoIP_teredo(self.db.as_ptr()) != 0 }
    }

    fn set_teredo(&mut self, enabled: bool) {
        // SAFETY: live handle
        unsafe { GeoIP_enable_teredo(self.db.as_ptr(), c_int::from(enabled)) };
    }

    fn name_by_addr(&mut self, address: IpAddr) -> Result<(RawString, u8), GeoError> {
        let addr = address_string(address);
        // SAFETY: addr outlives the call, the result is freed after copying
        let name = unsafe {
            let name = match address {
                IpAddr::V4(_) => GeoIP_name_by_addr(self.db.as_ptr(), addr.as_ptr()),
                IpAddr::V6(_) => GeoIP_name_by_addr_v6(self.db.as_ptr(), addr.as_ptr()),
            };
            let value = copy_string(name, Charset::Utf8);
            libc::free(name as *mut c_void);
            value
        };
        Ok((name, self.last_netmask()))
    }

    fn record_by_addr(&mut self, address: IpAddr) -> Result<(Option<RawRecord>, u8), GeoError> {
        let addr = address_string(address);
        // SAFETY: addr outlives the call
        let record = unsafe {
            match address {
                IpAddr::V4(_) => GeoIP_record_by_addr(self.db.as_ptr(), addr.as_ptr()),
                IpAddr::V6(_) => GeoIP_record_by_addr_v6(self.db.as_ptr(), addr.as_ptr()),
            }
        };
        let netmask = self.last_netmask();
        if record.is_null() {
            return Ok((None, netmask));
        }
        // SAFETY: non-null record, deleted right after copying
        let copied = unsafe {
            let copied = self.copy_record(record);
            GeoIPRecord_delete(record);
            copied
        };
        Ok((Some(copied), netmask))
    }

    fn country_id_by_addr(&mut self, address: IpAddr) -> Result<(u32, u8), GeoError> {
        let addr = address_string(address);
        // SAFETY: addr outlives the call
        let id = unsafe {
            match address {
                IpAddr::V4(_) => GeoIP_id_by_addr(self.db.as_ptr(), addr.as_ptr()),
                IpAddr::V6(_) => GeoIP_id_by_addr_v6(self.db.as_ptr(), addr.as_ptr()),
            }
        };
        Ok((u32::try_from(id).unwrap_or(0), self.last_netmask()))
    }

    fn region_by_addr(&mut self, address: Ipv4Addr) -> Result<Option<RawRegion>, GeoError> {
        let addr = address_string(IpAddr::V4(address));
        // SAFETY: addr outlives the call, the region is deleted after copying its arrays
        let region = unsafe {
            let region = GeoIP_region_by_addr(self.db.as_ptr(), addr.as_ptr());
            if region.is_null() {
                return Ok(None);
            }
            let country_code = CStr::from_ptr((*region).country_code.as_ptr()).to_bytes();
            let copied = (!country_code.is_empty() && country_code != b"--").then(|| RawRegion {
                country_code: RawString::new(country_code.to_vec(), Charset::Utf8),
                region: copy_string((*region).region.as_ptr(), Charset::Utf8),
            });
            GeoIPRegion_delete(region);
            copied
        };
        Ok(region)
    }
}
