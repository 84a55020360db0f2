// Remove after IpAddr::to_canonical stabilizes
// https://github.com/rust-lang/rust/issues/27709
mod canonical_ip;
pub mod config;
mod database;
pub mod geo;
pub mod report;

pub use database::{
    data_directory, set_custom_directory, ClosedPolicy, GeoIp, OpenOptions, DEFAULT_DIRECTORY,
    DEFAULT_PATHS,
};
pub use geo::tables::{
    continent_by_code, country_code3_by_code, country_name_by_code, region_name_by_code,
    time_zone_by_country_and_region,
};
pub use geo::{
    Backend, CityResult, CountryResult, DatabaseEdition, GeoError, GeoRecord, NameResult,
    OpenError, OpenFlags, Region,
};
