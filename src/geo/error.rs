use crate::geo::{AddressFamily, DatabaseEdition};

use std::net::AddrParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Didn't open GeoIP database, none of {paths:?} exists")]
    NotFound { paths: Vec<PathBuf> },
    #[error(r#"Error opening GeoIP database "{path}": {source}"#)]
    Open {
        path: PathBuf,
        #[source]
        source: OpenError,
    },
    #[error(r#""{address}" is not a valid IP address"#)]
    InvalidAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },
    #[error(r#"{expected} address expected, "{address}" given"#)]
    WrongAddressFamily {
        address: String,
        expected: AddressFamily,
    },
    #[error("{actual} cannot be used for {lookup} lookups")]
    WrongDatabaseType {
        actual: DatabaseEdition,
        lookup: &'static str,
    },
    #[error("database is not loaded")]
    Closed,
    #[error("database is corrupted near offset {offset}")]
    Corrupted { offset: u64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum OpenError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("database edition {0} is not supported")]
    UnsupportedEdition(u8),
    #[error("structure info is truncated")]
    Truncated,
    #[error("search tree doesn't fit into the file")]
    TreeOutOfBounds,
    #[cfg(feature = "libgeoip")]
    #[error("libGeoIP refused to open the database: {0}")]
    Native(std::io::Error),
}
