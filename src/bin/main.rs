use geoip::config::{parse_config, Config};
use geoip::report::report;
use geoip::GeoIp;

use std::io::BufRead;

fn open_databases(config: &Config) -> anyhow::Result<Vec<GeoIp>> {
    config.apply();
    let mut databases = Vec::with_capacity(config.databases.len());
    for database in &config.databases {
        match database.open() {
            Ok(db) => {
                log::debug!(
                    "Opened {}",
                    db.database_info()?.unwrap_or_else(|| "GeoIP database".to_owned())
                );
                databases.push(db);
            }
            Err(e) => log::error!("{}", e),
        }
    }
    if databases.is_empty() {
        return Err(anyhow::anyhow!("no database could be opened"));
    }
    Ok(databases)
}

fn lookup(databases: &[GeoIp], address: &str) {
    for db in databases {
        match report(db, address) {
            Ok(Some(line)) => println!("{}", line),
            Ok(None) => {}
            Err(e) => log::warn!("{}", e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "geoip.toml".to_owned());
    let addresses: Vec<String> = args.collect();

    let config = parse_config(&config_path)?;

    simple_logger::init_with_level(config.log_level)?;

    let databases = open_databases(&config)?;

    if addresses.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            let address = line.trim();
            if !address.is_empty() {
                lookup(&databases, address);
            }
        }
    } else {
        for address in &addresses {
            lookup(&databases, address);
        }
    }
    Ok(())
}
