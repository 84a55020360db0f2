use criterion::{black_box, criterion_group, Criterion};
use geoip::geo::dat::{CityEntry, DatBuilder, Network};
use geoip::{DatabaseEdition, GeoIp, OpenFlags, OpenOptions};
use std::net::{IpAddr, Ipv4Addr};

criterion_group!(benches_lookups, bench_country, bench_city);

const COUNTRIES: [&str; 6] = ["US", "DE", "FR", "JP", "BR", "AU"];

fn networks() -> impl Iterator<Item = (Network, usize)> {
    (1u8..=200).flat_map(|a| {
        (0u8..=255).step_by(5).map(move |b| {
            let address = IpAddr::V4(Ipv4Addr::new(a, b, 0, 0));
            let network = Network::new(address, 16).unwrap();
            (network, usize::from(a) + usize::from(b))
        })
    })
}

fn addresses() -> [String; 5] {
    ["0.0.0.0", "127.0.0.1", "80.94.184.70", "93.180.26.112", "128.174.199.60"]
        .map(String::from)
}

fn country_db() -> Vec<u8> {
    let mut builder = DatBuilder::new(DatabaseEdition::Country);
    for (network, i) in networks() {
        builder
            .insert_country(&network, COUNTRIES[i % COUNTRIES.len()])
            .unwrap();
    }
    builder.build().unwrap()
}

fn city_db() -> Vec<u8> {
    let mut builder = DatBuilder::new(DatabaseEdition::CityRev1);
    for (network, i) in networks() {
        let entry = CityEntry {
            country_code: COUNTRIES[i % COUNTRIES.len()].to_owned(),
            city: Some(format!("City {}", i)),
            latitude: (i % 90) as f32,
            longitude: (i % 180) as f32,
            ..Default::default()
        };
        builder.insert_city(&network, &entry).unwrap();
    }
    builder.build().unwrap()
}

pub fn bench_country(c: &mut Criterion) {
    let addresses = addresses();
    let data = country_db();

    let db = GeoIp::from_bytes(data.clone()).unwrap();
    c.bench_function("GeoIp::country memory", |b| {
        b.iter(|| {
            for address in addresses.iter() {
                let _ = db.country(black_box(address));
            }
        })
    });

    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), &data).unwrap();
    let options = OpenOptions {
        flags: OpenFlags::STANDARD | OpenFlags::SILENCE,
        ..Default::default()
    };
    let db = GeoIp::open_with([file.path()], &options).unwrap();
    c.bench_function("GeoIp::country standard", |b| {
        b.iter(|| {
            for address in addresses.iter() {
                let _ = db.country(black_box(address));
            }
        })
    });
}

pub fn bench_city(c: &mut Criterion) {
    let addresses = addresses();
    let db = GeoIp::from_bytes(city_db()).unwrap();
    c.bench_function("GeoIp::lookup_ipv4_city", |b| {
        b.iter(|| {
            for address in addresses.iter() {
                let _ = db.lookup_ipv4_city(black_box(address));
            }
        })
    });
}
