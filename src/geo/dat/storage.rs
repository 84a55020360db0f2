use crate::geo::{OpenError, OpenFlags};

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Bytes of a database file, held according to the cache mode it was opened with.
pub(crate) enum Storage {
    Memory(Vec<u8>),
    #[cfg(feature = "mmap")]
    Mmap(memmap2::Mmap),
    File {
        file: File,
        len: u64,
        /// Search tree bytes when opened with [OpenFlags::INDEX_CACHE]
        index: Option<Vec<u8>>,
    },
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

impl Storage {
    pub(crate) fn load(path: &Path, flags: OpenFlags) -> Result<Self, OpenError> {
        let mut file = File::open(path)?;

        if is_gzip(path) {
            #[cfg(feature = "gzip")]
            {
                let mut decoder = flate2::read::GzDecoder::new(file);
                let mut data = vec![];
                decoder.read_to_end(&mut data)?;
                return Ok(Self::Memory(data));
            }
            #[cfg(not(feature = "gzip"))]
            log::warn!(
                r#""{}" looks compressed but gzip support is not compiled in"#,
                path.display()
            );
        }

        if flags.contains(OpenFlags::MMAP_CACHE) {
            #[cfg(feature = "mmap")]
            {
                let mmap = unsafe { memmap2::Mmap::map(&file)? };
                return Ok(Self::Mmap(mmap));
            }
            #[cfg(not(feature = "mmap"))]
            log::warn!("mmap support is not compiled in, loading database into memory");
            #[cfg(not(feature = "mmap"))]
            return Self::read_to_memory(file);
        }
        if flags.contains(OpenFlags::MEMORY_CACHE) {
            return Self::read_to_memory(file);
        }

        let len = file.seek(SeekFrom::End(0))?;
        Ok(Self::File {
            file,
            len,
            index: None,
        })
    }

    fn read_to_memory(mut file: File) -> Result<Self, OpenError> {
        let mut data = vec![];
        file.read_to_end(&mut data)?;
        Ok(Self::Memory(data))
    }

    pub(crate) fn len(&self) -> u64 {
        match self {
            Self::Memory(data) => data.len() as u64,
            #[cfg(feature = "mmap")]
            Self::Mmap(mmap) => mmap.len() as u64,
            Self::File { len, .. } => *len,
        }
    }

    /// Keeps the first `size` bytes in memory, a no-op for in-memory storages
    pub(crate) fn cache_index(&mut self, size: u64) -> std::io::Result<()> {
        if let Self::File { file, len, index } = self {
            let size = size.min(*len);
            let mut data = vec![0; size as usize];
            file.seek(SeekFrom::Start(0))?;
            file.read_exact(&mut data)?;
            *index = Some(data);
        }
        Ok(())
    }

    /// Fills `buf` starting at `offset`, returning how many bytes were available
    pub(crate) fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        let slice_read = |data: &[u8], buf: &mut [u8]| {
            let start = (offset as usize).min(data.len());
            let end = start.saturating_add(buf.len()).min(data.len());
            buf[..end - start].copy_from_slice(&data[start..end]);
            end - start
        };
        match self {
            Self::Memory(data) => Ok(slice_read(&data[..], buf)),
            #[cfg(feature = "mmap")]
            Self::Mmap(mmap) => Ok(slice_read(&mmap[..], buf)),
            Self::File { file, index, .. } => {
                if let Some(index) = index {
                    if offset + buf.len() as u64 <= index.len() as u64 {
                        return Ok(slice_read(&index[..], buf));
                    }
                }
                file.seek(SeekFrom::Start(offset))?;
                let mut filled = 0;
                while filled < buf.len() {
                    match file.read(&mut buf[filled..])? {
                        0 => break,
                        n => filled += n,
                    }
                }
                Ok(filled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn short_reads_at_end() {
        let mut storage = Storage::Memory(vec![1, 2, 3, 4]);
        let mut buf = [0; 3];
        assert_eq!(storage.read_at(2, &mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], &[3, 4]);
        assert_eq!(storage.read_at(10, &mut buf).unwrap(), 0);
    }

    #[test]
    fn file_and_index_agree() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&(0..=255).collect::<Vec<u8>>()).unwrap();

        let mut storage = Storage::load(tmp.path(), OpenFlags::STANDARD).unwrap();
        assert!(matches!(storage, Storage::File { .. }));
        assert_eq!(storage.len(), 256);

        let mut plain = [0; 4];
        storage.read_at(100, &mut plain).unwrap();
        storage.cache_index(128).unwrap();
        let mut cached = [0; 4];
        storage.read_at(100, &mut cached).unwrap();
        assert_eq!(plain, [100, 101, 102, 103]);
        assert_eq!(plain, cached);

        let mut tail = [0; 4];
        assert_eq!(storage.read_at(254, &mut tail).unwrap(), 2);
    }

    #[cfg(feature = "gzip")]
    #[test]
    fn gzip_is_decompressed() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GeoIP.dat.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"database").unwrap();
        encoder.finish().unwrap();

        let mut storage = Storage::load(&path, OpenFlags::STANDARD).unwrap();
        assert_eq!(storage.len(), 8);
        let mut buf = [0; 8];
        storage.read_at(0, &mut buf).unwrap();
        assert_eq!(&buf, b"database");
    }
}
