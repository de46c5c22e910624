//! Layout-agnostic decoder: renders any input file as a canonical hex listing.
use std::fmt::Write as _;
use std::io::{self, Read};

use tracing::debug;

use crate::api::Decoder;
use crate::error::{Error, Result};
use crate::io::env::Env;
use crate::io::sink::Sink;

const BYTES_PER_LINE: usize = 16;
// Four hex digits per byte pair, pairs separated by one space.
const HEX_COLUMN_WIDTH: usize = BYTES_PER_LINE / 2 * 5 - 1;

/// Dumps raw bytes without interpreting the storage layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDecoder;

impl Decoder for RawDecoder {
    fn decode(&self, env: &dyn Env, path: &str, sink: &mut dyn Sink) -> Result<()> {
        if !env.file_exists(path) {
            return Err(Error::NotFound {
                path: path.to_string(),
            });
        }

        let size = env.file_size(path)?;
        let mut reader = env.open(path)?;
        sink.append(format!("# {} ({} bytes)\n", path, size).as_bytes())?;

        let mut chunk = [0u8; BYTES_PER_LINE];
        let mut line = String::with_capacity(80);
        let mut offset = 0usize;
        loop {
            let n = read_chunk(&mut *reader, &mut chunk).map_err(|source| Error::Read {
                path: path.to_string(),
                source,
            })?;
            if n == 0 {
                break;
            }
            line.clear();
            format_line(&mut line, offset, &chunk[..n]);
            sink.append(line.as_bytes())?;
            offset += n;
            if n < BYTES_PER_LINE {
                break;
            }
        }
        debug!("dumped {} bytes from {}", offset, path);
        Ok(())
    }
}

// Fills `buf` unless the reader hits end of file first.
fn read_chunk<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn format_line(out: &mut String, offset: usize, chunk: &[u8]) {
    let _ = write!(out, "{:08x}: ", offset);
    let hex_start = out.len();
    for (i, b) in chunk.iter().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02x}", b);
    }
    while out.len() - hex_start < HEX_COLUMN_WIDTH {
        out.push(' ');
    }
    out.push_str("  ");
    out.extend(chunk.iter().map(|&b| {
        if b.is_ascii_graphic() || b == b' ' {
            b as char
        } else {
            '.'
        }
    }));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;

    struct MemEnv(HashMap<String, Vec<u8>>);

    impl Env for MemEnv {
        fn file_exists(&self, path: &str) -> bool {
            self.0.contains_key(path)
        }

        fn file_size(&self, path: &str) -> Result<u64> {
            self.0
                .get(path)
                .map(|data| data.len() as u64)
                .ok_or_else(|| Error::NotFound {
                    path: path.to_string(),
                })
        }

        fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
            match self.0.get(path) {
                Some(data) => Ok(Box::new(Cursor::new(data.as_slice()))),
                None => Err(Error::NotFound {
                    path: path.to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct VecSink(Vec<u8>);

    impl Sink for VecSink {
        fn append(&mut self, data: &[u8]) -> Result<()> {
            self.0.extend_from_slice(data);
            Ok(())
        }
    }

    fn render(data: &[u8]) -> String {
        let env = MemEnv(HashMap::from([("db/000003.log".to_string(), data.to_vec())]));
        let mut sink = VecSink::default();
        RawDecoder.decode(&env, "db/000003.log", &mut sink).unwrap();
        String::from_utf8(sink.0).unwrap()
    }

    #[test]
    fn full_line_layout() {
        let data: Vec<u8> = (0x41..0x51).collect();
        let text = render(&data);
        assert_eq!(
            text,
            "# db/000003.log (16 bytes)\n\
             00000000: 4142 4344 4546 4748 494a 4b4c 4d4e 4f50  ABCDEFGHIJKLMNOP\n"
        );
    }

    #[test]
    fn partial_line_is_padded_and_masks_binary() {
        let text = render(&[0x00, 0x7f, b'k', b' ', 0xff]);
        let line = text.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "00000000: 007f 6b20 ff                             ..k ."
        );
    }

    #[test]
    fn offsets_advance_per_line() {
        let text = render(&[0u8; 40]);
        let offsets: Vec<&str> = text.lines().skip(1).map(|l| &l[..8]).collect();
        assert_eq!(offsets, ["00000000", "00000010", "00000020"]);
    }

    #[test]
    fn empty_file_emits_header_only() {
        assert_eq!(render(&[]), "# db/000003.log (0 bytes)\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let env = MemEnv(HashMap::new());
        let mut sink = VecSink::default();
        let err = RawDecoder.decode(&env, "gone.ldb", &mut sink).unwrap_err();
        assert!(matches!(err, Error::NotFound { ref path } if path == "gone.ldb"));
        assert!(sink.0.is_empty());
    }

    /// Hands out at most three bytes per read call.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = buf.len().min(3).min(self.0.len());
            buf[..n].copy_from_slice(&self.0[..n]);
            self.0 = &self.0[n..];
            Ok(n)
        }
    }

    #[test]
    fn short_reads_still_fill_whole_lines() {
        let data: Vec<u8> = (0u8..20).collect();
        let mut chunk = [0u8; BYTES_PER_LINE];
        let mut reader = Trickle(&data);
        assert_eq!(read_chunk(&mut reader, &mut chunk).unwrap(), 16);
        assert_eq!(chunk[15], 15);
        assert_eq!(read_chunk(&mut reader, &mut chunk).unwrap(), 4);
        assert_eq!(read_chunk(&mut reader, &mut chunk).unwrap(), 0);
    }

    #[test]
    fn exact_multiple_of_line_width() {
        let text = render(&[0xabu8; 32]);
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().last().unwrap().starts_with("00000010: abab"));
    }
}
