//! Indexing vCards read from disk.

use std::path::{Path, PathBuf};

use vcfx_core::config::ReaderConfig;
use vcfx_rfc::RfcError;
use vcfx_rfc::rfc::vcard::{IndexedField, VcardIndex};

const CARD: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Jane Doe\r\n\
item1.TEL:+1-555-0100\r\n\
item1.X-ABLabel:Mobile\r\n\
PHOTO;ENCODING=b:aGVs\r\n\
\x20bG8=\r\n\
END:VCARD\r\n";

/// Temporary card file, removed on drop.
struct TempCard(PathBuf);

impl TempCard {
    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempCard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn write_card(name: &str, contents: &str) -> TempCard {
    let path = std::env::temp_dir().join(format!("vcfx-{}-{name}.vcf", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    TempCard(path)
}

#[test_log::test]
fn open_scans_by_default() {
    let card = write_card("scan", CARD);
    let mut index = VcardIndex::open(card.path(), &ReaderConfig::default()).unwrap();

    assert!(index.is_scanned());
    assert_eq!(index.positions().line(IndexedField::FullName), Some(2));

    let tel = index.find_by_key("TEL")[0].as_field().unwrap();
    assert_eq!(tel.label.as_deref(), Some("Mobile"));

    let photo = index.compile_photo().unwrap().unwrap();
    assert_eq!(photo.decode_binary().unwrap(), b"hello");
}

#[test]
fn open_without_scan_defers_discovery() {
    let card = write_card("lazy", CARD);
    let config = ReaderConfig {
        scan_on_open: false,
    };
    let mut index = VcardIndex::open(card.path(), &config).unwrap();

    assert!(!index.is_scanned());
    assert!(index.tokens().is_empty());

    index.discover().unwrap();
    assert_eq!(index.tokens().len(), 8);
}

#[test]
fn open_rejects_card_without_end() {
    let card = write_card("no-end", "BEGIN:VCARD\r\nFN:Jane\r\n");
    let err = VcardIndex::open(card.path(), &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, RfcError::MissingField("END")));
}

#[test]
fn open_missing_file_is_invalid_source() {
    let err = VcardIndex::open("/nonexistent/vcfx/card.vcf", &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, RfcError::InvalidSource(_)));
}
