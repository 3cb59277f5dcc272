//! vCard test fixtures.
//!
//! Shapes follow what address book exporters actually write, including
//! grouped labels and base64 photos folded over several lines.

/// Smallest card that indexes.
pub const VCARD_MINIMAL: &str = "\
BEGIN:VCARD\r\n\
FN:Jane Doe\r\n\
END:VCARD\r\n";

/// No BEGIN line.
pub const VCARD_NO_BEGIN: &str = "\
VERSION:3.0\r\n\
FN:Jane Doe\r\n\
END:VCARD\r\n";

/// Grouped telephone with its label.
pub const VCARD_LABELED_TEL: &str = "\
TEL.uid1:+1-555-0100\r\n\
X-ABLabel.uid1:Mobile\r\n";

/// Address book export with labels, repeated fields and a folded photo.
///
/// The photo is `"hello world!"` base64-encoded (`aGVsbG8gd29ybGQh`)
/// split over three lines.
pub const VCARD_EXPORT: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
PRODID:-//Apple Inc.//Mac OS X 10.12//EN\r\n\
N:Doe;Jane;;;\r\n\
FN:Jane Doe\r\n\
ORG:Acme Corporation;Engineering;\r\n\
item1.EMAIL;type=INTERNET;type=pref:jane@example.com\r\n\
item1.X-ABLabel:_$!<Other>!$_\r\n\
TEL;type=CELL;type=VOICE;type=pref:+1-555-0100\r\n\
item2.TEL:+1-555-0199\r\n\
item2.X-ABLabel:Pager\r\n\
item3.ADR;type=HOME:;;1 Main St;Anytown;CA;12345;USA\r\n\
item3.X-ABLabel:Cabin\r\n\
URL;type=WORK:http://example.com:8080/jane\r\n\
X-SOCIALPROFILE;type=twitter:http://twitter.com/jane\r\n\
BDAY:1980-02-03\r\n\
X-ALTBDAY;CALSCALE=chinese:19800112\r\n\
PHOTO;ENCODING=b;TYPE=JPEG:aGVsbG8g\r\n\
\x20d29y\r\n\
\x20bGQh\r\n\
END:VCARD\r\n";

/// Photo continuation containing a line shaped like a registered field.
pub const VCARD_PHOTO_MISDETECTED: &str = "\
BEGIN:VCARD\r\n\
PHOTO;ENCODING=b:AAAA\r\n\
\x20BBBB\r\n\
URL:CCCC\r\n\
\x20DDDD\r\n\
END:VCARD\r\n";
