use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::{ClientError, FailureKind};

/// Decode a page body into UTF-8: BOM, then Content-Type charset, then detection.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<String, ClientError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<String, ClientError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(ClientError::new(
            FailureKind::Decode,
            format!("invalid {} byte sequence", encoding.name()),
        ));
    }
    Ok(text.into_owned())
}
