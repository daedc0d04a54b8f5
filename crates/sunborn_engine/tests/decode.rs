use pretty_assertions::assert_eq;
use sunborn_engine::decode_list_text;

#[test]
fn plain_utf8_passes_through() {
    let text = decode_list_text(b"address\n0xAAA\n", None).expect("decode ok");
    assert_eq!(text, "address\n0xAAA\n");
}

#[test]
fn charset_parameter_is_honoured() {
    // "café" in Windows-1252: the 0xE9 byte is not valid UTF-8.
    let bytes = b"caf\xe9\n";
    let text =
        decode_list_text(bytes, Some("text/csv; charset=windows-1252")).expect("decode ok");
    assert_eq!(text, "caf\u{e9}\n");
}

#[test]
fn utf16_bom_wins_over_charset_parameter() {
    // "0xA" encoded as UTF-16LE with BOM.
    let bytes: &[u8] = &[0xFF, 0xFE, b'0', 0x00, b'x', 0x00, b'A', 0x00];
    let text = decode_list_text(bytes, Some("text/csv; charset=utf-8")).expect("decode ok");
    assert_eq!(text, "0xA");
}

#[test]
fn detection_fallback_handles_missing_content_type() {
    let bytes = b"caf\xe9\n";
    let text = decode_list_text(bytes, None).expect("decode ok");
    // chardetng picks a windows-125x family encoding for this byte.
    assert_eq!(text, "caf\u{e9}\n");
}
