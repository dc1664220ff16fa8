use super::*;

/// Header with the magic, padded with a recognizable filler.
fn make_header() -> Vec<u8> {
    let mut header = vec![0x41; PAYLOAD_OFFSET];
    header[..8].copy_from_slice(MAGIC);
    header
}

fn make_container(payload: &[u8]) -> Vec<u8> {
    let mut container = make_header();
    container.extend_from_slice(payload);
    container
}

#[test]
fn test_identify() {
    assert!(identify(&make_container(&[1, 2, 3])));
    assert!(identify(MAGIC));
    assert!(!identify(b"ADVSAVE"));
    assert!(!identify(&vec![0u8; 2048]));
}

#[test]
fn test_decode_keeps_trailing_bytes() {
    let mut payload = vec![0x5A; 32768];
    payload.extend_from_slice(&[0u8; 512]);
    let container = make_container(&payload);
    let raw = decode(&container).unwrap();
    assert_eq!(raw.len(), 32768 + 512);
    assert_eq!(raw, payload);
}

#[test]
fn test_decode_header_only_is_too_small() {
    let container = make_header();
    assert_eq!(
        decode(&container),
        Err(ContainerError::TooSmall {
            expected: PAYLOAD_OFFSET + 1,
            actual: PAYLOAD_OFFSET
        })
    );
}

#[test]
fn test_decode_wrong_format() {
    let err = decode(&vec![0u8; 4096]).unwrap_err();
    assert!(matches!(err, ContainerError::NotThisFormat { .. }));
}

#[test]
fn test_inject_length_ignores_old_payload() {
    let source = make_container(&vec![0x11; 65536]);
    let payload = vec![0x22; 8192];
    let out = inject(&source, &payload).unwrap();
    assert_eq!(out.len(), PAYLOAD_OFFSET + 8192);
    assert_eq!(&out[..PAYLOAD_OFFSET], &source[..PAYLOAD_OFFSET]);
    assert_eq!(decode(&out).unwrap(), payload);
}

#[test]
fn test_inject_accepts_bare_header() {
    let out = inject(&make_header(), &[7; 16]).unwrap();
    assert_eq!(decode(&out).unwrap(), vec![7; 16]);
}

#[test]
fn test_inject_rejects_non_gssp_source() {
    let err = inject(&vec![0u8; 4096], &[1]).unwrap_err();
    assert!(matches!(err, ContainerError::NotThisFormat { .. }));
}

#[test]
fn test_inject_rejects_truncated_header() {
    let mut source = make_header();
    source.truncate(100);
    assert!(matches!(
        inject(&source, &[1]),
        Err(ContainerError::TooSmall { .. })
    ));
}
