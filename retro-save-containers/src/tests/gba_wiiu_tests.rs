use super::*;

const KB: usize = 1024;

fn make_container(payload: &[u8], tail: &[u8]) -> Vec<u8> {
    let mut container = vec![0x22; PAYLOAD_OFFSET];
    container[MAGIC_OFFSET..MAGIC_OFFSET + 8].copy_from_slice(MAGIC);
    container.extend_from_slice(payload);
    container.extend_from_slice(tail);
    container
}

#[test]
fn test_identify() {
    assert!(identify(&make_container(&[1], &[])));
    // Header alone is not enough.
    assert!(!identify(&make_container(&[], &[])));
    let mut no_magic = make_container(&[1; 16], &[]);
    no_magic[MAGIC_OFFSET] = b'X';
    assert!(!identify(&no_magic));
    assert!(!identify(&[]));
}

#[test]
fn test_decode_trims_container_trailing_zeros() {
    let mut payload = vec![0x5A; 8 * KB];
    payload[100] = 0x00; // interior zeros stay
    let container = make_container(&payload, &[0u8; 300]);
    let raw = decode(&container).unwrap();
    assert_eq!(raw, payload);
}

#[test]
fn test_decode_trims_zero_bytes_that_end_the_payload() {
    let mut payload = vec![0x5A; 64];
    payload.extend_from_slice(&[0, 0]);
    let container = make_container(&payload, &[]);
    assert_eq!(decode(&container).unwrap().len(), 64);
}

#[test]
fn test_decode_all_zero_payload_is_empty() {
    let container = make_container(&[0u8; 32 * KB], &[]);
    assert_eq!(decode(&container).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_decode_wrong_format() {
    assert!(matches!(
        decode(&vec![0u8; 0x5000]),
        Err(ContainerError::NotThisFormat { .. })
    ));
}

#[test]
fn test_inject_grows_payload_and_keeps_remaining_tail() {
    let old = vec![0xAA; 16 * KB];
    let tail = b"TAIL_AFTER_PAYLOAD";
    let container = make_container(&old, tail);
    let new = vec![0xBB; 32 * KB];
    let out = inject(&container, &new).unwrap();

    let mut expected = container[..PAYLOAD_OFFSET].to_vec();
    expected.extend_from_slice(&new);
    assert_eq!(out, expected);
}

#[test]
fn test_inject_shrinking_exposes_old_bytes() {
    let old: Vec<u8> = (0..=255u8).cycle().take(4 * KB).collect();
    let container = make_container(&old, b"END");
    let new = vec![0x77; KB];
    let out = inject(&container, &new).unwrap();

    assert_eq!(out.len(), container.len());
    assert_eq!(&out[..PAYLOAD_OFFSET], &container[..PAYLOAD_OFFSET]);
    assert_eq!(&out[PAYLOAD_OFFSET..PAYLOAD_OFFSET + KB], &new[..]);
    assert_eq!(&out[PAYLOAD_OFFSET + KB..], &container[PAYLOAD_OFFSET + KB..]);
}

#[test]
fn test_inject_round_trip_same_size() {
    let container = make_container(&[0x10; 8 * KB], &[]);
    let new = vec![0x31; 8 * KB];
    let out = inject(&container, &new).unwrap();
    assert_eq!(decode(&out).unwrap(), new);
}

#[test]
fn test_inject_wrong_format() {
    assert!(matches!(
        inject(&[0u8; 16], &[1]),
        Err(ContainerError::NotThisFormat { .. })
    ));
}
