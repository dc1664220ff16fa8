use super::*;
use retro_save_core::checksum::{encode_vc_checksum, vc_additive_sum};

/// 32-byte header of 0x11, the save, and a 128-byte trailer of 0x22.
fn make_container(save: &[u8]) -> Vec<u8> {
    let mut container = vec![0x11; HEADER_SIZE];
    container.extend_from_slice(save);
    container.extend_from_slice(&[0x22; 128]);
    container
}

#[test]
fn test_identify() {
    assert!(identify(&vec![0u8; HEADER_SIZE + 512]));
    assert!(!identify(&vec![0u8; HEADER_SIZE + 511]));
    assert!(!identify(&[0u8; HEADER_SIZE]));
}

#[test]
fn test_payload_size_selection() {
    assert_eq!(payload_size_for(8192 + 128), Some(8192));
    assert_eq!(payload_size_for(40000), Some(32768));
    assert_eq!(payload_size_for(512), Some(512));
    assert_eq!(payload_size_for(511), None);
}

#[test]
fn test_decode_ignores_trailer() {
    let save = vec![0x5A; 8192];
    let container = make_container(&save);
    assert_eq!(decode(&container).unwrap(), save);
}

#[test]
fn test_decode_too_small() {
    assert!(matches!(
        decode(&[0u8; HEADER_SIZE]),
        Err(ContainerError::TooSmall { .. })
    ));
    assert!(matches!(
        decode(&vec![0u8; HEADER_SIZE + 100]),
        Err(ContainerError::TooSmall { .. })
    ));
}

#[test]
fn test_inject_preserves_header_and_trailer() {
    let container = make_container(&vec![0x33; 8192]);
    let new = vec![0x44; 8192];
    let out = inject(&container, &new).unwrap();

    for i in 0..HEADER_SIZE {
        if i == 0x02 || i == 0x03 {
            continue;
        }
        assert_eq!(out[i], container[i], "header byte 0x{i:02X} changed");
    }

    let mut working = container[..HEADER_SIZE].to_vec();
    working[0x02] = 0;
    working[0x03] = 0;
    let expected = encode_vc_checksum(vc_additive_sum(&working, &new));
    assert_eq!(&out[0x02..0x04], &expected);

    assert_eq!(&out[HEADER_SIZE..HEADER_SIZE + 8192], &new[..]);
    assert!(out[HEADER_SIZE + 8192..].iter().all(|&b| b == 0x22));
    assert_eq!(out.len(), container.len());
}

#[test]
fn test_inject_checksum_known_value() {
    // header: 30 bytes of 0x11 (slot zeroed) = 0x01FE; save: 512 × 0x01 = 0x0200
    let container = make_container(&[0u8; 512]);
    let out = inject(&container, &[0x01; 512]).unwrap();
    // sum 0x03FE → swapped [0xFE, 0x03] → high byte decremented
    assert_eq!(&out[0x02..0x04], &[0xFD, 0x03]);
}

#[test]
fn test_inject_checksum_tracks_payload() {
    let container = make_container(&vec![0u8; 2048]);
    let a = inject(&container, &vec![0x01; 2048]).unwrap();
    let mut changed = vec![0x01; 2048];
    changed[1000] = 0x02;
    let b = inject(&container, &changed).unwrap();
    assert_ne!(&a[0x02..0x04], &b[0x02..0x04]);
}

#[test]
fn test_inject_round_trip() {
    let container = make_container(&vec![0x00; 32768]);
    let new: Vec<u8> = (0..32768u32).map(|i| (i % 251) as u8).collect();
    let out = inject(&container, &new).unwrap();
    assert_eq!(decode(&out).unwrap(), new);
}

#[test]
fn test_inject_rejects_invalid_size() {
    let container = make_container(&vec![0u8; 8192]);
    assert!(matches!(
        inject(&container, &vec![0u8; 8000]),
        Err(ContainerError::SizeMismatch { actual: 8000, .. })
    ));
}

#[test]
fn test_inject_rejects_tiny_container() {
    assert!(matches!(
        inject(&[0u8; 10], &[0u8; 512]),
        Err(ContainerError::TooSmall { .. })
    ));
}

#[test]
fn test_inject_rejects_what_decode_rejects() {
    let short = [0u8; HEADER_SIZE + 1];
    assert!(!identify(&short));
    assert!(decode(&short).is_err());
    assert!(matches!(
        inject(&short, &[0u8; 512]),
        Err(ContainerError::TooSmall { .. })
    ));
    // the smallest accepted container is header plus one 512-byte save
    assert!(inject(&[0u8; HEADER_SIZE + 512], &[0u8; 512]).is_ok());
}
