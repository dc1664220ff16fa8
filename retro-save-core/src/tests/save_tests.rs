use super::*;
use crate::error::ContainerError;

#[test]
fn test_transforms_do_not_mutate_original() {
    let save = SaveBuffer::new(vec![1, 2, 3, 4]);
    let swapped = save.byte_swapped(2).unwrap();
    assert_eq!(swapped.as_bytes(), &[2, 1, 4, 3]);
    assert_eq!(save.as_bytes(), &[1, 2, 3, 4]);
}

#[test]
fn test_composed_transforms() {
    let save = SaveBuffer::new(vec![1, 2, 3, 4, 0, 0]);
    let out = save
        .with_trimmed_whitespace()
        .byte_swapped(2)
        .unwrap()
        .word_swapped(2)
        .unwrap();
    assert_eq!(out.as_bytes(), &[4, 3, 2, 1]);
}

#[test]
fn test_with_size_and_pow2() {
    let save = SaveBuffer::new(vec![9; 3]);
    assert_eq!(save.with_size(5).as_bytes(), &[9, 9, 9, 0, 0]);
    assert_eq!(save.with_size(1).len(), 3);
    assert_eq!(save.expanded_to_next_pow2().len(), 4);
    assert_eq!(save.expanded_to_next_pow2().expanded_to_next_pow2().len(), 8);
}

#[test]
fn test_misaligned_swap_fails() {
    let save = SaveBuffer::new(vec![1, 2, 3]);
    assert!(matches!(
        save.byte_swapped(2),
        Err(ContainerError::MisalignedLength { len: 3, group: 2 })
    ));
}

#[test]
fn test_density() {
    assert_eq!(SaveBuffer::new(vec![0x00, 0xFF, 0x12, 0x34]).density(), 0.5);
    assert_eq!(SaveBuffer::default().density(), 0.0);
}

#[test]
fn test_normalized_size_pads_with_pad_byte() {
    let save = SaveBuffer::new(vec![1, 2]);
    assert_eq!(save.with_normalized_size(4, 0xFF).as_bytes(), &[1, 2, 0xFF, 0xFF]);
}

#[test]
fn test_normalized_size_picks_denser_bank() {
    let mut bytes = vec![0xFF; 4];
    bytes.extend_from_slice(&[0x11, 0x22, 0x33, 0xFF]);
    let save = SaveBuffer::new(bytes);
    assert_eq!(save.with_normalized_size(4, 0xFF).as_bytes(), &[0x11, 0x22, 0x33, 0xFF]);
}

#[test]
fn test_normalized_size_tie_keeps_first_bank() {
    let save = SaveBuffer::new(vec![1, 0, 2, 0, 3, 3]);
    assert_eq!(save.with_normalized_size(2, 0xFF).as_bytes(), &[1, 0]);
}

#[test]
fn test_normalized_size_truncates_when_under_double() {
    let save = SaveBuffer::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(save.with_normalized_size(3, 0xFF).as_bytes(), &[1, 2, 3]);
    assert_eq!(save.with_normalized_size(5, 0xFF), save);
}
