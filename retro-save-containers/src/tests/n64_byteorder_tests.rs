use super::*;
use retro_save_core::ContainerError;

#[test]
fn test_single_word_permutations() {
    let raw = [0xA0, 0xB1, 0xC2, 0xD3];
    let v = make_variants(&raw).unwrap();
    assert_eq!(v.original, raw);
    assert_eq!(v.endian_swapped, [0xB1, 0xA0, 0xD3, 0xC2]);
    assert_eq!(v.word_swapped, [0xC2, 0xD3, 0xA0, 0xB1]);
    assert_eq!(v.endian_and_word_swapped, [0xD3, 0xC2, 0xB1, 0xA0]);
}

#[test]
fn test_word_swapped_matches_plain_word_swap() {
    let raw: Vec<u8> = (0..64u8).collect();
    assert_eq!(
        to_byte_order(&raw, SaveByteOrder::WordSwapped).unwrap(),
        swap_words(&raw, 2).unwrap()
    );
}

#[test]
fn test_each_order_is_self_inverse() {
    let raw: Vec<u8> = (0..32u8).map(|i| i.wrapping_mul(37)).collect();
    for &order in SaveByteOrder::all() {
        let once = to_byte_order(&raw, order).unwrap();
        assert_eq!(to_byte_order(&once, order).unwrap(), raw, "{}", order.short_name());
    }
}

#[test]
fn test_misaligned_input() {
    assert!(matches!(
        make_variants(&[1, 2, 3]),
        Err(ContainerError::MisalignedLength { .. })
    ));
    // 2-aligned is enough for the endian swap alone
    assert!(to_byte_order(&[1, 2, 3, 4, 5, 6], SaveByteOrder::EndianSwapped).is_ok());
    assert!(to_byte_order(&[1, 2, 3, 4, 5, 6], SaveByteOrder::WordSwapped).is_err());
}

#[test]
fn test_iter_order() {
    let v = make_variants(&[1, 2, 3, 4]).unwrap();
    let orders: Vec<_> = v.iter().map(|(order, _)| order).collect();
    assert_eq!(orders, SaveByteOrder::all());
    assert_eq!(v.iter().next().unwrap().1, &[1, 2, 3, 4]);
}
