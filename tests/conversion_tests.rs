// tests/conversion_tests.rs
use mixendian_rs::*;

fn opposite(order: Endian) -> Endian {
    if order.is_big_endian() {
        Endian::LITTLE
    } else {
        Endian::BIG
    }
}

#[test]
fn test_identity_for_native_order() {
    let native = native_int_order();
    assert_eq!(convert(native, 0x0102u16).unwrap(), 0x0102);
    assert_eq!(convert(native, 0x0102_0304u32).unwrap(), 0x0102_0304);
    assert_eq!(convert(native, 0x0102_0304_0506_0708u64).unwrap(), 0x0102_0304_0506_0708);
    assert_eq!(convert(native, i16::MIN).unwrap(), i16::MIN);
    assert_eq!(convert(native, -7i32).unwrap(), -7);
    assert_eq!(convert(native, i64::MAX).unwrap(), i64::MAX);
}

#[test]
fn test_involution_for_every_order() {
    let native = native_int_order();
    for order in Endian::ALL {
        let value = 0x1122_3344_5566_7788u64;
        let converted = convert(order, value).unwrap();
        assert_eq!(convert(order, converted).unwrap(), value);
        assert_eq!(convert(native, convert(order, value).unwrap()).unwrap(), converted);

        let value = -0x1122_3344i32;
        assert_eq!(convert(order, convert(order, value).unwrap()).unwrap(), value);
    }
}

#[test]
fn test_single_byte_is_identity() {
    for order in Endian::ALL {
        assert_eq!(convert(order, 0x5Au8).unwrap(), 0x5A);
        assert_eq!(convert(order, i8::MIN).unwrap(), i8::MIN);

        let mut buf = [0u8; 1];
        write(order, &mut buf, 0xC3u8).unwrap();
        assert_eq!(buf, [0xC3]);
        assert_eq!(read::<u8>(order, &buf).unwrap(), 0xC3);
    }
}

#[test]
fn test_reversal_and_pair_swap_layouts() {
    let value = u32::from_ne_bytes([1, 2, 3, 4]);
    let native = native_int_order();

    let reversed = convert(opposite(native), value).unwrap();
    assert_eq!(reversed.to_ne_bytes(), [4, 3, 2, 1]);

    // value 0x01020304 stored in each order
    let mut buf = [0u8; 4];
    write(Endian::BIG, &mut buf, 0x0102_0304u32).unwrap();
    assert_eq!(buf, [1, 2, 3, 4]);
    write(Endian::LITTLE, &mut buf, 0x0102_0304u32).unwrap();
    assert_eq!(buf, [4, 3, 2, 1]);
    write(Endian::BIG | Endian::SWAP_PAIRS, &mut buf, 0x0102_0304u32).unwrap();
    assert_eq!(buf, [2, 1, 4, 3]);
    write(Endian::LITTLE | Endian::SWAP_PAIRS, &mut buf, 0x0102_0304u32).unwrap();
    assert_eq!(buf, [3, 4, 1, 2]);
}

#[test]
fn test_convert_matches_write_layout() {
    for order in Endian::ALL {
        let value = 0x0102_0304_0506_0708u64;
        let mut buf = [0u8; 8];
        write(order, &mut buf, value).unwrap();
        assert_eq!(convert(order, value).unwrap().to_ne_bytes(), buf);
    }
}

#[test]
fn test_cross_order_read_u16() {
    let mut buf = [0u8; 2];
    write(Endian::BIG, &mut buf, 0x0102u16).unwrap();
    assert_eq!(buf, [0x01, 0x02]);
    assert_eq!(read::<u16>(Endian::BIG, &buf).unwrap(), 0x0102);
    assert_eq!(read::<u16>(Endian::LITTLE, &buf).unwrap(), 0x0201);

    write(Endian::LITTLE, &mut buf, 0x0102u16).unwrap();
    assert_eq!(buf, [0x02, 0x01]);
}

#[test]
fn test_read_write_i16() {
    let mut buf = [1u8, 2];
    assert_eq!(read::<i16>(Endian::BIG, &buf).unwrap(), 0x0102);
    assert_eq!(read::<i16>(Endian::LITTLE, &buf).unwrap(), 0x0201);

    write(Endian::LITTLE, &mut buf, 0x0102i16).unwrap();
    assert_eq!(buf, [2, 1]);
}

#[test]
fn test_read_write_64_bit() {
    let be = [1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(read::<u64>(Endian::BIG, &be).unwrap(), 0x0102_0304_0506_0708);
    assert_eq!(read::<i64>(Endian::LITTLE, &be).unwrap(), 0x0807_0605_0403_0201);

    let mut buf = [0u8; 8];
    write(Endian::LITTLE, &mut buf, 0x0102_0304_0506_0708i64).unwrap();
    assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);
    write(Endian::PDP_11, &mut buf, 0x0102_0304_0506_0708u64).unwrap();
    assert_eq!(buf, [2, 1, 4, 3, 6, 5, 8, 7]);
    write(Endian::HONEYWELL_316, &mut buf, 0x0102_0304_0506_0708u64).unwrap();
    assert_eq!(buf, [7, 8, 5, 6, 3, 4, 1, 2]);
}

#[test]
fn test_signed_unsigned_parity() {
    for order in Endian::ALL {
        for bits in [0u32, 1, 0x8000_0000, 0xFFFF_FFFF, 0x0102_0304] {
            let as_signed = convert(order, bits as i32).unwrap();
            let as_unsigned = convert(order, bits).unwrap();
            assert_eq!(as_signed.to_ne_bytes(), as_unsigned.to_ne_bytes());

            let mut signed_buf = [0u8; 4];
            let mut unsigned_buf = [0u8; 4];
            write(order, &mut signed_buf, bits as i32).unwrap();
            write(order, &mut unsigned_buf, bits).unwrap();
            assert_eq!(signed_buf, unsigned_buf);
        }
    }
}

#[test]
fn test_invalid_orders_are_rejected() {
    for bits in [4u32, 0x10, 0xFF, u32::MAX] {
        let order = Endian::from_bits(bits);
        assert!(matches!(convert(order, 1u32), Err(EndianError::InvalidOrder(b)) if b == bits));
        assert!(matches!(read::<u16>(order, &[0, 0]), Err(EndianError::InvalidOrder(_))));
        assert!(matches!(write(order, &mut [0u8; 8], 1i64), Err(EndianError::InvalidOrder(_))));
    }
}

#[test]
fn test_short_buffers_are_rejected() {
    assert!(matches!(
        read::<u64>(Endian::BIG, &[0u8; 7]),
        Err(EndianError::BufferTooSmall { needed: 8, available: 7 })
    ));
    assert!(matches!(
        write(Endian::LITTLE, &mut [0u8; 1], 1u16),
        Err(EndianError::BufferTooSmall { needed: 2, available: 1 })
    ));
}

#[test]
fn test_slice_conversion() {
    let mut values = [0x0102u16, 0x0304, 0x0506];
    Endian::PDP_11.convert_slice(&mut values).unwrap();
    for (converted, original) in values.iter().zip([0x0102u16, 0x0304, 0x0506]) {
        assert_eq!(*converted, Endian::PDP_11.convert(original).unwrap());
    }
}

#[test]
fn test_concurrent_conversions() {
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            std::thread::spawn(move || {
                let order = Endian::ALL[(i % 4) as usize];
                let mut buf = [0u8; 4];
                for v in 0..1000u32 {
                    let value = v.wrapping_mul(0x9E37_79B9) ^ i;
                    write(order, &mut buf, value).unwrap();
                    assert_eq!(read::<u32>(order, &buf).unwrap(), value);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[cfg(feature = "float")]
mod float {
    use super::*;

    #[test]
    fn test_f32_layout() {
        let mut buf = [0u8; 4];
        write(Endian::BIG, &mut buf, 7.0f32).unwrap();
        assert_eq!(buf, [0x40, 0xE0, 0x00, 0x00]);
        write(Endian::LITTLE, &mut buf, 7.0f32).unwrap();
        assert_eq!(buf, [0x00, 0x00, 0xE0, 0x40]);
    }

    #[test]
    fn test_f32_read() {
        assert_eq!(read::<f32>(Endian::BIG, &[0x40, 0xE0, 0x00, 0x00]).unwrap(), 7.0);
        assert_eq!(read::<f32>(Endian::LITTLE, &[0x00, 0x00, 0xE0, 0x40]).unwrap(), 7.0);
        assert_eq!(read::<f32>(Endian::PDP_11, &[0xE0, 0x40, 0x00, 0x00]).unwrap(), 7.0);
    }

    #[test]
    fn test_f64_layout() {
        let be = [0x40u8, 0x1C, 0, 0, 0, 0, 0, 0];
        let le = [0u8, 0, 0, 0, 0, 0, 0x1C, 0x40];

        assert_eq!(read::<f64>(Endian::BIG, &be).unwrap(), 7.0);
        assert_eq!(read::<f64>(Endian::LITTLE, &le).unwrap(), 7.0);

        let mut buf = [0u8; 8];
        write(Endian::BIG, &mut buf, 7.0f64).unwrap();
        assert_eq!(buf, be);
        write(Endian::LITTLE, &mut buf, 7.0f64).unwrap();
        assert_eq!(buf, le);
    }

    #[test]
    fn test_native_float_matches_memory() {
        let bytes = 7.0f32.to_ne_bytes();
        match native_float_order() {
            Endian::LITTLE => assert_eq!(bytes, [0x00, 0x00, 0xE0, 0x40]),
            Endian::BIG => assert_eq!(bytes, [0x40, 0xE0, 0x00, 0x00]),
            other => panic!("unexpected native float order {other}"),
        }
    }

    #[test]
    fn test_float_involution() {
        for order in Endian::ALL {
            for value in [0.0f64, -0.0, 1.5, f64::MAX, f64::MIN_POSITIVE, f64::INFINITY] {
                let converted = convert(order, value).unwrap();
                assert_eq!(convert(order, converted).unwrap().to_bits(), value.to_bits());
            }
        }
    }

    #[test]
    fn test_nan_bits_preserved() {
        let nan = f32::from_bits(0x7FC0_0001);
        for order in Endian::ALL {
            let mut buf = [0u8; 4];
            write(order, &mut buf, nan).unwrap();
            assert_eq!(read::<f32>(order, &buf).unwrap().to_bits(), nan.to_bits());
        }
    }
}
