//! Helpers to move between field elements, byte strings and big integers.

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

/// Field size in bytes
pub fn size_in_bytes<F: PrimeField>() -> usize {
    (F::MODULUS_BIT_SIZE as usize + 7) / 8
}

/// Get the modulus as `BigUint`
pub fn modulus_biguint<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_be(&F::MODULUS.to_bytes_be())
}

/// Interpret `bytes` as a big-endian integer and reduce it modulo the field order
pub fn reduce_be_bytes<F: PrimeField>(bytes: &[u8]) -> F {
    F::from_be_bytes_mod_order(bytes)
}

/// Big-endian encoding, left-padded with zeros to [size_in_bytes]
pub fn to_be_bytes_padded<F: PrimeField>(x: F) -> Vec<u8> {
    let bytes = x.into_bigint().to_bytes_be();
    let width = size_in_bytes::<F>();
    // the limb representation may be wider than the field, those bytes are zero
    let significant = &bytes[bytes.len().saturating_sub(width)..];
    let mut padded = vec![0u8; width - significant.len()];
    padded.extend_from_slice(significant);
    padded
}

pub fn to_biguint<F: PrimeField>(x: F) -> BigUint {
    BigUint::from_bytes_be(&to_be_bytes_padded(x))
}

/// `0x`-prefixed, zero-padded hexadecimal
pub fn to_hex_string<F: PrimeField>(x: F) -> String {
    format!("0x{}", hex::encode(to_be_bytes_padded(x)))
}

pub fn to_decimal_string<F: PrimeField>(x: F) -> String {
    to_biguint(x).to_string()
}
