//! Hex digit to segment mapping

use qcode_hal::bus::segment;

/// Segment patterns for 0-F (bit 0 = A ... bit 6 = G)
pub const HEX_SEGMENTS: [u8; 16] = [
    0b_0011_1111, // 0
    0b_0000_0110, // 1
    0b_0101_1011, // 2
    0b_0100_1111, // 3
    0b_0110_0110, // 4
    0b_0110_1101, // 5
    0b_0111_1101, // 6
    0b_0000_0111, // 7
    0b_0111_1111, // 8
    0b_0110_1111, // 9
    0b_0111_0111, // A
    0b_0111_1100, // b
    0b_0011_1001, // C
    0b_0101_1110, // d
    0b_0111_1001, // E
    0b_0111_0001, // F
];

/// Pattern for one digit; only the low nibble of `value` is used
pub const fn encode(value: u8, decimal_point: bool) -> u8 {
    let pattern = HEX_SEGMENTS[(value & 0x0F) as usize];
    if decimal_point {
        pattern | segment::DP
    } else {
        pattern
    }
}
