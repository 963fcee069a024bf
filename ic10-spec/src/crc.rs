//! CRC32 string hash for `HASH("…")` constants
//!
//! Standard reflected CRC32 (polynomial 0xEDB88320) over the UTF-8 bytes,
//! reported as a signed 32-bit value the way the game stores prefab hashes.

const POLYNOMIAL: u32 = 0xEDB8_8320;

const fn crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { POLYNOMIAL ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

static CRC32_TABLE: [u32; 256] = crc32_table();

/// CRC32 of `text`, as the game's signed hash value
pub fn hash_string(text: &str) -> i32 {
    let crc = text.bytes().fold(0xFFFF_FFFFu32, |crc, byte| {
        CRC32_TABLE[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8)
    });
    (crc ^ 0xFFFF_FFFF) as i32
}
