/// 64-bit primes used as state multipliers.
pub const PRIMES: [u64; 8] = [
    0x1fff_ffff_ffff_ffff,
    0x3fff_ffff_ffff_ffc7,
    0x7fff_ffff_ffff_ffe7,
    0x94d0_49bb_1331_1243,
    0x9e37_79b9_7f4a_7c55,
    0xbf58_476d_1ce4_e5ff,
    0xd6e8_feb8_6659_fd99,
    0xffff_ffff_ffff_ffc5,
];
