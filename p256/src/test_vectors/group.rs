//! Test vectors for the secp256r1 group.

use hex_literal::hex;

/// Repeated addition of the generator.
///
/// These are the first 10 elements of the P-256 group, starting from the
/// generator.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    ),
    (
        hex!("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
        hex!("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
    ),
    (
        hex!("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
        hex!("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
    ),
    (
        hex!("e2534a3532d08fbba02dde659ee62bd0031fe2db785596ef509302446b030852"),
        hex!("e0f1575a4c633cc719dfee5fda862d764efc96c3f30ee0055c42c23f184ed8c6"),
    ),
    (
        hex!("51590b7a515140d2d784c85608668fdfef8c82fd1f5be52421554a0dc3d033ed"),
        hex!("e0c17da8904a727d8ae1bf36bf8a79260d012f00d4d80888d1d0bb44fda16da4"),
    ),
    (
        hex!("b01a172a76a4602c92d3242cb897dde3024c740debb215b4c6b0aae93c2291a9"),
        hex!("e85c10743237dad56fec0e2dfba703791c00f7701c7e16bdfd7c48538fc77fe2"),
    ),
    (
        hex!("8e533b6fa0bf7b4625bb30667c01fb607ef9f8b8a80fef5b300628703187b2a3"),
        hex!("73eb1dbde03318366d069f83a6f5900053c73633cb041b21c55e1a86c1f400b4"),
    ),
    (
        hex!("62d9779dbee9b0534042742d3ab54cadc1d238980fce97dbb4dd9dc1db6fb393"),
        hex!("ad5accbd91e9d8244ff15d771167cee0a2ed51f6bbe76a78da540a6a0f09957e"),
    ),
    (
        hex!("ea68d7b6fedf0b71878938d51d71f8729e0acb8c2c6df8b3d79e8a4b90949ee0"),
        hex!("2a2744c972c9fce787014a964a8ea0c84d714feaa4de823fe85a224a4dd048fa"),
    ),
    (
        hex!("cef66d6b2a3a993e591214d1ea223fb545ca6c471c48306e4c36069404c5723f"),
        hex!("878662a229aaae906e123cdd9d3b4c10590ded29fe751eeeca34bbaa44af0773"),
    ),
];

/// Scalar multiples of the generator: `(k, x, y)` with `(x, y) = [k] G`.
pub const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("00000000000000000000000000000000000000000000000000000000deadbeef"),
        hex!("b487d183dc4806058eb31a29bedefd7bcca987b77a381a3684871d8449c18394"),
        hex!("2a122cc711a80453678c3032de4b6fff2c86342e82d1e7adb617c4165c43ce5e"),
    ),
    (
        hex!("4f1e8f0e4f6ac6a0b5f4b8b4e1e9b2c3d4a5968778695a4b3c2d1e0f00112233"),
        hex!("a059fedd3583893c10c0dd066ed72f75b1dd9e586d29d608f91fdae8052b137e"),
        hex!("318b9cfc38a3fda8bc13c492f0578636be4823e81b2221e0807c0480386dca82"),
    ),
    (
        hex!("67fd9324008c01cd43c620246131241b4bd120acf3dc7ec7ff7e474b43556add"),
        hex!("b61389a919b38bbd4226392d9b7917a3d17721f6ae72cddd8655f009a1a4ca2d"),
        hex!("7234b2d85b3c7ff55ec39107172f8eeb7e172a86e5c38e380080ce5c95237cce"),
    ),
    (
        hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550"),
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex!("b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a"),
    ),
];
