#[cfg(feature = "ecdsa")]
use jacobian_p256::{U256, ecdsa};

#[cfg(not(feature = "ecdsa"))]
fn main() {}

#[cfg(feature = "ecdsa")]
fn main() {
    let pub_x = U256::from_be_hex("a6ad1deeababc22e1eeba4bc93f6535ff95391a1981d9276bbe39b1ce473d6ed");
    let pub_y = U256::from_be_hex("688c2d5b0231d21e9f6ad264cfcdcf09aec15ea8c5c354f38b2fae95e82959e4");

    let hashed_msg = [
        0xa5, 0x91, 0xa6, 0xd4, 0x0b, 0xf4, 0x20, 0x40, 0x4a, 0x01, 0x17, 0x33, 0xcf, 0xb7, 0xb1,
        0x90, 0xd6, 0x2c, 0x65, 0xbf, 0x0b, 0xcd, 0xa3, 0x2b, 0x57, 0xb2, 0x77, 0xd9, 0xad, 0x9f,
        0x14, 0x6e,
    ];

    let r = U256::from_be_hex("912177ddfa310e5daf1a0d53c567b3c19261cda206bf788eaa4a3a708f090856");
    let s = U256::from_be_hex("1bd0b92ff302efae4782e16c1b3eeb32b05df7cca4c84d74535bd4fb613e02bb");

    match ecdsa::verify(&pub_x, &pub_y, &hashed_msg, &r, &s) {
        Ok(valid) => println!("signature valid: {valid}"),
        Err(err) => println!("malformed input: {err}"),
    }
}
