//! Test vectors for the secp256k1 group.

use hex_literal::hex;

/// Repeated addition of the generator.
///
/// These are the first 10 elements of the secp256k1 group, starting from the
/// generator.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    ),
    (
        hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
        hex!("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
    ),
    (
        hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
        hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
    ),
    (
        hex!("e493dbf1c10d80f3581e4904930b1404cc6c13900ee0758474fa94abe8c4cd13"),
        hex!("51ed993ea0d455b75642e2098ea51448d967ae33bfbdfe40cfe97bdc47739922"),
    ),
    (
        hex!("2f8bde4d1a07209355b4a7250a5c5128e88b84bddc619ab7cba8d569b240efe4"),
        hex!("d8ac222636e5e3d6d4dba9dda6c9c426f788271bab0d6840dca87d3aa6ac62d6"),
    ),
    (
        hex!("fff97bd5755eeea420453a14355235d382f6472f8568a18b2f057a1460297556"),
        hex!("ae12777aacfbb620f3be96017f45c560de80f0f6518fe4a03c870c36b075f297"),
    ),
    (
        hex!("5cbdf0646e5db4eaa398f365f2ea7a0e3d419b7e0330e39ce92bddedcac4f9bc"),
        hex!("6aebca40ba255960a3178d6d861a54dba813d0b813fde7b5a5082628087264da"),
    ),
    (
        hex!("2f01e5e15cca351daff3843fb70f3c2f0a1bdd05e5af888a67784ef3e10a2a01"),
        hex!("5c4da8a741539949293d082a132d13b4c2e213d6ba5b7617b5da2cb76cbde904"),
    ),
    (
        hex!("acd484e2f0c7f65309ad178a9f559abde09796974c57e714c35f110dfc27ccbe"),
        hex!("cc338921b0a7d9fd64380971763b61e9add888a4375f8e0f05cc262ac64f9c37"),
    ),
    (
        hex!("a0434d9e47f3c86235477c7b1ae6ae5d3442d49b1943c2b752a68e2a47e247c7"),
        hex!("893aba425419bc27a3b6c7e693a24c696f794c2ed877a1593cbee53b037368d7"),
    ),
];

/// Scalar multiples of the generator: `(k, x, y)` with `(x, y) = [k] G`.
pub const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("00000000000000000000000000000000000000000000000000000000deadbeef"),
        hex!("76d2fdf1302d1fa9556f4df94ec84cefba6d482e54f47c6c2a238c1baa560f0e"),
        hex!("b754ac7e7a3e09c44184cb451a4f5fb557f32053eb015dffebb655b5cfd54d8a"),
    ),
    (
        hex!("4f1e8f0e4f6ac6a0b5f4b8b4e1e9b2c3d4a5968778695a4b3c2d1e0f00112233"),
        hex!("7f05f4082806e73db4ce2e2d3fb376b6191c6153d537f84aa2164d4a54183b26"),
        hex!("e3a1c86b2ca6b0015192d6c507e833279dba38686ca97187fa1fa4356f1975bf"),
    ),
    (
        hex!("67fd9324008c01cd43c620246131241b4bd120acf3dc7ec7ff7e474b43556add"),
        hex!("7c7d38af551fec438131cfac9449bec9cfb73f62d43a9b5d4b82e70919cbbaf5"),
        hex!("b568e27040c76264f4a7a409c1a0a7b7ce01744a7f2246c05243d2460f079654"),
    ),
    (
        hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        hex!("b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777"),
    ),
];
