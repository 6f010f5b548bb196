//! Development-related functionality.

/// ECDSA test vector: a key pair, a message digest and its signature.
///
/// All values are big-endian byte strings.
#[derive(Clone, Copy, Debug)]
pub struct EcdsaTestVector {
    /// Private scalar
    pub d: &'static [u8],

    /// Public key x-coordinate
    pub q_x: &'static [u8],

    /// Public key y-coordinate
    pub q_y: &'static [u8],

    /// Message digest
    pub m: &'static [u8],

    /// Signature `r` component
    pub r: &'static [u8],

    /// Signature `s` component
    pub s: &'static [u8],
}

/// Implement ECDSA verification tests for a curve from a list of
/// [`EcdsaTestVector`]s.
#[cfg(feature = "ecdsa")]
#[macro_export]
macro_rules! impl_ecdsa_verification_tests {
    ($curve:ty, $vectors:expr) => {
        fn uint(bytes: &[u8]) -> $crate::U256 {
            $crate::U256::from_be_slice(bytes)
        }

        #[test]
        fn ecdsa_verify_test_vectors() {
            for vector in $vectors {
                let verifying_key = $crate::ecdsa::VerifyingKey::<$curve>::from_coordinates(
                    uint(vector.q_x),
                    uint(vector.q_y),
                )
                .unwrap();
                let signature =
                    $crate::ecdsa::Signature::<$curve>::from_scalars(uint(vector.r), uint(vector.s))
                        .unwrap();

                assert_eq!(verifying_key.verify_prehash(vector.m, &signature), Ok(()));
                assert_eq!(
                    $crate::ecdsa::verify::<$curve>(
                        &uint(vector.q_x),
                        &uint(vector.q_y),
                        vector.m,
                        &uint(vector.r),
                        &uint(vector.s),
                    ),
                    Ok(true)
                );
            }
        }

        #[test]
        fn ecdsa_public_key_matches_secret() {
            for vector in $vectors {
                let public = $crate::JacobianPoint::<$curve>::mul_by_generator(&uint(vector.d))
                    .to_affine();
                assert_eq!(public.coordinates(), Some((uint(vector.q_x), uint(vector.q_y))));
            }
        }

        #[test]
        fn ecdsa_rejects_tampered_signatures() {
            for vector in $vectors {
                let (q_x, q_y) = (uint(vector.q_x), uint(vector.q_y));
                let (r, s) = (uint(vector.r), uint(vector.s));

                let other_r = r.wrapping_add(&$crate::U256::ONE);
                assert_eq!(
                    $crate::ecdsa::verify::<$curve>(&q_x, &q_y, vector.m, &other_r, &s),
                    Ok(false)
                );

                let mut digest = [0u8; 32];
                digest[32 - vector.m.len()..].copy_from_slice(vector.m);
                digest[31] ^= 1;
                assert_eq!(
                    $crate::ecdsa::verify::<$curve>(&q_x, &q_y, &digest, &r, &s),
                    Ok(false)
                );
            }
        }

        #[test]
        fn ecdsa_rejects_out_of_range_scalars() {
            let order = *<$curve as $crate::CurveParams>::ORDER.get();

            for vector in $vectors {
                let (q_x, q_y) = (uint(vector.q_x), uint(vector.q_y));

                for (r, s) in [
                    ($crate::U256::ZERO, uint(vector.s)),
                    (uint(vector.r), $crate::U256::ZERO),
                    (order, uint(vector.s)),
                    (uint(vector.r), order),
                ] {
                    assert_eq!(
                        $crate::ecdsa::verify::<$curve>(&q_x, &q_y, vector.m, &r, &s),
                        Err($crate::Error::ScalarOutOfRange)
                    );
                }
            }
        }
    };
}

/// Implement Jacobian arithmetic tests for a curve.
///
/// `$add_vectors` holds the affine coordinates of `[k] G` for `k = 1, 2, ...`
/// and `$mul_vectors` holds `(k, x, y)` triples for `[k] G`, all as
/// big-endian byte arrays.
#[macro_export]
macro_rules! impl_jacobian_arithmetic_tests {
    (
        $curve:ty,
        $affine:tt,
        $jacobian:tt,
        $add_vectors:expr,
        $mul_vectors:expr
    ) => {
        /// Assert that the provided Jacobian point matches the given test vector.
        macro_rules! assert_point_eq {
            ($actual:expr, $expected:expr) => {
                let (expected_x, expected_y) = $expected;
                let (actual_x, actual_y) = $actual
                    .to_affine()
                    .coordinates()
                    .expect("unexpected point at infinity");

                assert_eq!($crate::U256::from_be_slice(&expected_x), actual_x);
                assert_eq!($crate::U256::from_be_slice(&expected_y), actual_y);
            };
        }

        #[test]
        fn affine_to_jacobian() {
            let basepoint_affine = $affine::GENERATOR;
            let basepoint_jacobian = $jacobian::GENERATOR;

            assert_eq!($jacobian::from(basepoint_affine), basepoint_jacobian);
            assert_eq!(basepoint_jacobian.to_affine(), basepoint_affine);
            assert!(!bool::from(basepoint_jacobian.to_affine().is_identity()));

            assert!(bool::from($jacobian::IDENTITY.to_affine().is_identity()));
            assert_eq!($jacobian::from($affine::IDENTITY), $jacobian::IDENTITY);
        }

        #[test]
        fn generator_is_on_curve() {
            let (x, y) = <$curve as $crate::CurveParams>::GENERATOR;
            assert_eq!($affine::from_coordinates(x, y), Ok($affine::GENERATOR));
        }

        #[test]
        fn jacobian_identity_addition() {
            let identity = $jacobian::IDENTITY;
            let generator = $jacobian::GENERATOR;

            assert_eq!(identity + &generator, generator);
            assert_eq!(generator + &identity, generator);
            assert_eq!(identity.double(), identity);
        }

        #[test]
        fn test_vector_repeated_add() {
            let generator = $jacobian::GENERATOR;
            let mut p = generator;

            for i in 0..$add_vectors.len() {
                assert_point_eq!(p, $add_vectors[i]);
                p += generator;
            }
        }

        #[test]
        fn test_vector_double_generator() {
            let generator = $jacobian::GENERATOR;
            let mut p = generator;

            for i in [0, 1, 3, 7] {
                if i < $add_vectors.len() {
                    assert_point_eq!(p, $add_vectors[i]);
                }
                p = p.double();
            }
        }

        #[test]
        fn jacobian_add_vs_double() {
            let generator = $jacobian::GENERATOR;
            assert_eq!(generator + &generator, generator.double());

            let p = generator.double() + &generator;
            assert_eq!(p + &p, p.double());
        }

        #[test]
        fn jacobian_add_and_sub() {
            let generator = $jacobian::GENERATOR;

            assert_eq!((generator + &generator) - &generator, generator);
            assert_eq!(generator - &generator, $jacobian::IDENTITY);
            assert_eq!(generator + &(-generator), $jacobian::IDENTITY);
        }

        #[test]
        fn jacobian_double_and_sub() {
            let generator = $jacobian::GENERATOR;
            assert_eq!(generator.double() - &generator, generator);
        }

        #[test]
        fn affine_add_matches_jacobian() {
            let generator = $affine::GENERATOR;
            let triple = generator.double().add(&generator);

            assert_eq!(triple, ($jacobian::GENERATOR.double() + &$jacobian::GENERATOR).to_affine());
            assert_eq!(generator.add(&$affine::IDENTITY), generator);
            assert_eq!(generator.add(&generator.neg()), $affine::IDENTITY);
        }

        #[test]
        fn test_vector_scalar_mult() {
            let generator = $jacobian::GENERATOR;

            for (k, coords) in $add_vectors
                .iter()
                .enumerate()
                .map(|(k, coords)| ($crate::U256::from_u64(k as u64 + 1), *coords))
                .chain($mul_vectors.iter().cloned().map(|(k, x, y)| {
                    ($crate::U256::from_be_slice(&k), (x, y))
                }))
            {
                let p = generator * &k;
                assert_point_eq!(p, coords);
            }
        }

        #[test]
        fn scalar_mult_identity_laws() {
            let order = *<$curve as $crate::CurveParams>::ORDER.get();
            let generator = $jacobian::GENERATOR;

            assert_eq!(generator * &$crate::U256::ZERO, $jacobian::IDENTITY);
            assert_eq!(generator * &order, $jacobian::IDENTITY);
            assert_eq!($jacobian::IDENTITY * &order, $jacobian::IDENTITY);

            for (_, x, y) in $mul_vectors.iter().cloned() {
                let point = $affine::from_coordinates(
                    $crate::U256::from_be_slice(&x),
                    $crate::U256::from_be_slice(&y),
                )
                .expect("test vector is on the curve");
                assert_eq!(point.mul(&$crate::U256::ONE), point);
            }
        }
    };
}
