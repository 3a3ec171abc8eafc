//! Deterministic pseudo-random generators.
//!
//! Bob Jenkins's small fast PRNG ("jsf") at 8, 16, 32 and 64 bits, with the
//! recommended seeding routine. Sequences depend only on the seed, so they
//! are identical on every platform and build. The 16-bit variant follows
//! Melissa O'Neill's parameters. Not suitable for cryptography.
//!
//! Each generator is a plain value: no global state, and cloning one forks
//! an independent copy of its sequence.

macro_rules! jsf {
    (
        $(#[$meta:meta])*
        $name:ident: $ty:ty, seed = $seed:expr, rot = ($r1:expr, $r2:expr), $mix:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            a: $ty,
            b: $ty,
            c: $ty,
            d: $ty,
        }

        impl $name {
            /// Seeds a generator and runs the 20 warm-up rounds.
            #[must_use]
            pub fn new(seed: $ty) -> Self {
                let mut rng = Self {
                    a: $seed,
                    b: seed,
                    c: seed,
                    d: seed,
                };
                for _ in 0..20 {
                    rng.rand();
                }
                rng
            }

            /// Restores a generator from a snapshot taken with [`Self::state`].
            #[must_use]
            pub const fn from_state(state: [$ty; 4]) -> Self {
                let [a, b, c, d] = state;
                Self { a, b, c, d }
            }

            /// Internal state as `[a, b, c, d]`.
            #[must_use]
            pub const fn state(&self) -> [$ty; 4] {
                [self.a, self.b, self.c, self.d]
            }

            /// Advances the generator and returns the next value.
            pub fn rand(&mut self) -> $ty {
                let e = self.a.wrapping_sub(self.b.rotate_left($r1));
                self.a = self.b ^ self.c.rotate_left($r2);
                self.b = jsf!(@$mix self.c, self.d);
                self.c = self.d.wrapping_add(e);
                self.d = e.wrapping_add(self.a);
                self.d
            }
        }

        impl Iterator for $name {
            type Item = $ty;

            fn next(&mut self) -> Option<$ty> {
                Some(self.rand())
            }
        }
    };
    (@plain $c:expr, $d:expr) => {
        $c.wrapping_add($d)
    };
    (@rot37 $c:expr, $d:expr) => {
        $c.wrapping_add($d.rotate_left(37))
    };
}

jsf! {
    /// 8-bit jsf generator.
    Jsf8: u8, seed = 0xed, rot = (1, 4), plain
}

jsf! {
    /// 16-bit jsf generator.
    Jsf16: u16, seed = 0x5eed, rot = (13, 8), plain
}

jsf! {
    /// 32-bit jsf generator (Jenkins's reference parameters).
    Jsf32: u32, seed = 0xf1ea_5eed, rot = (27, 17), plain
}

jsf! {
    /// 64-bit jsf generator, three-rotate variant.
    Jsf64: u64, seed = 0xf1ea_5eed, rot = (7, 13), rot37
}
