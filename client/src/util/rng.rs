//! Random source for the wheel.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fresh generator seeded from the browser's `Math.random`.
pub fn browser_rng() -> StdRng {
    #[cfg(feature = "hydrate")]
    {
        // Two draws, 32 bits each, fill the 64-bit seed.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let draw = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        StdRng::seed_from_u64((draw() << 32) | draw())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // Spins only run in the browser.
        StdRng::seed_from_u64(0)
    }
}
