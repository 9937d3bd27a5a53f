/// Millisecond stopwatch: `Date.now()` under wasm32, `Instant` natively
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Time `f` when `enabled`, writing the duration into `slot`
    #[inline]
    pub(crate) fn measure<T>(enabled: bool, slot: &mut f64, f: impl FnOnce() -> T) -> T {
        if !enabled {
            return f();
        }
        let timer = Self::start();
        let out = f();
        *slot = timer.elapsed_ms();
        out
    }
}
