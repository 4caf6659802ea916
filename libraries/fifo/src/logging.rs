//! Log macros used inside the crate. With the `defmt-log` feature they forward to [`defmt`],
//! otherwise they expand to nothing so the crate can be linked without a global defmt logger.

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        #[cfg(feature = "defmt-log")]
        defmt::trace!($s $(, $x)*);
        #[cfg(not(feature = "defmt-log"))]
        let _ = ($( & $x ),*);
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        #[cfg(feature = "defmt-log")]
        defmt::debug!($s $(, $x)*);
        #[cfg(not(feature = "defmt-log"))]
        let _ = ($( & $x ),*);
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        #[cfg(feature = "defmt-log")]
        defmt::warn!($s $(, $x)*);
        #[cfg(not(feature = "defmt-log"))]
        let _ = ($( & $x ),*);
    };
}
