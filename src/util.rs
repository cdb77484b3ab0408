#[macro_export]
#[doc(hidden)]
#[collapse_debuginfo(yes)]
macro_rules! __warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            defmt::warn!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($(&$x),*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
#[collapse_debuginfo(yes)]
macro_rules! __debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            defmt::debug!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($(&$x),*);
        }
    };
}

pub(crate) use {__debug as debug, __warn as warn};
