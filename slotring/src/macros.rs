#[cfg(feature = "log")]
#[macro_use]
mod log {
    macro_rules! ring_log {
        (trace, $($arg:expr),*) => { ::log::trace!($($arg),*); };
        (debug, $($arg:expr),*) => { ::log::debug!($($arg),*); };
    }
}

#[cfg(not(feature = "log"))]
#[macro_use]
mod log {
    macro_rules! ring_log {
        ($level:ident, $($arg:expr),*) => { $( let _ = $arg; )* }
    }
}

macro_rules! ring_trace {
    ($($arg:expr),*) => (ring_log!(trace, $($arg),*));
}

macro_rules! ring_debug {
    ($($arg:expr),*) => (ring_log!(debug, $($arg),*));
}
