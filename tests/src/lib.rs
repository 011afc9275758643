//! End-to-end checks of the scanning engine: real loopback sockets for the
//! TCP prober, instrumented probers for the scheduling guarantees.

#[cfg(test)]
mod scan;
#[cfg(test)]
mod utils;
